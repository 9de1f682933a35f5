use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use routeplan_catalog::ids::CityId;

use crate::{
    config::ApiArgs, generate::GenerateSubcommands, optimize::OptimizeArgs,
    validate::ValidateArgs,
};

mod cities;
mod config;
mod generate;
mod optimize;
mod parsers;
mod render;
mod session_args;
mod solution_file;
mod stops;
mod validate;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    api: ApiArgs,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cities known to the service
    Cities,
    /// List the stops of a city
    Stops {
        #[arg(short, long)]
        city: CityId,
    },
    /// Check an initial solution without submitting it
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
    /// Submit an optimization job
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // before parsing, the API url can come from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Cities => cities::run(&cli.api).await?,
        Commands::Stops { city } => stops::run(&cli.api, city).await?,
        Commands::Validate { args } => validate::run(&cli.api, args).await?,
        Commands::Optimize { args } => optimize::run(&cli.api, args).await?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
