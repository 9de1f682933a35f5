use std::{
    io::Write,
    path::{Path, PathBuf},
};

use clap::Subcommand;
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the optimization request, printed when no file is given
    JsonSchema {
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = routeplan_jobs::schema::generate_json_schema()?;
            write_schema(&schema, out.as_deref())?;
        }
    }

    Ok(())
}

fn write_schema(schema: &str, out: Option<&Path>) -> Result<(), anyhow::Error> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(path, schema)?;
            info!("Request schema written to {path:?}");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{schema}")?;
        }
    }

    Ok(())
}
