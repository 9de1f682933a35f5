use std::{fs::File, io::BufWriter, path::PathBuf, time::Duration};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::{
    config::ApiArgs,
    render::{metrics_table, routes_table},
    session_args::{SessionArgs, prepare_session},
};

#[derive(Args)]
pub struct OptimizeArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Number of routes to generate, ignored when an initial solution is used
    #[arg(short = 'n', long, default_value_t = 1)]
    routes: u32,

    /// Write the raw optimization result as JSON
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub async fn run(api: &ApiArgs, args: OptimizeArgs) -> Result<(), anyhow::Error> {
    let mut session = prepare_session(api, &args.session).await?;
    session.set_number_of_routes(args.routes)?;

    if session.uses_initial_solution() {
        println!("{}", routes_table(&session));
    }

    let client = api.optimization_client()?;

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} ({elapsed})")?);
    bar.set_message(format!(
        "Running {}",
        session.algorithm().display_name()
    ));
    bar.enable_steady_tick(Duration::from_millis(100));

    let result = session.submit(&client).await;
    bar.finish_and_clear();
    let response = result?;

    info!(
        "Optimization finished with {} routes (initial solution used: {})",
        response.optimized_routes_count(),
        response.initial_solution_used.unwrap_or(false)
    );
    println!("{}", metrics_table(&response));

    if let Some(out) = args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        serde_json::to_writer_pretty(BufWriter::new(File::create(&out)?), &response)?;
        info!("Result written to {out:?}");
    }

    Ok(())
}
