use clap::Args;
use tracing::{error, info};

use crate::{
    config::ApiArgs,
    render::routes_table,
    session_args::{SessionArgs, prepare_session},
};

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    session: SessionArgs,
}

pub async fn run(api: &ApiArgs, args: ValidateArgs) -> Result<(), anyhow::Error> {
    let session = prepare_session(api, &args.session).await?;

    if !session.solution().is_empty() {
        println!("{}", routes_table(&session));
    }

    if !session.uses_initial_solution() {
        info!("No initial solution to validate");
        return Ok(());
    }

    match session.validate() {
        Ok(()) => {
            info!(
                "Initial solution is valid ({} routes, {} selected stops)",
                session.solution().len(),
                session.selection().len()
            );
            Ok(())
        }
        Err(err) => {
            error!("{err}");
            Err(err.into())
        }
    }
}
