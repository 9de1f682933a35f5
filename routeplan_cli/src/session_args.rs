use std::path::PathBuf;

use clap::Args;
use routeplan_catalog::ids::{CityId, StopId};
use routeplan_editor::session::{CityLoadOutcome, Session};
use routeplan_jobs::algorithm::Algorithm;
use tracing::{info, warn};

use crate::{config::ApiArgs, solution_file::read_solution};

#[derive(Args)]
pub struct SessionArgs {
    #[arg(short, long)]
    city: CityId,

    /// "sa" (simulated annealing) or "aco" (ant colony)
    #[arg(short, long, default_value = "sa")]
    algorithm: Algorithm,

    /// Only optimize over these stops
    #[arg(long, value_delimiter = ',', conflicts_with = "exclude")]
    stops: Option<Vec<StopId>>,

    /// Stops to leave out of the optimization
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<StopId>,

    /// JSON file with the initial solution, e.g. [[1, 2, 3], [3, 4]]
    #[arg(short, long)]
    solution: Option<PathBuf>,
}

/// Loads the city and applies the stop selection and the initial solution.
pub async fn prepare_session(api: &ApiArgs, args: &SessionArgs) -> Result<Session, anyhow::Error> {
    let client = api.catalog_client()?;
    let mut session = Session::new(args.algorithm);

    if let CityLoadOutcome::Loaded { stop_count } = session.load_city(&client, args.city).await? {
        info!("Loaded {stop_count} stops for city {}", args.city);
    }

    if let Some(stops) = &args.stops {
        session.select_only(stops.iter().copied())?;
    }
    for &stop_id in &args.exclude {
        session.deselect_stop(stop_id)?;
    }

    if let Some(path) = &args.solution {
        let solution = read_solution(path)?;
        let stops_in_file = solution.stop_ids().count();

        session.set_solution(solution);

        let kept = session.solution().stop_ids().count();
        if kept < stops_in_file {
            warn!(
                "{} stops of {path:?} are unknown or not selected and were dropped",
                stops_in_file - kept
            );
        }
        if !session.uses_initial_solution() {
            warn!(
                "{} does not use an initial solution, {path:?} is ignored",
                session.algorithm().display_name()
            );
        }
    }

    Ok(session)
}
