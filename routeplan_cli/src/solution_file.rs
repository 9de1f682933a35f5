use std::{fs::File, io::BufReader, path::Path};

use routeplan_editor::solution::Solution;

/// Reads an initial solution stored as a JSON array of stop id arrays.
pub fn read_solution(path: &Path) -> Result<Solution, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let solution = serde_json::from_reader(reader)?;
    Ok(solution)
}
