use std::fmt::Display;

use routeplan_catalog::{error::CatalogError, ids::StopId};
use routeplan_jobs::optimization_client::SubmissionError;
use thiserror::Error;

use crate::validator::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Route,
    Position,
}

impl Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Route => write!(f, "route"),
            IndexKind::Position => write!(f, "position"),
        }
    }
}

/// Misuse of the editor. None of these are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    #[error("Stop {0} is not in the catalog")]
    UnknownStop(StopId),

    #[error("Stop {0} is not selected")]
    NotSelected(StopId),

    #[error("No city selected")]
    NoCitySelected,

    #[error("Number of routes must be at least 1, got {0}")]
    InvalidRouteCount(u32),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to load stops: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to run optimization: {0}")]
    Submission(#[from] SubmissionError),
}
