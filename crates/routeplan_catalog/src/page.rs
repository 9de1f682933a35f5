use serde::Deserialize;

/// One page of a list endpoint.
///
/// Paginated endpoints answer with an envelope whose `next` link is absent or
/// null on the last page. Unpaginated endpoints answer with a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Page<T> {
    Paginated {
        results: Vec<T>,
        #[serde(default)]
        next: Option<String>,
    },
    Unpaginated(Vec<T>),
}

impl<T> Page<T> {
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        match self {
            Page::Paginated { results, next } => {
                (results, next.filter(|next| !next.trim().is_empty()))
            }
            Page::Unpaginated(results) => (results, None),
        }
    }
}
