use std::time::Duration;

use jiff::{SignedDuration, Span, SpanRelativeTo};

/// Request timeout: plain seconds ("45"), a friendly duration ("30s", "1m 30s")
/// or ISO 8601 ("PT2M"). Zero and negative timeouts are rejected.
pub fn parse_timeout(input: &str) -> Result<Duration, String> {
    let input = input.trim();

    let duration = if let Ok(seconds) = input.parse::<i64>() {
        SignedDuration::from_secs(seconds)
    } else if let Ok(duration) = input.parse::<SignedDuration>() {
        duration
    } else {
        input
            .parse::<Span>()
            .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
            .map_err(|err| format!("Invalid timeout {input:?}: {err}"))?
    };

    if !duration.is_positive() {
        return Err(format!("Timeout must be positive, got {input:?}"));
    }

    Duration::try_from(duration).map_err(|err| err.to_string())
}

/// At least one page has to be fetched to get a catalog at all.
pub fn parse_max_pages(input: &str) -> Result<usize, String> {
    match input.trim().parse::<usize>() {
        Ok(0) => Err(String::from("At least one page is required")),
        Ok(max_pages) => Ok(max_pages),
        Err(err) => Err(format!("Invalid page limit {input:?}: {err}")),
    }
}
