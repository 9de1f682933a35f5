use comfy_table::Table;
use routeplan_editor::{preview::route_length_meters, session::Session, solution::route_label};
use routeplan_jobs::response::{OptimizationResponse, SolutionMetrics};

pub fn routes_table(session: &Session) -> Table {
    let catalog = session.catalog();

    let mut table = Table::new();
    table.set_header(vec!["Route", "Stops", "Length (km)"]);
    for (route_index, route) in session.solution().iter().enumerate() {
        let stops = route
            .iter()
            .map(|stop_id| match catalog.stop(stop_id) {
                Some(stop) => stop.label().to_string(),
                None => stop_id.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" -> ");

        table.add_row(vec![
            route_label(route_index),
            stops,
            format!("{:.2}", route_length_meters(route, catalog) / 1000.0),
        ]);
    }

    table
}

pub fn metrics_table(response: &OptimizationResponse) -> Table {
    let initial = response.initial_solution_metrics.as_ref();
    let optimized = response.final_solution_metrics.as_ref();

    let rows: [(&str, fn(&SolutionMetrics) -> Option<f64>); 5] = [
        ("Score", |m| m.score),
        ("Average distance (km)", |m| m.average_distance),
        ("Average time (min)", |m| m.average_time),
        ("Average transfers", |m| m.average_transfers),
        ("Direct trips (%)", |m| m.direct_trips_percentage),
    ];

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Initial", "Optimized"]);
    for (name, metric) in rows {
        table.add_row(vec![
            name.to_string(),
            format_metric(initial.and_then(metric)),
            format_metric(optimized.and_then(metric)),
        ]);
    }

    table
}

fn format_metric(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| String::from("-"))
}
