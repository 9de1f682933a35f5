use comfy_table::Table;
use routeplan_catalog::ids::CityId;
use tracing::info;

use crate::config::ApiArgs;

pub async fn run(api: &ApiArgs, city_id: CityId) -> Result<(), anyhow::Error> {
    let client = api.catalog_client()?;
    let stops = client.load_stops(city_id).await?;

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Name",
        "Final",
        "Passenger flow",
        "Latitude",
        "Longitude",
    ]);
    for stop in &stops {
        table.add_row(vec![
            stop.id.to_string(),
            stop.name.clone(),
            if stop.is_final_stop { "yes" } else { "no" }.to_string(),
            format!("{:.0}", stop.passenger_flow),
            format!("{:.6}", stop.latitude),
            format!("{:.6}", stop.longitude),
        ]);
    }

    println!("{table}");
    info!(
        "{} stops in city {city_id}, {} final",
        stops.len(),
        stops.iter().filter(|stop| stop.is_final_stop).count()
    );

    Ok(())
}
