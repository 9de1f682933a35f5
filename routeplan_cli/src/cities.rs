use comfy_table::Table;
use tracing::info;

use crate::config::ApiArgs;

pub async fn run(api: &ApiArgs) -> Result<(), anyhow::Error> {
    let client = api.catalog_client()?;
    let cities = client.list_cities().await?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Country"]);
    for city in &cities {
        table.add_row(vec![
            city.id.to_string(),
            city.name.clone(),
            city.country.clone(),
        ]);
    }

    println!("{table}");
    info!("{} cities", cities.len());

    Ok(())
}
