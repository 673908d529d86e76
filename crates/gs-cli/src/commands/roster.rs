use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use gs_core::Rarity;

pub fn run(catalog: Option<&Path>, rarity: Option<u8>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let filter = rarity
        .map(Rarity::try_from)
        .transpose()
        .map_err(|e| e.to_string())?;

    let entities: Vec<_> = catalog
        .entities()
        .iter()
        .filter(|e| filter.is_none_or(|r| e.rarity == r))
        .collect();

    if entities.is_empty() {
        println!("  No entities found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Rarity", "Limited"]);

    for entity in &entities {
        table.add_row(vec![
            entity.id.clone(),
            entity.name.clone(),
            super::stars(entity.rarity).to_string(),
            if entity.limited { "yes" } else { "—" }.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} entities", entities.len());

    Ok(())
}
