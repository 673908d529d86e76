use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Banner", "Featured", "Rarity"]);

    for banner in catalog.banners() {
        let featured = catalog
            .entity(&banner.featured)
            .map(|e| (e.name.clone(), e.rarity.to_string()))
            .unwrap_or_else(|| (banner.featured.clone(), "?".to_string()));
        table.add_row(vec![
            format!("{:02}", banner.id),
            banner.name.clone(),
            featured.0,
            featured.1,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} banners in rotation", catalog.banner_count());

    Ok(())
}
