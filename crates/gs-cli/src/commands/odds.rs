use comfy_table::{ContentArrangement, Table};
use gs_core::engine::SOFT_PITY_START;
use gs_core::state::RARE_PITY_CEILING;
use gs_core::{PullMode, rare_probability};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Pity", "6★ rate"]);

    table.add_row(vec![
        format!("0-{SOFT_PITY_START}"),
        format_rate(rare_probability(0, PullMode::Counted)),
    ]);
    for pity in SOFT_PITY_START + 1..RARE_PITY_CEILING {
        table.add_row(vec![
            pity.to_string(),
            format_rate(rare_probability(pity, PullMode::Counted)),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  Bonus pulls always use {}.",
        format_rate(rare_probability(0, PullMode::Bonus))
    );

    Ok(())
}

fn format_rate(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}
