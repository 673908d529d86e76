use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use gs_core::stats::summarize;
use gs_core::{DrawResult, PullMode, PullOutcome, Rarity};

pub fn run(
    catalog: Option<&Path>,
    pulls: u32,
    seed: Option<u64>,
    use_tickets: bool,
    json: bool,
) -> Result<(), String> {
    let mut sim = super::simulator(catalog, seed)?;
    let mut rares: Vec<DrawResult> = Vec::new();
    let mut remaining = pulls;

    while remaining > 0 {
        let count = if remaining >= 10 { 10 } else { 1 };
        let outcome = sim
            .request_pulls(count, PullMode::Counted)
            .map_err(|e| e.to_string())?;
        collect_rares(&outcome, &mut rares);
        remaining -= count;

        if use_tickets && sim.state().tickets.bonus_batch > 0 {
            log::info!(
                "redeeming bonus ticket after {} draws",
                sim.state().total_draws
            );
            let outcome = sim
                .request_pulls(10, PullMode::Bonus)
                .map_err(|e| e.to_string())?;
            collect_rares(&outcome, &mut rares);
        }
    }

    if json {
        let out = serde_json::to_string_pretty(sim.state()).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let state = sim.state();
    let stats = summarize(state);
    let banner = sim.current_banner().map_err(|e| e.to_string())?;

    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        banner.name,
        format!(
            "({pulls} pulls, seed={})",
            seed.map_or("random".to_string(), |s| s.to_string())
        )
        .dimmed()
    );
    println!(
        "  {} draws total, {} from bonus tickets",
        stats.draws, stats.bonus_draws
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rarity", "Count", "Share"]);
    for rarity in Rarity::all() {
        let count = stats.count(*rarity);
        let share = if stats.draws == 0 {
            0.0
        } else {
            count as f64 * 100.0 / stats.draws as f64
        };
        table.add_row(vec![
            super::stars(*rarity).to_string(),
            count.to_string(),
            format!("{share:.1}%"),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Counters".bold().underline());
    println!("  6★ pity          {}/80", state.pity_rare);
    println!("  5★ pity          {}/10", state.pity_uncommon);
    println!("  Limited pity     {}/120", state.pity_featured);
    println!("  Milestone        {}/60", stats.milestone_display);
    println!(
        "  Tickets          bonus {}, next banner {}",
        state.tickets.bonus_batch, state.tickets.next_banner_batch
    );
    println!();

    if rares.is_empty() {
        println!("  {}", "(no 6★ pulls)".dimmed());
    } else {
        println!("  {}", "6★ Pulls".bold().underline());
        for result in &rares {
            let label = format!("#{:04}", result.ordinal).dimmed();
            let mut name = result.entity.name.yellow().bold().to_string();
            if result.entity.limited {
                name.push_str(&format!(" {}", "LIMITED".red()));
            }
            if result.mode == PullMode::Bonus {
                name.push_str(&format!(" {}", "(bonus)".dimmed()));
            }
            println!("  {label} {name}");
        }
    }

    Ok(())
}

fn collect_rares(outcome: &PullOutcome, rares: &mut Vec<DrawResult>) {
    rares.extend(
        outcome
            .results()
            .iter()
            .filter(|r| r.entity.rarity == Rarity::Six)
            .cloned(),
    );
}
