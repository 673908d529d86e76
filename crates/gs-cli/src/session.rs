//! Interactive pull session.
//!
//! `GachaSession` wraps a [`Simulator`] and turns lines of user input into
//! engine requests, returning plain text for the caller to print.

use gs_core::stats::{roster, summarize};
use gs_core::{DrawResult, PullMode, PullOutcome, RandomSource, Rarity, Simulator};

/// Records shown by `history` without an explicit count.
const RECENT_HISTORY: usize = 20;

/// An interactive session over one simulator.
pub struct GachaSession<R: RandomSource> {
    sim: Simulator<R>,
}

impl<R: RandomSource> GachaSession<R> {
    /// Wrap a simulator.
    pub fn new(sim: Simulator<R>) -> Self {
        Self { sim }
    }

    /// Get the underlying simulator.
    #[cfg(test)]
    pub fn simulator(&self) -> &Simulator<R> {
        &self.sim
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "pull" => self.do_pull(rest),
            "ten" => self.do_pull("10"),
            "bonus" => self.do_bonus(),
            "next" => self.do_next(),
            "reset" => self.do_reset(),
            "status" => self.do_status(),
            "history" => self.do_history(rest),
            "roster" => self.do_roster(rest),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }

    fn do_pull(&mut self, rest: &str) -> Result<String, String> {
        let count = if rest.is_empty() {
            1
        } else {
            rest.parse::<u32>()
                .map_err(|_| format!("invalid pull count: {rest}"))?
        };
        if count != 1 && count != 10 {
            return Err("usage: pull [1|10]".to_string());
        }
        let outcome = self
            .sim
            .request_pulls(count, PullMode::Counted)
            .map_err(|e| e.to_string())?;
        Ok(self.describe(&outcome))
    }

    fn do_bonus(&mut self) -> Result<String, String> {
        let outcome = self
            .sim
            .request_pulls(10, PullMode::Bonus)
            .map_err(|e| e.to_string())?;
        Ok(self.describe(&outcome))
    }

    fn describe(&self, outcome: &PullOutcome) -> String {
        match outcome {
            PullOutcome::Rejected(reason) => format!("Nothing pulled: {reason}."),
            PullOutcome::Completed(results) => {
                let mut out = String::new();
                for result in results {
                    out.push_str(&format_draw(result));
                    out.push('\n');
                }
                let state = self.sim.state();
                out.push_str(&format!(
                    "Pity: 6★ {}/80, 5★ {}/10 | Tickets: bonus {}, next banner {}",
                    state.pity_rare,
                    state.pity_uncommon,
                    state.tickets.bonus_batch,
                    state.tickets.next_banner_batch
                ));
                out
            }
        }
    }

    fn do_next(&mut self) -> Result<String, String> {
        self.sim.advance_banner();
        let banner = self.sim.current_banner().map_err(|e| e.to_string())?;
        let featured = self
            .sim
            .catalog()
            .entity(&banner.featured)
            .map_or(banner.featured.as_str(), |e| e.name.as_str());
        Ok(format!(
            "Now on banner {:02}: {} (featured: {featured}). Limited guarantee and milestones reset; 6★ pity kept at {}.",
            banner.id,
            banner.name,
            self.sim.state().pity_rare
        ))
    }

    fn do_reset(&mut self) -> Result<String, String> {
        self.sim.reset_all();
        Ok("All data reset.".to_string())
    }

    fn do_status(&self) -> Result<String, String> {
        let state = self.sim.state();
        let banner = self.sim.current_banner().map_err(|e| e.to_string())?;
        let stats = summarize(state);

        let mut out = format!("Banner {:02}: {}\n", banner.id, banner.name);
        out.push_str(&format!(
            "6★ pity: {}/80 (next rate {:.1}%)\n",
            state.pity_rare,
            stats.next_rare_rate * 100.0
        ));
        out.push_str(&format!("5★ pity: {}/10\n", state.pity_uncommon));
        out.push_str(&format!("Limited guarantee: {}/120\n", state.pity_featured));
        out.push_str(&format!("Total pulls: {}\n", state.total_draws));
        out.push_str(&format!("Milestone: {}/60\n", stats.milestone_display));
        out.push_str(&format!(
            "Tickets: bonus {}, next banner {}\n",
            state.tickets.bonus_batch, state.tickets.next_banner_batch
        ));
        out.push_str(&format!(
            "Obtained: {} 6★, {} 5★, {} 4★ ({} distinct)",
            stats.count(Rarity::Six),
            stats.count(Rarity::Five),
            stats.count(Rarity::Four),
            stats.distinct_owned
        ));
        Ok(out)
    }

    fn do_history(&self, rest: &str) -> Result<String, String> {
        let limit = if rest.is_empty() {
            RECENT_HISTORY
        } else {
            rest.parse::<usize>()
                .map_err(|_| format!("invalid history length: {rest}"))?
        };

        let history = &self.sim.state().history;
        if history.is_empty() {
            return Ok("No pulls yet.".to_string());
        }

        let shown = history.len().min(limit);
        let mut out = format!("History ({} pulls, showing {shown}):\n", history.len());
        for record in history.iter().take(limit) {
            out.push_str(&format_draw(record));
            out.push('\n');
        }
        Ok(out.trim_end().to_string())
    }

    fn do_roster(&self, rest: &str) -> Result<String, String> {
        let rarity = if rest.is_empty() {
            None
        } else {
            let stars = rest
                .parse::<u8>()
                .map_err(|_| format!("invalid rarity: {rest}"))?;
            Some(Rarity::try_from(stars).map_err(|e| e.to_string())?)
        };

        let entries = roster(self.sim.catalog(), self.sim.state(), rarity);
        let mut out = String::new();
        for entry in &entries {
            out.push_str(&format!(
                "{} {} x{}\n",
                entry.entity.rarity, entry.entity.name, entry.owned
            ));
        }
        Ok(out.trim_end().to_string())
    }
}

fn format_draw(result: &DrawResult) -> String {
    let mut line = format!(
        "#{:04} {} {}",
        result.ordinal, result.entity.rarity, result.entity.name
    );
    if result.is_new {
        line.push_str(" [NEW]");
    }
    if result.mode == PullMode::Bonus {
        line.push_str(" (bonus)");
    }
    line
}

const HELP: &str = "\
Commands:
  pull [1|10]      Pull once or ten times
  ten              Pull ten times
  bonus            Spend a bonus ticket on a free ten-pull
  next             Rotate to the next banner
  reset            Discard all progress
  status           Show pity, milestones and tickets
  history [n]      Show the most recent pulls (default 20)
  roster [4|5|6]   Show owned copies per entity
  help             Show this help
  quit             Exit";
