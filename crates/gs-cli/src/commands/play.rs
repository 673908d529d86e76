use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::session::GachaSession;

pub fn run(catalog: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let sim = super::simulator(catalog, seed)?;
    let banner = sim.current_banner().map_err(|e| e.to_string())?;
    println!(
        "  {} {} {}",
        "Headhunting".bold(),
        banner.name,
        "(type 'help' for commands)".dimmed()
    );

    let mut session = GachaSession::new(sim);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }

        match session.process(&line) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) => eprintln!("{} {e}", "error:".red()),
        }

        let cmd = line.trim().to_lowercase();
        if cmd == "quit" || cmd == "q" {
            break;
        }
    }

    Ok(())
}
