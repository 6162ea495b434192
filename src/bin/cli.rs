use std::io::{self, Write};

use chrono::NaiveDate;
use coverage_planner::{Availability, Planner, export, view};

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show the planning grid\n  set <associate> <YYYY-MM-DD> <status>\n                                     Record availability (DNS, SUBOPTIMAL, NO ISSUES, or -- to clear)\n  generate                           Compute the coverage schedule\n  summary                            Show per-associate totals\n  export <path>                      Write the schedule CSV to <path>\n  quit|exit                          Exit"
    );
}

fn show(planner: &Planner) {
    let tree = view::render(&planner.snapshot());
    print!("{}", view::render_text(&tree));
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut planner = Planner::new();

    println!("Coverage Planner (CLI) - type 'help' for commands\n");
    show(&planner);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "show" => {
                show(&planner);
            }
            "set" => {
                let associate = parts.next();
                let week_s = parts.next();
                let rest: Vec<&str> = parts.collect();
                match (associate, week_s, !rest.is_empty()) {
                    (Some(associate), Some(week_s), true) => {
                        let week = match NaiveDate::parse_from_str(week_s, "%Y-%m-%d") {
                            Ok(d) => d,
                            Err(_) => {
                                println!("Invalid week (YYYY-MM-DD)");
                                continue;
                            }
                        };
                        let label = rest.join(" ");
                        let label = if label == "--" { String::new() } else { label };
                        let status = match Availability::from_label(&label) {
                            Some(status) => status,
                            None => {
                                println!("Invalid status (DNS, SUBOPTIMAL, NO ISSUES, or --)");
                                continue;
                            }
                        };
                        match planner.set_availability(associate, week, status) {
                            Ok(_) => show(&planner),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: set <associate> <YYYY-MM-DD> <status>"),
                }
            }
            "generate" => {
                let summary = planner.generate();
                println!("Generated ({})", summary.to_cli_summary());
                show(&planner);
            }
            "summary" => {
                for (associate, weeks) in planner.assignment_counts() {
                    println!("{}: {} weeks", associate, weeks);
                }
            }
            "export" => match parts.next() {
                Some(path) => match export::save_csv(planner.weeks(), planner.schedule(), path) {
                    Ok(_) => println!("Schedule exported to {}", path),
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: export <path>"),
            },
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
