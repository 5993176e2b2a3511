use std::io::{BufRead, Write};

use anyhow::Result;

use errata::review::ReviewSession;

use crate::app::{parse_subject, App};
use crate::OutputFormat;

pub fn run(app: &mut App, subject: Option<&str>, format: &OutputFormat) -> Result<()> {
    let queue = match subject {
        Some(label) => app.repo.list_by_subject(parse_subject(label)?),
        None => app.repo.list(),
    };

    if queue.is_empty() {
        println!("Nothing to review.");
        return Ok(());
    }

    let total = queue.len();
    let mut session = ReviewSession::new(queue);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "Reviewing {} mistakes. Commands: r(eveal), c(orrect), w(rong), q(uit)\n",
        total
    );

    'session: while let Some(current) = session.current().cloned() {
        let (answered, _) = session.progress();
        println!(
            "[{}/{}] {} ({})",
            answered + 1,
            total,
            current.title,
            current.subject.label()
        );
        println!("  Notes: {}", current.notes);
        if let Some(content) = &current.content {
            println!("  Question: {}", content);
        }

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            // EOF ends the session like "quit"
            let Some(line) = lines.next() else {
                break 'session;
            };

            match line?.trim() {
                "r" | "reveal" => {
                    session.reveal()?;
                    match &current.solution {
                        Some(solution) => println!("  Solution: {}", solution),
                        None => println!("  (no solution recorded)"),
                    }
                }
                "c" | "correct" => {
                    session.mark_correct(&mut app.repo)?;
                    break;
                }
                "w" | "wrong" => {
                    session.mark_incorrect(&mut app.repo)?;
                    break;
                }
                "q" | "quit" => break 'session,
                other => println!("  Unknown command '{}'; use r, c, w or q", other),
            }
        }

        println!();
    }

    let summary = session.summary();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            if summary.total == 0 {
                println!("No attempts recorded.");
            } else {
                println!(
                    "Session done: {} correct, {} wrong ({:.0}% accuracy)",
                    summary.correct,
                    summary.wrong,
                    summary.accuracy * 100.0
                );
            }
        }
    }

    Ok(())
}
