use anyhow::Result;
use chrono::Local;

use errata::review::generate_plan;

use crate::app::{parse_subject, App};
use crate::render;
use crate::OutputFormat;

pub fn run(
    app: &App,
    days: usize,
    subject: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let snapshot = match subject {
        Some(label) => app.repo.list_by_subject(parse_subject(label)?),
        None => app.repo.list(),
    };

    let plan = generate_plan(&snapshot, days, Local::now().date_naive())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        OutputFormat::Plain => {
            for day in &plan {
                let weekday = day.date.format("%a");
                if day.mistakes.is_empty() {
                    println!("{} {}  rest day", day.date, weekday);
                    continue;
                }

                println!("{} {}  {} to review", day.date, weekday, day.mistakes.len());
                for mistake in &day.mistakes {
                    println!("  {}", render::mistake_row(mistake));
                }
            }

            println!("\n{} mistakes over {} days", snapshot.len(), days);
        }
    }

    Ok(())
}
