use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let summary = app.repo.subject_summary();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            let width = summary
                .iter()
                .map(|s| s.subject.label().len())
                .max()
                .unwrap_or(7);

            println!("{:<width$} Count", "Subject", width = width + 1);
            println!("{} {}", "\u{2500}".repeat(width + 1), "\u{2500}".repeat(6));

            for entry in &summary {
                println!("{:<width$} {}", entry.subject.label(), entry.count, width = width + 1);
            }

            let total: usize = summary.iter().map(|s| s.count).sum();
            println!("\n{} mistakes total", total);
        }
    }

    Ok(())
}
