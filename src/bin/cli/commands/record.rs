use anyhow::{bail, Result};

use errata::mistakes::record_attempt;

use crate::app::App;
use crate::render;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    id: &str,
    correct: bool,
    wrong: bool,
    notes: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    if correct == wrong {
        bail!("Pass exactly one of --correct or --wrong");
    }

    let mistake = app.find_mistake(id)?;
    let updated = record_attempt(&mut app.repo, mistake.id, correct, notes)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        OutputFormat::Plain => {
            let outcome = if correct { "correct" } else { "wrong" };
            println!("Recorded {} attempt on \"{}\"", outcome, updated.title);
            println!("  Now: {}", render::stats(&updated));
        }
    }

    Ok(())
}
