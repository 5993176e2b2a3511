use anyhow::Result;
use chrono::{DateTime, Local, Utc};

use errata::mistakes::Mistake;

use crate::OutputFormat;

pub fn short_id(mistake: &Mistake) -> String {
    mistake.id.to_string()[..8].to_string()
}

/// Error-rate fragment, e.g. "3 wrong / 5 attempts (60%)"
pub fn stats(mistake: &Mistake) -> String {
    let attempts = mistake.attempt_count();
    if attempts == 0 {
        "unattempted".to_string()
    } else {
        format!(
            "{} wrong / {} attempts ({:.0}%)",
            mistake.wrong_count,
            attempts,
            mistake.error_rate() * 100.0
        )
    }
}

fn local_stamp(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// One listing row: short id, subject, title, stats
pub fn mistake_row(mistake: &Mistake) -> String {
    format!(
        "{}  [{:<9}] {}  ({})",
        short_id(mistake),
        mistake.subject.label(),
        mistake.title,
        stats(mistake)
    )
}

/// Shared list printer for the listing commands
pub fn print_mistake_list(mistakes: &[Mistake], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(mistakes)?);
        }
        OutputFormat::Plain => {
            if mistakes.is_empty() {
                println!("No mistakes recorded.");
                return Ok(());
            }

            for mistake in mistakes {
                println!("{}", mistake_row(mistake));
            }
            println!("\n{} mistakes total", mistakes.len());
        }
    }

    Ok(())
}

/// Full multi-line view of one mistake, history included
pub fn print_detail(mistake: &Mistake) {
    println!("Title:    {}", mistake.title);
    println!("ID:       {}", mistake.id);
    println!("Subject:  {}", mistake.subject.label());
    println!("Created:  {}", local_stamp(&mistake.created_at));
    if !mistake.tags.is_empty() {
        println!(
            "Tags:     {}",
            mistake
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
    println!("Notes:    {}", mistake.notes);
    if let Some(content) = &mistake.content {
        println!("Question: {}", content);
    }
    if let Some(image_url) = &mistake.image_url {
        println!("Image:    {}", image_url);
    }
    if let Some(solution) = &mistake.solution {
        println!("Solution: {}", solution);
    }
    println!("Stats:    {}", stats(mistake));
    if let Some(last) = &mistake.last_reviewed_at {
        println!("Reviewed: {}", local_stamp(last));
    }

    if !mistake.correction_history.is_empty() {
        println!("History:");
        for attempt in &mistake.correction_history {
            let outcome = if attempt.is_correct { "correct" } else { "wrong" };
            match &attempt.notes {
                Some(notes) => {
                    println!("  {}  {:<7}  {}", local_stamp(&attempt.date), outcome, notes)
                }
                None => println!("  {}  {}", local_stamp(&attempt.date), outcome),
            }
        }
    }
}
