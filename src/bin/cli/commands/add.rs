use std::path::Path;

use anyhow::{bail, Result};

use errata::mistakes::CreateMistakeRequest;
use errata::services::{ImageSource, PathImageSource, StubRecognizer, TextRecognizer};

use crate::app::{parse_subject, App};
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    title: &str,
    subject: &str,
    notes: &str,
    content: Option<String>,
    tags: Option<&str>,
    image: Option<&Path>,
    recognize: bool,
    format: &OutputFormat,
) -> Result<()> {
    let subject = parse_subject(subject)?;

    if recognize && image.is_none() {
        bail!("--recognize needs an image to work on; pass --image as well");
    }

    // A failed capture should not block saving the mistake itself
    let image_url = match image {
        Some(path) => {
            let captured = PathImageSource::new(path).acquire();
            if let Some(error) = &captured.error {
                eprintln!("Warning: {}", error);
            }
            captured.image_url
        }
        None => None,
    };

    let content = match (content, recognize, &image_url) {
        (Some(text), _, _) => Some(text),
        (None, true, Some(url)) => {
            let recognized = StubRecognizer::new().recognize(url);
            if let Some(error) = &recognized.error {
                eprintln!("Warning: recognition failed: {}", error);
            }
            recognized.text
        }
        (None, _, _) => None,
    };

    let tags = tags
        .map(|tag_str| {
            tag_str
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let mistake = app.repo.create(CreateMistakeRequest {
        title: title.to_string(),
        subject,
        notes: notes.to_string(),
        content,
        image_url,
        solution: None,
        tags,
    })?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&mistake)?);
        }
        OutputFormat::Plain => {
            println!("Added mistake \"{}\"", mistake.title);
            println!("  Subject: {}", mistake.subject.label());
            if !mistake.tags.is_empty() {
                println!(
                    "  Tags: {}",
                    mistake
                        .tags
                        .iter()
                        .map(|t| format!("#{}", t))
                        .collect::<Vec<_>>()
                        .join(" ")
                );
            }
            if let Some(content) = &mistake.content {
                println!("  Question: {}", content);
            }
            println!("  ID: {}", mistake.id);
        }
    }

    Ok(())
}
