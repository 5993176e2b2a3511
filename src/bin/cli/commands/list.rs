use anyhow::Result;

use crate::app::{parse_subject, App};
use crate::render;
use crate::OutputFormat;

pub fn run(
    app: &App,
    subject: Option<&str>,
    limit: Option<usize>,
    format: &OutputFormat,
) -> Result<()> {
    let mut mistakes = match subject {
        Some(label) => app.repo.list_by_subject(parse_subject(label)?),
        None => app.repo.list(),
    };

    if let Some(limit) = limit {
        mistakes.truncate(limit);
    }

    render::print_mistake_list(&mistakes, format)
}
