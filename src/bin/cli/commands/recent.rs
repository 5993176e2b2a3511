use anyhow::Result;

use crate::app::App;
use crate::render;
use crate::OutputFormat;

pub fn run(app: &App, limit: usize, format: &OutputFormat) -> Result<()> {
    let mistakes = app.repo.list_recent(limit);
    render::print_mistake_list(&mistakes, format)
}
