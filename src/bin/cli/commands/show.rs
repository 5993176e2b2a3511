use anyhow::Result;

use errata::mistakes::DEFAULT_RELATED_LIMIT;

use crate::app::App;
use crate::render;
use crate::OutputFormat;

pub fn run(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    let mistake = app.find_mistake(id)?;
    let related = app.repo.list_related(mistake.id, DEFAULT_RELATED_LIMIT);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "mistake": mistake,
                "related": related,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            render::print_detail(&mistake);

            if !related.is_empty() {
                println!("\nMore {} mistakes:", mistake.subject.label());
                for entry in &related {
                    println!("  {}", render::mistake_row(entry));
                }
            }
        }
    }

    Ok(())
}
