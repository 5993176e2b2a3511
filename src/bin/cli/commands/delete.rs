use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, id: &str, format: &OutputFormat) -> Result<()> {
    let mistake = app.find_mistake(id)?;
    app.repo.delete(mistake.id)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "deleted": mistake.id.to_string(),
                "title": mistake.title,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Deleted \"{}\" ({})", mistake.title, mistake.id);
        }
    }

    Ok(())
}
