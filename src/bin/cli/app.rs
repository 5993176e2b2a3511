use std::path::Path;

use anyhow::{bail, Context, Result};

use errata::mistakes::{Mistake, MistakeRepository, Subject};
use errata::storage::JsonFileStore;

/// Shared application state for CLI commands
pub struct App {
    pub repo: MistakeRepository,
}

impl App {
    /// Open the repository from the given or default data directory
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => JsonFileStore::default_data_dir()
                .context("Failed to get data directory")?,
        };

        let store = JsonFileStore::new(data_dir).context("Failed to open data directory")?;
        let repo =
            MistakeRepository::open(Box::new(store)).context("Failed to load mistakes")?;

        Ok(Self { repo })
    }

    /// Find a mistake by full id or unique id prefix
    pub fn find_mistake(&self, id: &str) -> Result<Mistake> {
        let id_lower = id.to_lowercase();

        let mistakes = self.repo.list();
        let matches: Vec<&Mistake> = mistakes
            .iter()
            .filter(|m| m.id.to_string().starts_with(&id_lower))
            .collect();

        match matches.len() {
            0 => bail!("No mistake with id '{}'. Try 'list' to see ids.", id),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous id prefix '{}'. Matches:\n{}",
                id,
                matches
                    .iter()
                    .map(|m| format!("  - {}  {}", m.id, m.title))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}

/// Parse a subject label, listing the valid ones on failure
pub fn parse_subject(label: &str) -> Result<Subject> {
    label.parse().with_context(|| {
        format!(
            "Unknown subject '{}'. Valid subjects: {}",
            label,
            Subject::ALL.map(|s| s.label()).join(", ")
        )
    })
}
