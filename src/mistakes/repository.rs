//! Mistake repository: owns the collection and writes through to storage

use thiserror::Error;
use uuid::Uuid;

use super::models::*;
use crate::storage::{MistakeStore, StoreError};

/// Default number of entries returned by [`MistakeRepository::list_recent`]
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Most related mistakes shown for one entry
pub const DEFAULT_RELATED_LIMIT: usize = 3;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("mistake not found: {0}")]
    NotFound(Uuid),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Owner of the mistake collection
///
/// Holds the full collection in memory, newest first, and persists the
/// whole collection through the store after every mutation. Mutating
/// operations addressed to a missing id signal [`RepositoryError::NotFound`];
/// read queries return `Option` or an empty list instead.
pub struct MistakeRepository {
    mistakes: Vec<Mistake>,
    store: Box<dyn MistakeStore>,
}

impl MistakeRepository {
    /// Load the prior collection from the store (empty on first run)
    pub fn open(store: Box<dyn MistakeStore>) -> Result<Self> {
        let mistakes = store.load()?;
        log::info!("Loaded {} mistakes from store", mistakes.len());
        Ok(Self { mistakes, store })
    }

    // ===== CRUD Operations =====

    /// Create a new mistake and place it at the front of iteration order
    pub fn create(&mut self, draft: CreateMistakeRequest) -> Result<Mistake> {
        if draft.title.trim().is_empty() {
            return Err(RepositoryError::InvalidRequest(
                "title must not be empty".to_string(),
            ));
        }

        let mistake = Mistake::new(draft);
        log::debug!("Created mistake {} ({})", mistake.id, mistake.title);

        self.mistakes.insert(0, mistake.clone());
        self.persist()?;

        Ok(mistake)
    }

    /// Shallow-merge the given fields into an existing mistake
    ///
    /// Mastery counters and history are not reachable from the request
    /// type; they change only through the attempt recorder.
    pub fn update(&mut self, id: Uuid, updates: UpdateMistakeRequest) -> Result<Mistake> {
        let mistake = self
            .mistakes
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        if let Some(title) = updates.title {
            mistake.title = title;
        }
        if let Some(subject) = updates.subject {
            mistake.subject = subject;
        }
        if let Some(content) = updates.content {
            mistake.content = Some(content);
        }
        if let Some(notes) = updates.notes {
            mistake.notes = notes;
        }
        if let Some(image_url) = updates.image_url {
            mistake.image_url = Some(image_url);
        }
        if let Some(solution) = updates.solution {
            mistake.solution = Some(solution);
        }
        if let Some(tags) = updates.tags {
            mistake.tags = dedup_tags(tags);
        }

        let updated = mistake.clone();
        self.persist()?;

        Ok(updated)
    }

    /// Remove a mistake; later lookups by this id return `None`
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let len_before = self.mistakes.len();
        self.mistakes.retain(|m| m.id != id);

        if self.mistakes.len() == len_before {
            return Err(RepositoryError::NotFound(id));
        }

        log::debug!("Deleted mistake {}", id);
        self.persist()?;

        Ok(())
    }

    // ===== Queries =====

    /// Look up a mistake by id
    pub fn get(&self, id: Uuid) -> Option<Mistake> {
        self.mistakes.iter().find(|m| m.id == id).cloned()
    }

    /// Snapshot of the whole collection in canonical (newest-first) order
    pub fn list(&self) -> Vec<Mistake> {
        self.mistakes.clone()
    }

    /// All mistakes for one subject, in iteration order
    pub fn list_by_subject(&self, subject: Subject) -> Vec<Mistake> {
        self.mistakes
            .iter()
            .filter(|m| m.subject == subject)
            .cloned()
            .collect()
    }

    /// At most `limit` mistakes by `created_at` descending; creation-time
    /// ties keep insertion order (stable sort)
    pub fn list_recent(&self, limit: usize) -> Vec<Mistake> {
        let mut recent = self.mistakes.clone();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        recent
    }

    /// Other mistakes sharing the subject of `id`, at most `limit`.
    /// Unknown ids yield an empty list.
    pub fn list_related(&self, id: Uuid, limit: usize) -> Vec<Mistake> {
        let Some(subject) = self.mistakes.iter().find(|m| m.id == id).map(|m| m.subject) else {
            return Vec::new();
        };

        self.mistakes
            .iter()
            .filter(|m| m.subject == subject && m.id != id)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Mistake count per subject, zeros included, in canonical subject order
    pub fn subject_summary(&self) -> Vec<SubjectCount> {
        Subject::ALL
            .into_iter()
            .map(|subject| SubjectCount {
                subject,
                count: self.mistakes.iter().filter(|m| m.subject == subject).count(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.mistakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mistakes.is_empty()
    }

    // ===== Internal =====

    /// Mutable access for the attempt recorder
    pub(crate) fn entry_mut(&mut self, id: Uuid) -> Option<&mut Mistake> {
        self.mistakes.iter_mut().find(|m| m.id == id)
    }

    /// Write the full collection through to the store
    pub(crate) fn persist(&self) -> Result<()> {
        self.store.save(&self.mistakes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFileStore;
    use tempfile::TempDir;

    fn create_test_repository() -> (MistakeRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();
        let repo = MistakeRepository::open(Box::new(store)).unwrap();
        (repo, temp_dir)
    }

    fn draft(title: &str, subject: Subject) -> CreateMistakeRequest {
        CreateMistakeRequest {
            title: title.to_string(),
            subject,
            notes: "sign error".to_string(),
            content: None,
            image_url: None,
            solution: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let (mut repo, _temp) = create_test_repository();

        let created = repo.create(draft("Vector cross product", Subject::Math)).unwrap();
        let found = repo.get(created.id).unwrap();
        assert_eq!(found.title, "Vector cross product");
        assert_eq!(found.subject, Subject::Math);
        assert_eq!(found.correction_history.len(), 0);
    }

    #[test]
    fn test_create_inserts_at_front() {
        let (mut repo, _temp) = create_test_repository();

        repo.create(draft("first", Subject::Math)).unwrap();
        let second = repo.create(draft("second", Subject::Math)).unwrap();

        let all = repo.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let (mut repo, _temp) = create_test_repository();

        let result = repo.create(draft("   ", Subject::English));
        assert!(matches!(result, Err(RepositoryError::InvalidRequest(_))));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_update_merges_fields() {
        let (mut repo, _temp) = create_test_repository();

        let created = repo.create(draft("Ohm's law", Subject::Physics)).unwrap();
        let updated = repo
            .update(
                created.id,
                UpdateMistakeRequest {
                    notes: Some("mixed up units".to_string()),
                    solution: Some("V = IR".to_string()),
                    tags: Some(vec!["circuits".to_string(), "circuits".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Ohm's law");
        assert_eq!(updated.notes, "mixed up units");
        assert_eq!(updated.solution.as_deref(), Some("V = IR"));
        assert_eq!(updated.tags, vec!["circuits"]);
    }

    #[test]
    fn test_update_missing_id_signals_not_found() {
        let (mut repo, _temp) = create_test_repository();

        let result = repo.update(Uuid::new_v4(), UpdateMistakeRequest::default());
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_update_cannot_touch_mastery_fields() {
        let (mut repo, _temp) = create_test_repository();

        let created = repo.create(draft("Titration", Subject::Chemistry)).unwrap();
        crate::mistakes::record_attempt(&mut repo, created.id, false, None).unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateMistakeRequest {
                    title: Some("Titration endpoint".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.wrong_count, 1);
        assert_eq!(updated.correction_history.len(), 1);
        assert!(updated.last_reviewed_at.is_some());
    }

    #[test]
    fn test_delete() {
        let (mut repo, _temp) = create_test_repository();

        let created = repo.create(draft("Cell division", Subject::Biology)).unwrap();
        repo.delete(created.id).unwrap();

        assert!(repo.get(created.id).is_none());
        assert!(matches!(
            repo.delete(created.id),
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_by_subject() {
        let (mut repo, _temp) = create_test_repository();

        repo.create(draft("a", Subject::Math)).unwrap();
        repo.create(draft("b", Subject::History)).unwrap();
        repo.create(draft("c", Subject::Math)).unwrap();

        let math = repo.list_by_subject(Subject::Math);
        assert_eq!(math.len(), 2);
        assert!(math.iter().all(|m| m.subject == Subject::Math));
        assert!(repo.list_by_subject(Subject::Politics).is_empty());
    }

    #[test]
    fn test_list_recent_orders_and_limits() {
        let (mut repo, _temp) = create_test_repository();

        for i in 0..5 {
            repo.create(draft(&format!("m{}", i), Subject::Math)).unwrap();
        }

        let recent = repo.list_recent(3);
        assert_eq!(recent.len(), 3);
        // Newest-first; entries created within the same instant keep
        // insertion order, which is also newest-first.
        assert_eq!(recent[0].title, "m4");
        for pair in recent.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_list_related_same_subject_excluding_self() {
        let (mut repo, _temp) = create_test_repository();

        let anchor = repo.create(draft("anchor", Subject::Geography)).unwrap();
        for i in 0..4 {
            repo.create(draft(&format!("geo{}", i), Subject::Geography)).unwrap();
        }
        repo.create(draft("other", Subject::English)).unwrap();

        let related = repo.list_related(anchor.id, DEFAULT_RELATED_LIMIT);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|m| m.subject == Subject::Geography));
        assert!(related.iter().all(|m| m.id != anchor.id));

        assert!(repo.list_related(Uuid::new_v4(), 3).is_empty());
    }

    #[test]
    fn test_subject_summary_includes_zeros() {
        let (mut repo, _temp) = create_test_repository();

        repo.create(draft("a", Subject::Math)).unwrap();
        repo.create(draft("b", Subject::Math)).unwrap();

        let summary = repo.subject_summary();
        assert_eq!(summary.len(), Subject::ALL.len());
        assert_eq!(summary[0].subject, Subject::Math);
        assert_eq!(summary[0].count, 2);
        assert!(summary[1..].iter().all(|s| s.count == 0));
    }

    #[test]
    fn test_mutations_write_through_to_store() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();

        let created = {
            let store = JsonFileStore::new(data_dir.clone()).unwrap();
            let mut repo = MistakeRepository::open(Box::new(store)).unwrap();
            repo.create(draft("persisted", Subject::Math)).unwrap()
        };

        // A fresh repository over the same directory sees the mutation.
        let store = JsonFileStore::new(data_dir).unwrap();
        let reopened = MistakeRepository::open(Box::new(store)).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get(created.id).unwrap().title, "persisted");
    }
}
