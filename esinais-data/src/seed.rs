use crate::error::SeedError;
use crate::records::{
    Notification, Record, RecentSubmission, SignRecord, TranslationItem, UserRecord,
};
use serde::Deserialize;
use std::collections::HashSet;

const SEED_JSON: &str = include_str!("../data/seed.json");

/// Initial contents of every collection
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub translations: Vec<TranslationItem>,
    pub signs: Vec<SignRecord>,
    pub recent_submissions: Vec<RecentSubmission>,
    pub users: Vec<UserRecord>,
    pub notifications: Vec<Notification>,
}

/// Parse the bundled seed document.
pub fn load() -> Result<Seed, SeedError> {
    parse(SEED_JSON)
}

/// Parse a seed document, rejecting collections with repeated ids.
pub fn parse(json: &str) -> Result<Seed, SeedError> {
    let seed: Seed = serde_json::from_str(json)?;

    ensure_unique("translations", &seed.translations)?;
    ensure_unique("signs", &seed.signs)?;
    ensure_unique("recent_submissions", &seed.recent_submissions)?;
    ensure_unique("users", &seed.users)?;
    ensure_unique("notifications", &seed.notifications)?;

    Ok(seed)
}

fn ensure_unique<T: Record>(collection: &'static str, records: &[T]) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(SeedError::DuplicateId {
                collection,
                id: record.id(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{RecordId, SignStatus};

    #[test]
    fn test_bundled_seed_parses() {
        let seed = load().unwrap();
        assert_eq!(seed.translations.len(), 10);
        assert_eq!(seed.signs.len(), 10);
        assert_eq!(seed.recent_submissions.len(), 8);
        assert_eq!(seed.users.len(), 10);
        assert_eq!(seed.notifications.len(), 4);
    }

    #[test]
    fn test_seed_sign_statuses() {
        let seed = load().unwrap();
        let pending = seed
            .signs
            .iter()
            .filter(|s| s.status == SignStatus::Pending)
            .count();
        assert_eq!(pending, 3);
    }

    #[test]
    fn test_optional_translation_fields() {
        let seed = load().unwrap();
        let detailed = &seed.translations[0];
        assert!(detailed.definition.is_some());
        assert_eq!(detailed.regionalisms.len(), 3);

        let bare = &seed.translations[2];
        assert!(bare.definition.is_none());
        assert!(bare.regionalisms.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "translations": [],
            "signs": [
                {"id": 1, "name": "A", "category": "Tecnologia", "submitted_by": "X", "submitted_date": "01-01-2025", "status": "Aprovado"},
                {"id": 1, "name": "B", "category": "Tecnologia", "submitted_by": "Y", "submitted_date": "01-01-2025", "status": "Pendente"}
            ],
            "recent_submissions": [],
            "users": [],
            "notifications": []
        }"#;

        match parse(json) {
            Err(SeedError::DuplicateId { collection, id }) => {
                assert_eq!(collection, "signs");
                assert_eq!(id, RecordId::new(1));
            }
            other => panic!("Expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_seed_is_an_error() {
        assert!(matches!(parse("{"), Err(SeedError::Json(_))));
    }
}
