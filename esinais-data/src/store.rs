use crate::drafts::Draft;
use crate::error::SeedError;
use crate::records::{
    Notification, Record, RecordId, RecentSubmission, SignRecord, TranslationItem, UserRecord,
};
use crate::seed::{self, Seed};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Ordered records plus the id counter used for appends.
///
/// The counter starts one past the largest seeded id and only ever grows,
/// so an id freed by a delete is never handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(Record::id)
            .max()
            .map(RecordId::next)
            .unwrap_or(RecordId::new(1));

        Self { records, next_id }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Remove the record with `id`, keeping the order of the others.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(position))
    }

    /// Append a record built from the next free id.
    pub fn insert_with(&mut self, build: impl FnOnce(RecordId) -> T) -> RecordId {
        let id = self.next_id;
        self.next_id = id.next();
        self.records.push(build(id));
        id
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Collections that support deletion from the dashboard
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionId {
    Signs,
    RecentSubmissions,
    Users,
}

impl Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signs => f.write_str("signs"),
            Self::RecentSubmissions => f.write_str("recent_submissions"),
            Self::Users => f.write_str("users"),
        }
    }
}

/// All in-memory collections backing the screens
#[derive(Debug, Clone)]
pub struct RecordStore {
    pub translations: Collection<TranslationItem>,
    pub signs: Collection<SignRecord>,
    pub recent_submissions: Collection<RecentSubmission>,
    pub users: Collection<UserRecord>,
    pub notifications: Collection<Notification>,
}

impl RecordStore {
    /// Store populated from the bundled seed document
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::from_seed(seed::load()?))
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            translations: Collection::new(seed.translations),
            signs: Collection::new(seed.signs),
            recent_submissions: Collection::new(seed.recent_submissions),
            users: Collection::new(seed.users),
            notifications: Collection::new(seed.notifications),
        }
    }

    pub fn contains(&self, collection: CollectionId, id: RecordId) -> bool {
        match collection {
            CollectionId::Signs => self.signs.contains(id),
            CollectionId::RecentSubmissions => self.recent_submissions.contains(id),
            CollectionId::Users => self.users.contains(id),
        }
    }

    /// Delete a record. Returns whether anything was removed; a missing id
    /// is not an error.
    pub fn delete_record(&mut self, collection: CollectionId, id: RecordId) -> bool {
        let removed = match collection {
            CollectionId::Signs => self.signs.remove(id).is_some(),
            CollectionId::RecentSubmissions => self.recent_submissions.remove(id).is_some(),
            CollectionId::Users => self.users.remove(id).is_some(),
        };

        if removed {
            tracing::info!("Deleted record {} from {}", id, collection);
        } else {
            tracing::warn!("Ignoring delete of missing record {} in {}", id, collection);
        }

        removed
    }

    /// Append a record at the end of its collection and return the new id.
    pub fn append_record(&mut self, draft: impl Into<Draft>) -> RecordId {
        match draft.into() {
            Draft::Sign(sign) => {
                let id = self.signs.insert_with(|id| sign.into_record(id));
                tracing::info!("Appended sign {}", id);
                id
            }
            Draft::User(user) => {
                let id = self.users.insert_with(|id| user.into_record(id));
                tracing::info!("Appended user {}", id);
                id
            }
        }
    }

    pub fn mark_notification_read(&mut self, id: RecordId) -> bool {
        match self.notifications.get_mut(id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => {
                tracing::warn!("Ignoring read mark for missing notification {}", id);
                false
            }
        }
    }

    /// Mark every notification read. Returns how many were unread before.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.records.iter_mut() {
            if !notification.read {
                notification.read = true;
                changed += 1;
            }
        }
        changed
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::{NewSign, NewUser};
    use crate::records::{SignStatus, UserRole, UserStatus};

    fn store() -> RecordStore {
        RecordStore::seeded().expect("bundled seed should parse")
    }

    #[test]
    fn test_collection_next_id_follows_max() {
        let collection = Collection::new(store().signs.as_slice().to_vec());
        assert_eq!(collection.next_id, RecordId::new(11));

        let empty: Collection<SignRecord> = Collection::new(Vec::new());
        assert_eq!(empty.next_id, RecordId::new(1));
    }

    #[test]
    fn test_delete_record_removes_exactly_one() {
        let mut store = store();
        let before = store.signs.len();

        assert!(store.delete_record(CollectionId::Signs, RecordId::new(5)));
        assert_eq!(store.signs.len(), before - 1);
        assert!(store.signs.get(RecordId::new(5)).is_none());

        // Second delete is a no-op
        assert!(!store.delete_record(CollectionId::Signs, RecordId::new(5)));
        assert_eq!(store.signs.len(), before - 1);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = store();
        store.delete_record(CollectionId::Users, RecordId::new(2));

        let ids: Vec<u32> = store.users.iter().map(|u| u.id.inner()).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_delete_only_touches_named_collection() {
        let mut store = store();
        let users = store.users.len();
        let recent = store.recent_submissions.len();

        store.delete_record(CollectionId::Signs, RecordId::new(1));

        assert_eq!(store.users.len(), users);
        assert_eq!(store.recent_submissions.len(), recent);
    }

    #[test]
    fn test_append_after_delete_does_not_reuse_id() {
        let mut store = store();
        store.delete_record(CollectionId::Signs, RecordId::new(10));

        let id = store.append_record(
            NewSign::new("Tablet")
                .category("Tecnologia")
                .submitted_by("João Admin")
                .submitted_date("01-07-2025"),
        );

        assert_eq!(id, RecordId::new(11));
        let sign = store.signs.as_slice().last().unwrap();
        assert_eq!(sign.id, id);
        assert_eq!(sign.name, "Tablet");
        assert_eq!(sign.status, SignStatus::Pending);
    }

    #[test]
    fn test_append_user_is_active() {
        let mut store = store();
        let id = store.append_record(
            NewUser::new("Bia Rocha", "bia@email.com", UserRole::Interpreter)
                .registered_date("02-07-2025"),
        );

        let user = store.users.get(id).unwrap();
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.role, UserRole::Interpreter);
        assert_eq!(store.users.len(), 11);
    }

    #[test]
    fn test_mark_notification_read() {
        let mut store = store();
        assert_eq!(store.unread_notifications(), 2);

        assert!(store.mark_notification_read(RecordId::new(1)));
        assert_eq!(store.unread_notifications(), 1);

        // Already read and missing ids are both harmless
        assert!(store.mark_notification_read(RecordId::new(1)));
        assert!(!store.mark_notification_read(RecordId::new(99)));
        assert_eq!(store.unread_notifications(), 1);
    }

    #[test]
    fn test_mark_all_notifications_read_is_idempotent() {
        let mut store = store();

        assert_eq!(store.mark_all_notifications_read(), 2);
        let after_first = store.notifications.as_slice().to_vec();

        assert_eq!(store.mark_all_notifications_read(), 0);
        assert_eq!(store.notifications.as_slice(), after_first.as_slice());
        assert_eq!(store.unread_notifications(), 0);
    }
}
