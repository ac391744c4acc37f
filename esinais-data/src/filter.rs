//! Criteria-based filtering over record slices.
//!
//! Filtering is stable: the result is always a subsequence of the input in
//! its original order. Every active predicate must hold; an empty query or
//! an "all" selector does not constrain anything.

use crate::records::{RecentSubmission, SignRecord, SignStatus, UserRecord, UserRole, UserStatus};
use serde::{Deserialize, Serialize};

pub trait Criteria<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Visible subset of `records` under `criteria`, recomputed on each call.
pub fn filter<'a, T, C>(records: &'a [T], criteria: &C) -> Vec<&'a T>
where
    C: Criteria<T> + ?Sized,
{
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Unanchored, case-insensitive substring test. An empty needle matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Status tabs above the signs table
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTab {
    #[default]
    All,
    Approved,
    Pending,
    Rejected,
}

impl StatusTab {
    pub const ALL: [StatusTab; 4] = [Self::All, Self::Approved, Self::Pending, Self::Rejected];

    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Approved,
            Self::Approved => Self::Pending,
            Self::Pending => Self::Rejected,
            Self::Rejected => Self::All,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::All => Self::Rejected,
            Self::Approved => Self::All,
            Self::Pending => Self::Approved,
            Self::Rejected => Self::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Approved => "Aprovados",
            Self::Pending => "Pendentes",
            Self::Rejected => "Recusados",
        }
    }

    pub fn status(&self) -> Option<SignStatus> {
        match self {
            Self::All => None,
            Self::Approved => Some(SignStatus::Approved),
            Self::Pending => Some(SignStatus::Pending),
            Self::Rejected => Some(SignStatus::Rejected),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SignCriteria {
    pub tab: StatusTab,
    /// Matched against name and submitter
    pub query: String,
    /// Exact category; None means every category
    pub category: Option<String>,
}

impl SignCriteria {
    pub fn is_empty(&self) -> bool {
        self.tab == StatusTab::All && self.query.is_empty() && self.category.is_none()
    }
}

impl Criteria<SignRecord> for SignCriteria {
    fn matches(&self, sign: &SignRecord) -> bool {
        if let Some(status) = self.tab.status()
            && sign.status != status
        {
            return false;
        }

        if !self.query.is_empty()
            && !contains_ignore_case(&sign.name, &self.query)
            && !contains_ignore_case(&sign.submitted_by, &self.query)
        {
            return false;
        }

        match &self.category {
            Some(category) => sign.category == *category,
            None => true,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct UserCriteria {
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    /// Matched against name and email
    pub query: String,
    /// Substring of the registration date (`dd-mm-YYYY`)
    pub registered: String,
}

impl UserCriteria {
    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.status.is_none()
            && self.query.is_empty()
            && self.registered.is_empty()
    }
}

impl Criteria<UserRecord> for UserCriteria {
    fn matches(&self, user: &UserRecord) -> bool {
        if self.role.is_some_and(|role| user.role != role) {
            return false;
        }

        if self.status.is_some_and(|status| user.status != status) {
            return false;
        }

        if !self.query.is_empty()
            && !contains_ignore_case(&user.name, &self.query)
            && !contains_ignore_case(&user.email, &self.query)
        {
            return false;
        }

        contains_ignore_case(&user.registered_date, &self.registered)
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct OverviewCriteria {
    pub status: Option<SignStatus>,
    /// Matched against sign name and submitter
    pub query: String,
}

impl OverviewCriteria {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.query.is_empty()
    }
}

impl Criteria<RecentSubmission> for OverviewCriteria {
    fn matches(&self, row: &RecentSubmission) -> bool {
        if self.status.is_some_and(|status| row.status != status) {
            return false;
        }

        self.query.is_empty()
            || contains_ignore_case(&row.sign, &self.query)
            || contains_ignore_case(&row.submitted_by, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordId;
    use crate::store::RecordStore;

    fn store() -> RecordStore {
        RecordStore::seeded().unwrap()
    }

    fn ids<T: crate::records::Record>(records: &[&T]) -> Vec<u32> {
        records.iter().map(|r| r.id().inner()).collect()
    }

    /// Result must be an order-preserving subsequence of the input
    fn assert_subsequence<T: PartialEq>(input: &[T], output: &[&T]) {
        let mut cursor = input.iter();
        for item in output {
            assert!(
                cursor.any(|candidate| candidate == *item),
                "filter output is not an ordered subsequence"
            );
        }
    }

    #[test]
    fn test_empty_criteria_returns_everything() {
        let store = store();

        let signs = filter(store.signs.as_slice(), &SignCriteria::default());
        assert_eq!(signs.len(), store.signs.len());
        assert_eq!(ids(&signs), (1..=10).collect::<Vec<_>>());

        let users = filter(store.users.as_slice(), &UserCriteria::default());
        assert_eq!(users.len(), store.users.len());

        let recent = filter(
            store.recent_submissions.as_slice(),
            &OverviewCriteria::default(),
        );
        assert_eq!(recent.len(), store.recent_submissions.len());
    }

    #[test]
    fn test_pending_tab_keeps_seed_order() {
        let store = store();
        let criteria = SignCriteria {
            tab: StatusTab::Pending,
            ..Default::default()
        };

        let pending = filter(store.signs.as_slice(), &criteria);
        assert_eq!(ids(&pending), vec![3, 6, 9]);
    }

    #[test]
    fn test_sign_query_matches_name_or_submitter() {
        let store = store();

        let by_name = SignCriteria {
            query: "WIFI".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter(store.signs.as_slice(), &by_name)), vec![9]);

        let by_submitter = SignCriteria {
            query: "silva".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter(store.signs.as_slice(), &by_submitter)),
            vec![1, 2]
        );
    }

    #[test]
    fn test_sign_predicates_are_anded() {
        let store = store();
        let criteria = SignCriteria {
            tab: StatusTab::Approved,
            query: "silva".to_string(),
            category: Some("Tecnologia".to_string()),
        };

        let result = filter(store.signs.as_slice(), &criteria);
        assert_eq!(ids(&result), vec![1]);
        assert!(result.iter().all(|s| criteria.matches(s)));
        assert_subsequence(store.signs.as_slice(), &result);
    }

    #[test]
    fn test_category_without_matches_is_empty() {
        let store = store();
        let criteria = SignCriteria {
            category: Some("Saúde".to_string()),
            ..Default::default()
        };

        assert!(filter(store.signs.as_slice(), &criteria).is_empty());
    }

    #[test]
    fn test_user_search_is_case_insensitive() {
        let store = store();
        let criteria = UserCriteria {
            query: "maria".to_string(),
            ..Default::default()
        };

        let result = filter(store.users.as_slice(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Maria da Silva");
    }

    #[test]
    fn test_user_search_matches_email() {
        let store = store();
        let criteria = UserCriteria {
            query: "@ESINAIS.com".to_string(),
            ..Default::default()
        };

        assert_eq!(
            ids(&filter(store.users.as_slice(), &criteria)),
            vec![1, 3, 5]
        );
    }

    #[test]
    fn test_user_role_status_and_date() {
        let store = store();

        let interpreters = UserCriteria {
            role: Some(UserRole::Interpreter),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter(store.users.as_slice(), &interpreters)),
            vec![3, 5, 10]
        );

        let inactive_standard = UserCriteria {
            role: Some(UserRole::Standard),
            status: Some(UserStatus::Inactive),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter(store.users.as_slice(), &inactive_standard)),
            vec![4, 9]
        );

        let april = UserCriteria {
            registered: "-04-".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter(store.users.as_slice(), &april)),
            vec![6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn test_overview_status_and_query() {
        let store = store();
        let criteria = OverviewCriteria {
            status: Some(SignStatus::Approved),
            query: "computador".to_string(),
        };

        let result = filter(store.recent_submissions.as_slice(), &criteria);
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_filter_after_delete() {
        let mut store = store();
        store.delete_record(crate::store::CollectionId::Signs, RecordId::new(6));

        let criteria = SignCriteria {
            tab: StatusTab::Pending,
            ..Default::default()
        };
        assert_eq!(ids(&filter(store.signs.as_slice(), &criteria)), vec![3, 9]);
    }

    #[test]
    fn test_status_tab_cycle() {
        let mut tab = StatusTab::All;
        for _ in 0..StatusTab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, StatusTab::All);
        assert_eq!(StatusTab::All.previous(), StatusTab::Rejected);
        assert_eq!(StatusTab::Pending.label(), "Pendentes");
    }

    #[test]
    fn test_contains_ignore_case_accents() {
        assert!(contains_ignore_case("José Menezes", "JOSÉ"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Teclado", "mouse"));
    }
}
