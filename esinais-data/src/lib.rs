//! Records, in-memory collections and filtering for e-Sinais.

pub mod drafts;
mod error;
pub mod filter;
mod macros;
pub mod records;
pub mod seed;
pub mod store;

pub use crate::drafts::{Draft, NewSign, NewUser, require, validate_email};
pub use crate::error::{DraftError, SeedError};
pub use crate::filter::{
    Criteria, OverviewCriteria, SignCriteria, StatusTab, UserCriteria, filter,
};
pub use crate::records::{
    Notification, NotificationKind, Record, RecordId, RecentSubmission, SignRecord, SignStatus,
    TranslationItem, UserRecord, UserRole, UserStatus,
};
pub use crate::store::{Collection, CollectionId, RecordStore};
