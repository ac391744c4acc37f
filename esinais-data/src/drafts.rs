//! Validated input for records created at runtime.
//!
//! Drafts carry everything except the id, which the owning collection
//! assigns on insert.

use crate::error::DraftError;
use crate::macros::string_setters;
use crate::records::{RecordId, SignRecord, SignStatus, UserRecord, UserRole, UserStatus};

/// Trimmed `value`, or an error naming `field` when it is blank.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed)
}

/// Accepts an address with an `@` followed somewhere by a `.`
pub fn validate_email(email: &str) -> Result<&str, DraftError> {
    let email = require("E-mail", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(DraftError::InvalidEmail(email.to_string())),
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct NewSign {
    name: String,
    category: String,
    submitted_by: String,
    submitted_date: String,
}

impl NewSign {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    string_setters!(category, submitted_by, submitted_date);

    /// New submissions always start in review.
    pub(crate) fn into_record(self, id: RecordId) -> SignRecord {
        SignRecord {
            id,
            name: self.name,
            category: self.category,
            submitted_by: self.submitted_by,
            submitted_date: self.submitted_date,
            status: SignStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    name: String,
    email: String,
    role: UserRole,
    registered_date: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            registered_date: String::new(),
        }
    }

    string_setters!(registered_date);

    pub(crate) fn into_record(self, id: RecordId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: UserStatus::Active,
            registered_date: self.registered_date,
        }
    }
}

/// A record to append, tagged with its destination collection
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Sign(NewSign),
    User(NewUser),
}

impl From<NewSign> for Draft {
    fn from(value: NewSign) -> Self {
        Draft::Sign(value)
    }
}

impl From<NewUser> for Draft {
    fn from(value: NewUser) -> Self {
        Draft::User(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims_and_rejects_blank() {
        assert_eq!(require("Nome", "  Tablet "), Ok("Tablet"));
        assert_eq!(
            require("Nome", "   "),
            Err(DraftError::MissingField("Nome"))
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("bia@email.com").is_ok());
        assert!(validate_email("a@b.c").is_ok());

        assert_eq!(
            validate_email(""),
            Err(DraftError::MissingField("E-mail"))
        );
        assert!(matches!(
            validate_email("bia.email.com"),
            Err(DraftError::InvalidEmail(_))
        ));
        assert!(matches!(
            validate_email("bia@localhost"),
            Err(DraftError::InvalidEmail(_))
        ));
        assert!(matches!(
            validate_email("@email.com"),
            Err(DraftError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_drafts_convert_into_tagged_draft() {
        let draft: Draft = NewSign::new("Tablet").into();
        assert!(matches!(draft, Draft::Sign(_)));

        let draft: Draft = NewUser::new("Bia", "bia@email.com", UserRole::Standard).into();
        assert!(matches!(draft, Draft::User(_)));
    }
}
