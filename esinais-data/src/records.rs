use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a record, unique within its collection.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for RecordId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Anything stored in a [`crate::Collection`].
pub trait Record {
    fn id(&self) -> RecordId;
}

// Translation grid

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationItem {
    pub id: RecordId,
    pub word: String,
    /// Category tag shown under the card (FRUTA, ROUPA, ...)
    pub context: String,
    /// Opaque media reference; absent means the placeholder is shown
    pub image: Option<String>,
    pub grammar_class: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
    #[serde(default)]
    pub regionalisms: Vec<String>,
}

impl Record for TranslationItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

// Signs

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignStatus {
    #[serde(rename = "Aprovado")]
    Approved,
    #[serde(rename = "Recusado")]
    Rejected,
    #[serde(rename = "Pendente")]
    Pending,
}

impl SignStatus {
    pub const ALL: [SignStatus; 3] = [Self::Approved, Self::Pending, Self::Rejected];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Approved => "Aprovado",
            Self::Rejected => "Recusado",
            Self::Pending => "Pendente",
        }
    }
}

impl Display for SignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignRecord {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub submitted_by: String,
    /// `dd-mm-YYYY`, matched as text by the filters
    pub submitted_date: String,
    pub status: SignStatus,
}

impl Record for SignRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Row of the dashboard's "recent submissions" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSubmission {
    pub id: RecordId,
    pub sign: String,
    pub submitted_by: String,
    pub submitted_date: String,
    /// None while no interpreter has been assigned
    pub interpreter: Option<String>,
    pub status: SignStatus,
}

impl Record for RecentSubmission {
    fn id(&self) -> RecordId {
        self.id
    }
}

// Users

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Administrador")]
    Admin,
    #[serde(rename = "Intérprete")]
    Interpreter,
    #[serde(rename = "Padrão")]
    Standard,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Admin, Self::Interpreter, Self::Standard];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Interpreter => "Intérprete",
            Self::Standard => "Padrão",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Inativo")]
    Inactive,
    #[serde(rename = "Bloqueado")]
    Blocked,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [Self::Active, Self::Inactive, Self::Blocked];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Inactive => "Inativo",
            Self::Blocked => "Bloqueado",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub registered_date: String,
}

impl Record for UserRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

// Notifications

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Human label such as "Há 2 horas"; never parsed
    pub time_label: String,
    pub read: bool,
}

impl Record for Notification {
    fn id(&self) -> RecordId {
        self.id
    }
}
