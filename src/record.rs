//! Record data structures.
//!
//! The [`Record`] is the core data unit managed by the store. Each record has
//! an opaque UUID identifier, an exact decimal amount, a type and category
//! drawn from fixed enumerations, an optional description, and a creation
//! timestamp that survives updates.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fingerprint;

/// Type of a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    /// Money added to an account
    Deposit,
    /// Money taken from an account
    Withdrawal,
    /// Money moved between accounts
    Transfer,
}

impl RecordType {
    /// Stable wire name, used in serialized output and fingerprints.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Transfer => "TRANSFER",
        }
    }

    /// Human-readable name for display surfaces.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::Transfer => "Transfer",
        }
    }
}

/// Category of a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordCategory {
    Salary,
    Shopping,
    Food,
    Entertainment,
    Utilities,
    Healthcare,
    Transportation,
    Other,
}

impl RecordCategory {
    /// Stable wire name, used in serialized output and fingerprints.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "SALARY",
            Self::Shopping => "SHOPPING",
            Self::Food => "FOOD",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Utilities => "UTILITIES",
            Self::Healthcare => "HEALTHCARE",
            Self::Transportation => "TRANSPORTATION",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable name for display surfaces.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Shopping => "Shopping",
            Self::Food => "Food & Dining",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Transportation => "Transportation",
            Self::Other => "Other",
        }
    }
}

/// Candidate fields for a create or update.
///
/// Shape validation (amount >= 0.01, description <= 500 chars) is a boundary
/// concern and happens before a draft reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Amount in the base currency (exact decimal)
    pub amount: Decimal,
    /// Record type
    #[serde(rename = "type")]
    pub kind: RecordType,
    /// Record category
    pub category: RecordCategory,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A stored financial record.
///
/// # Example
///
/// ```
/// use record_store::{Record, RecordDraft, RecordType, RecordCategory};
/// use rust_decimal::Decimal;
///
/// let record = Record::new(RecordDraft {
///     amount: Decimal::new(10050, 2), // 100.50
///     kind: RecordType::Deposit,
///     category: RecordCategory::Salary,
///     description: Some("March payroll".into()),
/// });
///
/// assert!(!record.id.is_empty());
/// assert_eq!(record.kind, RecordType::Deposit);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique identifier (UUID v4, assigned on create, never reused)
    pub id: String,
    /// Amount in the base currency (exact decimal)
    pub amount: Decimal,
    /// Record type
    #[serde(rename = "type")]
    pub kind: RecordType,
    /// Record category
    pub category: RecordCategory,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation time; update never changes it
    pub timestamp: DateTime<Utc>,
}

impl Record {
    /// Create a new record from a draft with a fresh identifier and the
    /// current timestamp.
    #[must_use]
    pub fn new(draft: RecordDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
            timestamp: Utc::now(),
        }
    }

    /// Rebuild this record from a draft, keeping the identifier and the
    /// original creation timestamp.
    #[must_use]
    pub fn with_draft(&self, draft: RecordDraft) -> Self {
        Self {
            id: self.id.clone(),
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
            timestamp: self.timestamp,
        }
    }

    /// Content fingerprint for duplicate detection.
    ///
    /// Identity fields (id, timestamp) do not participate; two records with
    /// the same observable content produce the same fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        fingerprint::fingerprint(
            &self.amount,
            self.kind,
            self.category,
            self.description.as_deref(),
        )
    }
}
