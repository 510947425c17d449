//! Duplicate-detection fingerprints.
//!
//! A fingerprint is a deterministic key over a record's business fields:
//!
//! ```text
//! normalize(amount) _ TYPE _ CATEGORY _ normalize(description)
//! ```
//!
//! Normalization makes duplicate detection content-based rather than
//! byte-based: `100.0` and `100.00` fingerprint identically, as do
//! `" Lunch "` and `"lunch"`. A missing description and one that trims to
//! empty are treated the same.

use rust_decimal::Decimal;

use crate::record::{RecordCategory, RecordType};

/// Field separator. Enum segments never contain it, and it keeps collisions
/// between adjacent fields (`"1" + "2"` vs `"12" + ""`) impossible.
const SEPARATOR: char = '_';

/// Compute the content fingerprint for the given business fields.
#[must_use]
pub fn fingerprint(
    amount: &Decimal,
    kind: RecordType,
    category: RecordCategory,
    description: Option<&str>,
) -> String {
    format!(
        "{}{sep}{}{sep}{}{sep}{}",
        normalize_amount(amount),
        kind.as_str(),
        category.as_str(),
        normalize_description(description),
        sep = SEPARATOR,
    )
}

/// Canonical plain-decimal text with trailing fractional zeros stripped,
/// so `100.0` and `100.00` produce the same segment.
#[must_use]
pub fn normalize_amount(amount: &Decimal) -> String {
    amount.normalize().to_string()
}

/// Trimmed, lowercased description; absent becomes the empty string.
#[must_use]
pub fn normalize_description(description: Option<&str>) -> String {
    description
        .map(|d| d.trim().to_lowercase())
        .unwrap_or_default()
}
