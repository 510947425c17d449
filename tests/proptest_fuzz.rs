//! Property-based tests for fingerprinting and pagination math.
//!
//! Uses proptest to generate arbitrary amounts, descriptions, and page
//! shapes and verify the normalization and envelope invariants hold for
//! all of them, not just the hand-picked cases.
//!
//! Run with: `cargo test --test proptest_fuzz`

use proptest::prelude::*;
use rust_decimal::Decimal;

use record_store::{fingerprint, Page, Record, RecordCategory, RecordDraft, RecordType};

// =============================================================================
// Strategies
// =============================================================================

fn record_type_strategy() -> impl Strategy<Value = RecordType> {
    prop_oneof![
        Just(RecordType::Deposit),
        Just(RecordType::Withdrawal),
        Just(RecordType::Transfer),
    ]
}

fn record_category_strategy() -> impl Strategy<Value = RecordCategory> {
    prop_oneof![
        Just(RecordCategory::Salary),
        Just(RecordCategory::Shopping),
        Just(RecordCategory::Food),
        Just(RecordCategory::Entertainment),
        Just(RecordCategory::Utilities),
        Just(RecordCategory::Healthcare),
        Just(RecordCategory::Transportation),
        Just(RecordCategory::Other),
    ]
}

/// Positive amounts with up to 6 fractional digits
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000, 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn description_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ a-zA-Z0-9/,.-]{0,60}")
}

// =============================================================================
// Fingerprint Properties
// =============================================================================

proptest! {
    /// The same inputs always produce the same fingerprint
    #[test]
    fn fingerprint_is_deterministic(
        amount in amount_strategy(),
        kind in record_type_strategy(),
        category in record_category_strategy(),
        description in description_strategy(),
    ) {
        let a = fingerprint::fingerprint(&amount, kind, category, description.as_deref());
        let b = fingerprint::fingerprint(&amount, kind, category, description.as_deref());
        prop_assert_eq!(a, b);
    }

    /// Rescaling an amount (appending trailing fractional zeros) never
    /// changes its fingerprint
    #[test]
    fn fingerprint_ignores_trailing_zeros(
        amount in amount_strategy(),
        kind in record_type_strategy(),
        category in record_category_strategy(),
        extra_scale in 1u32..=4,
    ) {
        let mut rescaled = amount;
        rescaled.rescale(amount.scale() + extra_scale);

        let a = fingerprint::fingerprint(&amount, kind, category, None);
        let b = fingerprint::fingerprint(&rescaled, kind, category, None);
        prop_assert_eq!(a, b);
    }

    /// Surrounding whitespace and letter case in the description never
    /// change the fingerprint
    #[test]
    fn fingerprint_ignores_description_noise(
        amount in amount_strategy(),
        kind in record_type_strategy(),
        category in record_category_strategy(),
        description in "[a-z0-9 ]{1,40}",
        left_pad in " {0,5}",
        right_pad in " {0,5}",
    ) {
        let noisy = format!("{left_pad}{}{right_pad}", description.to_uppercase());

        let a = fingerprint::fingerprint(&amount, kind, category, Some(&description));
        let b = fingerprint::fingerprint(&amount, kind, category, Some(&noisy));
        prop_assert_eq!(a, b);
    }

    /// Changing any business field changes the fingerprint segment layout:
    /// the fingerprint always has exactly four separator-delimited segments
    /// when the description carries no underscore
    #[test]
    fn fingerprint_has_four_segments(
        amount in amount_strategy(),
        kind in record_type_strategy(),
        category in record_category_strategy(),
        description in prop::option::of("[a-z ]{0,30}"),
    ) {
        let fp = fingerprint::fingerprint(&amount, kind, category, description.as_deref());
        prop_assert_eq!(fp.split('_').count(), 4);
    }
}

// =============================================================================
// Pagination Properties
// =============================================================================

proptest! {
    /// The envelope metadata is internally consistent for any shape
    #[test]
    fn page_envelope_invariants(
        page in 0usize..1000,
        size in 1usize..200,
        total in 0u64..100_000,
    ) {
        let envelope: Page<u32> = Page::of(vec![], page, size, total);

        // ceil division: enough pages to hold the total, never one extra
        prop_assert!(envelope.total_pages as u64 * size as u64 >= total);
        if envelope.total_pages > 0 {
            prop_assert!(((envelope.total_pages as u64 - 1) * size as u64) < total);
        }

        prop_assert_eq!(envelope.first, page == 0);
        prop_assert_eq!(
            envelope.last,
            envelope.total_pages == 0 || page + 1 >= envelope.total_pages
        );
    }
}

// =============================================================================
// Serde Round Trips
// =============================================================================

proptest! {
    /// A record survives JSON serialization for any field combination
    #[test]
    fn record_serde_round_trip(
        amount in amount_strategy(),
        kind in record_type_strategy(),
        category in record_category_strategy(),
        description in description_strategy(),
    ) {
        let record = Record::new(RecordDraft {
            amount,
            kind,
            category,
            description,
        });

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, record);
    }
}
