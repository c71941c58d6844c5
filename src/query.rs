//! Query helpers over populated instances.
//!
//! All three inspect the *direct* fields of an instance only; nested records are never unpacked. None of them fail:
//! inputs that are not records give "not found" or an empty sequence.

use tagenum_core::LeafKind;

use crate::reflect::Inspect;
use crate::value::{Leaf, Value};

/// Report whether any direct field of `instance` equals `candidate`.
///
/// Strings compare by content, integers by value and exact kind, nested records by whole value (see
/// [`Value::matches`]). A `u16` candidate never matches an `i64` field.
///
/// ## Examples
/// ```rust
/// use tagenum::EnumShape;
///
/// #[derive(EnumShape)]
/// #[allow(non_snake_case)]
/// struct HttpStatus {
///     StatusOK: String,
///     StatusNotFound: String,
/// }
///
/// let status: HttpStatus = tagenum::new().unwrap();
/// assert!(tagenum::contains(&status, "StatusOK"));
/// assert!(!tagenum::contains(&status, "Unknown"));
/// ```
pub fn contains(instance: &impl Inspect, candidate: impl Into<Value>) -> bool {
    let candidate = candidate.into();
    instance
        .as_record()
        .is_some_and(|record| record.iter().any(|(_, value)| value.matches(&candidate)))
}

/// Names of the direct fields of `instance`, in declaration order.
///
/// Non-assignable fields are listed too, even though they hold no value.
pub fn keys(instance: &impl Inspect) -> Vec<String> {
    instance
        .as_record()
        .map(|record| record.keys().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Direct field values whose kind is exactly `kind`, in declaration order.
///
/// Nested record fields are always skipped.
pub fn values_of(instance: &impl Inspect, kind: LeafKind) -> Vec<Value> {
    instance
        .as_record()
        .map(|record| {
            record
                .iter()
                .filter(|(_, value)| value.leaf_kind() == Some(kind))
                .map(|(_, value)| value.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// Direct field values of Rust type `L`, in declaration order.
///
/// ## Examples
/// ```rust
/// use tagenum::EnumShape;
///
/// #[derive(EnumShape)]
/// struct Mixed {
///     a: String,
///     b: i64,
///     c: String,
/// }
///
/// let mixed: Mixed = tagenum::new().unwrap();
/// assert_eq!(tagenum::values::<String>(&mixed), ["a", "c"]);
/// assert_eq!(tagenum::values::<i64>(&mixed), [1]);
/// assert!(tagenum::values::<u8>(&mixed).is_empty());
/// ```
pub fn values<L: Leaf>(instance: &impl Inspect) -> Vec<L> {
    values_of(instance, L::KIND).iter().filter_map(L::from_value).collect()
}
