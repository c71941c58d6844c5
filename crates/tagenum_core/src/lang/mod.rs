//! Shared vocabulary for the derive macro and the runtime.
//!
//! The derive classifies field types by spelling and reads the field attribute by name. Both tables live here so the
//! generated code and the runtime error messages use the same words.
//!
//! ## Examples
//! ```rust
//! use tagenum_core::lang::{self, types::{self, TypeClass}};
//!
//! assert_eq!(lang::ATTRIBUTE, "tagenum");
//! assert_eq!(types::classify("String"), TypeClass::Str);
//! assert_eq!(types::classify("Arc"), TypeClass::Pointer);
//! ```

pub mod types;

/// Name of the field attribute: `#[tagenum(value = "200")]`, `#[tagenum(skip)]`.
pub const ATTRIBUTE: &str = "tagenum";

/// Attribute key carrying the attached literal.
pub const VALUE_KEY: &str = "value";

/// Attribute key marking a field as not assignable.
pub const SKIP_KEY: &str = "skip";
