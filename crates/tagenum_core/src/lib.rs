//! Provide the width policy and shared vocabulary behind `tagenum`.
//!
//! This crate is small and dependency-free. The runtime uses it to range-check integer values and to name error
//! categories; the derive macro uses it to classify field types and to read the field attribute.
//!
//! ## Notes
//!
//! - Pure helpers only: **no IO**, no global state.

pub mod errors;
pub mod lang;
pub mod numerics;

use core::fmt;

pub use numerics::{IntRange, IntWidth};

/// The kind of a leaf value: a string, or an integer of a given width and signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Str,
    Int(IntWidth),
    Uint(IntWidth),
}

impl LeafKind {
    /// Rust spelling of the leaf type (`"String"`, `"i32"`, `"u8"`, ...).
    pub const fn type_name(self) -> &'static str {
        match self {
            LeafKind::Str => "String",
            LeafKind::Int(w) => w.signed_name(),
            LeafKind::Uint(w) => w.unsigned_name(),
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
