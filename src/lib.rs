#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Populate struct fields with synthetic enum-like values.
//!
//! `tagenum` turns a plain struct into a set of named constants:
//!
//! - `String` fields receive their own field name.
//! - Integer fields receive their zero-based position, or the literal attached with `#[tagenum(value = "...")]`.
//! - Nested struct fields are initialized recursively with the same rules.
//!
//! Three helpers inspect a populated instance's direct fields: [`contains`], [`keys`] and [`values`].
//!
//! ## Examples
//! ```rust
//! use tagenum::EnumShape;
//!
//! #[derive(EnumShape)]
//! #[allow(non_snake_case)]
//! struct Code {
//!     #[tagenum(value = "200")]
//!     StatusOK: i64,
//!     #[tagenum(value = "404")]
//!     StatusNotFound: i64,
//! }
//!
//! #[derive(EnumShape)]
//! #[allow(non_snake_case)]
//! struct Kind {
//!     StatusOK: String,
//!     StatusNotFound: String,
//! }
//!
//! #[derive(EnumShape)]
//! #[allow(non_snake_case)]
//! struct HttpStatus {
//!     Code: Code,
//!     Type: Kind,
//! }
//!
//! let status: HttpStatus = tagenum::new().unwrap();
//! assert_eq!(status.Code.StatusNotFound, 404);
//! assert_eq!(status.Type.StatusOK, "StatusOK");
//! assert_eq!(tagenum::keys(&status), ["Code", "Type"]);
//! ```
//!
//! ## Panic Policy
//!
//! Construction never panics: every failure is returned as an [`EnumError`] naming the field responsible. Query
//! helpers never fail; inputs that are not records yield "not found" or an empty sequence.
//!
//! ## Logging
//!
//! [`construct`] emits `tracing` events (a span per construction, `trace!` per assigned field, `debug!` for skipped
//! fields and aborted constructions). The crate never installs a subscriber.

// Lets the derive's `::tagenum::` paths resolve inside this crate's own tests.
extern crate self as tagenum;

pub mod errors;
pub mod init;
pub mod query;
pub mod reflect;
pub mod shape;
pub mod value;

pub use errors::EnumError;
pub use init::{construct, new};
pub use query::{contains, keys, values, values_of};
pub use reflect::{EnumShape, Inspect};
pub use shape::{FieldDescriptor, FieldKind, RecordShape};
pub use value::{Leaf, Record, Value};

pub use tagenum_core::errors::ErrorKind;
pub use tagenum_core::{IntRange, IntWidth, LeafKind};

/// `#[derive(EnumShape)]`
pub use tagenum_derive::EnumShape;
