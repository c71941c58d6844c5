//! Record shape descriptions.
//!
//! A [`RecordShape`] is the schema the initializer walks: an ordered list of [`FieldDescriptor`]s, each with a name, a
//! [`FieldKind`], and an optional attached literal. Shapes are usually produced by `#[derive(EnumShape)]`, but they can
//! be built by hand for types that only exist at runtime.
//!
//! ## Examples
//! ```rust
//! use tagenum::{FieldDescriptor, FieldKind, IntWidth, RecordShape};
//!
//! let shape = RecordShape::new("HttpCode")
//!     .field(FieldDescriptor::new("StatusOK", FieldKind::Int(IntWidth::W64)).with_literal("200"))
//!     .field(FieldDescriptor::new("StatusNotFound", FieldKind::Int(IntWidth::W64)).with_literal("404"));
//! assert_eq!(shape.fields().len(), 2);
//! ```

use core::fmt;

use tagenum_core::{IntWidth, LeafKind};

/// Declared kind of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int(IntWidth),
    Uint(IntWidth),
    /// A nested record, initialized recursively.
    Record(RecordShape),
    /// A reference-like type, carried by spelling. Rejected at construction.
    Pointer(String),
    /// Any other type, carried by spelling. Rejected at construction.
    Unsupported(String),
}

impl FieldKind {
    /// The leaf kind of this field, or `None` for records and rejected kinds.
    pub fn leaf_kind(&self) -> Option<LeafKind> {
        match self {
            FieldKind::Str => Some(LeafKind::Str),
            FieldKind::Int(w) => Some(LeafKind::Int(*w)),
            FieldKind::Uint(w) => Some(LeafKind::Uint(*w)),
            FieldKind::Record(_) | FieldKind::Pointer(_) | FieldKind::Unsupported(_) => None,
        }
    }
}

impl From<LeafKind> for FieldKind {
    fn from(kind: LeafKind) -> Self {
        match kind {
            LeafKind::Str => FieldKind::Str,
            LeafKind::Int(w) => FieldKind::Int(w),
            LeafKind::Uint(w) => FieldKind::Uint(w),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Str => f.write_str("String"),
            FieldKind::Int(w) => f.write_str(w.signed_name()),
            FieldKind::Uint(w) => f.write_str(w.unsigned_name()),
            FieldKind::Record(shape) => f.write_str(shape.name()),
            FieldKind::Pointer(ty) | FieldKind::Unsupported(ty) => f.write_str(ty),
        }
    }
}

/// One declared field of a record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    literal: Option<String>,
    assignable: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            literal: None,
            assignable: true,
        }
    }

    /// Attach a literal that replaces the default value (field name for strings, index for integers).
    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    /// Mark the field as not assignable; the initializer leaves it untouched.
    pub fn skipped(mut self) -> Self {
        self.assignable = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// The attached literal. An empty literal counts as absent.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref().filter(|l| !l.is_empty())
    }

    pub fn is_assignable(&self) -> bool {
        self.assignable
    }
}

/// A composite type: named, typed, ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field. Declaration order is append order.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}
