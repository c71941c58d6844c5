//! Error category vocabulary.
//!
//! Construction failures fall into exactly four categories. The runtime error type maps each of its variants onto one
//! of these so callers can branch on the category without matching every variant.

/// Stable identifier for a construction failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The described type is not a record shape, or a record does not match its shape.
    Shape,
    /// A field's kind is not string, integer, unsigned integer or nested record (pointers included).
    UnsupportedFieldKind,
    /// An attached literal is not a base-10 integer.
    AnnotationParse,
    /// A resolved integer does not fit the field's width.
    Overflow,
}

/// Metadata for an error category.
#[derive(Debug, Clone, Copy)]
pub struct ErrorKindInfo {
    pub id: ErrorKind,
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of error categories.
pub const ERROR_KINDS: &[ErrorKindInfo] = &[
    ErrorKindInfo {
        id: ErrorKind::Shape,
        canonical: "ShapeError",
        description: "The type is not a record shape, or a record does not match the shape it was built from.",
    },
    ErrorKindInfo {
        id: ErrorKind::UnsupportedFieldKind,
        canonical: "UnsupportedFieldKindError",
        description: "A field is not a string, an integer, or a nested record.",
    },
    ErrorKindInfo {
        id: ErrorKind::AnnotationParse,
        canonical: "AnnotationParseError",
        description: "An integer field's attached literal is not a base-10 integer.",
    },
    ErrorKindInfo {
        id: ErrorKind::Overflow,
        canonical: "OverflowError",
        description: "An integer value does not fit the field's declared width.",
    },
];

/// Return the canonical spelling for an error category (e.g. `"OverflowError"`).
#[inline]
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the user-facing description for an error category.
#[inline]
pub fn description(kind: ErrorKind) -> &'static str {
    info_for(kind).description
}

/// Resolve a spelling to an error category. Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    ERROR_KINDS.iter().find(|e| e.canonical == name).map(|e| e.id)
}

/// Return full metadata for an error category.
pub fn info_for(kind: ErrorKind) -> &'static ErrorKindInfo {
    match kind {
        ErrorKind::Shape => &ERROR_KINDS[0],
        ErrorKind::UnsupportedFieldKind => &ERROR_KINDS[1],
        ErrorKind::AnnotationParse => &ERROR_KINDS[2],
        ErrorKind::Overflow => &ERROR_KINDS[3],
    }
}
