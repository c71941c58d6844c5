//! Construction errors.
//!
//! Every failure names the field responsible as a dotted path from the top-level shape (`Code.StatusOK`), plus the
//! offending value and the valid range or kind where there is one. [`EnumError::kind`] maps variants onto the four
//! categories in [`tagenum_core::errors::ErrorKind`].

use std::num::ParseIntError;

use miette::Diagnostic;
use tagenum_core::IntRange;
use tagenum_core::errors::ErrorKind;
use thiserror::Error;

/// Errors raised while constructing an enum instance.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EnumError {
    #[error("{path}: {detail}")]
    #[diagnostic(code(tagenum::shape))]
    Shape { path: String, detail: String },

    #[error("field {field}: pointer types are not supported")]
    #[diagnostic(
        code(tagenum::pointer),
        help("store the value inline; enum fields must be String, an integer, or a struct deriving EnumShape")
    )]
    Pointer { field: String },

    #[error("field {field}: unsupported type {kind}; only string, integer, or struct types are allowed")]
    #[diagnostic(code(tagenum::unsupported_kind))]
    UnsupportedKind { field: String, kind: String },

    #[error("field {field}: invalid enum tag {literal:?}: {source}")]
    #[diagnostic(code(tagenum::annotation_parse), help("integer fields take a base-10 literal"))]
    AnnotationParse {
        field: String,
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("field {field}: value {value} overflows {range}")]
    #[diagnostic(code(tagenum::overflow), help("pick a literal inside the range or widen the field type"))]
    Overflow { field: String, value: i128, range: IntRange },
}

impl EnumError {
    /// The error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnumError::Shape { .. } => ErrorKind::Shape,
            EnumError::Pointer { .. } | EnumError::UnsupportedKind { .. } => ErrorKind::UnsupportedFieldKind,
            EnumError::AnnotationParse { .. } => ErrorKind::AnnotationParse,
            EnumError::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Path of the field responsible.
    pub fn field(&self) -> &str {
        match self {
            EnumError::Shape { path, .. } => path,
            EnumError::Pointer { field }
            | EnumError::UnsupportedKind { field, .. }
            | EnumError::AnnotationParse { field, .. }
            | EnumError::Overflow { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagenum_core::IntWidth;

    #[test]
    fn test_kind_mapping() {
        let pointer = EnumError::Pointer { field: "a".into() };
        let unsupported = EnumError::UnsupportedKind {
            field: "a".into(),
            kind: "f64".into(),
        };
        assert_eq!(pointer.kind(), ErrorKind::UnsupportedFieldKind);
        assert_eq!(unsupported.kind(), ErrorKind::UnsupportedFieldKind);
    }

    #[test]
    fn test_overflow_message() {
        let err = EnumError::Overflow {
            field: "Code.Small".into(),
            value: 200,
            range: IntWidth::W8.signed_range(),
        };
        assert_eq!(err.to_string(), "field Code.Small: value 200 overflows i8 range [-128, 127]");
        assert_eq!(err.field(), "Code.Small");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = EnumError::Pointer { field: "a".into() };
        assert_eq!(err.code().map(|c| c.to_string()), Some("tagenum::pointer".to_string()));
    }
}
