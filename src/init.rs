//! Recursive initializer.
//!
//! Walks a [`RecordShape`] depth-first in declaration order and assigns every assignable field:
//!
//! - `String` fields get the attached literal, or the field's own name.
//! - Integer fields get the attached literal parsed as base-10, or the field's index in its enclosing record. The
//!   value is then range-checked against the field's width.
//! - Nested record fields are initialized with the same rules; their indices restart at 0.
//! - Pointer and unsupported fields abort the construction.
//!
//! Construction is all-or-nothing: the first failing field aborts the walk and no partial record is returned.

use std::num::ParseIntError;

use tagenum_core::IntWidth;
use tagenum_core::numerics;

use crate::errors::EnumError;
use crate::reflect::EnumShape;
use crate::shape::{FieldDescriptor, FieldKind, RecordShape};
use crate::value::{Record, Value};

/// Build a populated record from a shape description.
///
/// ## Errors
/// - [`EnumError::Pointer`] / [`EnumError::UnsupportedKind`] for fields outside the string/integer/record domain.
/// - [`EnumError::AnnotationParse`] for integer literals that are not base-10 integers.
/// - [`EnumError::Overflow`] for values outside the field's range.
///
/// ## Examples
/// ```rust
/// use tagenum::{FieldDescriptor, FieldKind, IntWidth, RecordShape, Value};
///
/// let shape = RecordShape::new("Digits")
///     .field(FieldDescriptor::new("ZERO", FieldKind::Int(IntWidth::W64)))
///     .field(FieldDescriptor::new("ONE", FieldKind::Int(IntWidth::W64)));
/// let record = tagenum::construct(&shape).unwrap();
/// assert_eq!(record.get("ONE"), Some(&Value::Int(IntWidth::W64, 1)));
/// ```
#[tracing::instrument(skip_all, fields(shape = shape.name(), field_count = shape.fields().len()))]
pub fn construct(shape: &RecordShape) -> Result<Record, EnumError> {
    let mut path = Vec::new();
    build_record(shape, &mut path).inspect_err(|err| tracing::debug!(%err, "construction aborted"))
}

/// Construct a typed enum instance.
///
/// ## Examples
/// ```rust
/// use tagenum::EnumShape;
///
/// #[derive(EnumShape)]
/// struct HttpCode {
///     #[tagenum(value = "200")]
///     status_ok: i64,
///     #[tagenum(value = "404")]
///     status_not_found: i64,
/// }
///
/// let code: HttpCode = tagenum::new().unwrap();
/// assert_eq!(code.status_not_found, 404);
/// ```
pub fn new<T: EnumShape>() -> Result<T, EnumError> {
    let record = construct(&T::shape())?;
    T::from_record(&record)
}

fn build_record<'s>(shape: &'s RecordShape, path: &mut Vec<&'s str>) -> Result<Record, EnumError> {
    let mut record = Record::new(shape.name());
    for (index, field) in shape.fields().iter().enumerate() {
        path.push(field.name());
        if field.is_assignable() {
            let value = resolve_field(field, index, path)?;
            record.push(field.name(), value);
        } else {
            record.declare(field.name());
            tracing::debug!(field = %path.join("."), "skipping non-assignable field");
        }
        path.pop();
    }
    Ok(record)
}

fn resolve_field<'s>(field: &'s FieldDescriptor, index: usize, path: &mut Vec<&'s str>) -> Result<Value, EnumError> {
    let value = match field.kind() {
        FieldKind::Record(inner) => return build_record(inner, path).map(Value::Record),
        FieldKind::Pointer(_) => return Err(EnumError::Pointer { field: path.join(".") }),
        FieldKind::Unsupported(ty) => {
            return Err(EnumError::UnsupportedKind {
                field: path.join("."),
                kind: ty.clone(),
            });
        }
        FieldKind::Str => Value::Str(field.literal().unwrap_or(field.name()).to_owned()),
        FieldKind::Int(width) => Value::Int(*width, resolve_signed(field, index, *width, path)?),
        FieldKind::Uint(width) => Value::Uint(*width, resolve_unsigned(field, index, *width, path)?),
    };
    tracing::trace!(field = %path.join("."), index, from_literal = field.literal().is_some(), %value, "assigned");
    Ok(value)
}

fn resolve_signed(field: &FieldDescriptor, index: usize, width: IntWidth, path: &[&str]) -> Result<i64, EnumError> {
    let value = match field.literal() {
        Some(literal) => literal.parse::<i64>().map_err(|source| parse_error(path, literal, source))?,
        None => index_value(index, width.signed_range(), path)?,
    };
    numerics::check_signed(value, width).map_err(|range| EnumError::Overflow {
        field: path.join("."),
        value: i128::from(value),
        range,
    })
}

fn resolve_unsigned(field: &FieldDescriptor, index: usize, width: IntWidth, path: &[&str]) -> Result<u64, EnumError> {
    let value = match field.literal() {
        Some(literal) => parse_unsigned(literal).map_err(|source| parse_error(path, literal, source))?,
        None => index_value(index, width.unsigned_range(), path)?,
    };
    numerics::check_unsigned(value, width).map_err(|range| EnumError::Overflow {
        field: path.join("."),
        value: i128::from(value),
        range,
    })
}

/// Parse an unsigned base-10 literal. Unlike `u64::from_str`, a leading `+` is rejected.
fn parse_unsigned(literal: &str) -> Result<u64, ParseIntError> {
    if literal.starts_with('+') {
        // A lone sign fails with the same `InvalidDigit` error a `-` prefix gets.
        return "+".parse::<u64>();
    }
    literal.parse::<u64>()
}

/// Convert a positional index into the 64-bit carrier type.
///
/// Indices past the 64-bit range cannot occur for real shapes; they are reported as overflows instead of wrapping.
fn index_value<T: TryFrom<usize>>(index: usize, range: tagenum_core::IntRange, path: &[&str]) -> Result<T, EnumError> {
    T::try_from(index).map_err(|_| EnumError::Overflow {
        field: path.join("."),
        value: index as i128,
        range,
    })
}

fn parse_error(path: &[&str], literal: &str, source: ParseIntError) -> EnumError {
    EnumError::AnnotationParse {
        field: path.join("."),
        literal: literal.to_owned(),
        source,
    }
}
