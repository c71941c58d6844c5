//! Reflection traits connecting typed structs to record shapes.
//!
//! [`EnumShape`] is normally derived with `#[derive(EnumShape)]`. [`Inspect`] is the read side used by the query
//! helpers: anything that may or may not be a record.

use std::borrow::Cow;

use crate::errors::EnumError;
use crate::shape::RecordShape;
use crate::value::{Record, Value};

/// A struct that can be described as a record shape and populated from a record.
///
/// # Examples
///
/// ```rust
/// use tagenum::EnumShape;
///
/// #[derive(EnumShape)]
/// struct Digits {
///     zero: i32,
///     one: i32,
/// }
///
/// // Generated implementation describes the fields in declaration order:
/// let names: Vec<_> = Digits::shape().fields().iter().map(|f| f.name().to_string()).collect();
/// assert_eq!(names, ["zero", "one"]);
/// ```
pub trait EnumShape: Sized {
    /// Describe this type's fields.
    fn shape() -> RecordShape;

    /// Build a typed instance from a record produced by [`construct`](crate::construct) on [`shape`](Self::shape).
    ///
    /// ## Errors
    /// - [`EnumError::Shape`] if the record does not match the shape.
    fn from_record(record: &Record) -> Result<Self, EnumError>;

    /// The dynamic form of this instance. Non-assignable fields are not included.
    fn to_record(&self) -> Record;
}

/// Read access for the query helpers.
///
/// Returns `None` when the value is not a record shape; queries then report "not found" or an empty sequence.
pub trait Inspect {
    fn as_record(&self) -> Option<Cow<'_, Record>>;
}

impl Inspect for Record {
    fn as_record(&self) -> Option<Cow<'_, Record>> {
        Some(Cow::Borrowed(self))
    }
}

impl Inspect for Value {
    fn as_record(&self) -> Option<Cow<'_, Record>> {
        Value::as_record(self).map(Cow::Borrowed)
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn as_record(&self) -> Option<Cow<'_, Record>> {
        (**self).as_record()
    }
}

macro_rules! not_a_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn as_record(&self) -> Option<Cow<'_, Record>> {
                    None
                }
            }
        )*
    };
}

not_a_record!(str, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::FieldKind;
    use tagenum_core::IntWidth;

    #[derive(Debug, PartialEq, crate::EnumShape)]
    struct Inner {
        #[tagenum(value = "7")]
        a: u8,
    }

    #[derive(Debug, PartialEq, crate::EnumShape)]
    struct Outer {
        name: String,
        inner: Inner,
        #[tagenum(skip)]
        cache: Vec<u8>,
    }

    #[test]
    fn test_derived_shape_describes_fields() {
        let shape = Outer::shape();
        assert_eq!(shape.name(), "Outer");
        assert_eq!(shape.fields()[0].kind(), &FieldKind::Str);
        assert_eq!(
            shape.fields()[1].kind(),
            &FieldKind::Record(RecordShape::new("Inner").field(
                crate::FieldDescriptor::new("a", FieldKind::Uint(IntWidth::W8)).with_literal("7")
            ))
        );
        assert!(!shape.fields()[2].is_assignable());
    }

    #[test]
    fn test_record_round_trip_skips_unassignable() {
        let outer: Outer = crate::new().unwrap();
        assert_eq!(outer.inner, Inner { a: 7 });
        assert!(outer.cache.is_empty());
        let record = outer.to_record();
        assert_eq!(record.len(), 2);
        assert_eq!(Outer::from_record(&record), Ok(outer));
    }

    #[test]
    fn test_from_record_rejects_mismatched_record() {
        let record = Record::new("Outer").with("name", 1i64);
        let err = Outer::from_record(&record).unwrap_err();
        assert_eq!(err.kind(), tagenum_core::errors::ErrorKind::Shape);
        assert_eq!(err.field(), "Outer.name");
    }
}
