//! Populated instances.
//!
//! [`Record`] is the dynamic form of an enum instance: its fields in declaration order, each holding a [`Value`].
//! Typed structs convert to and from records through `EnumShape`; the [`Leaf`] trait connects Rust leaf types
//! (`String` and the fixed-width integers) to their [`Value`] form.

use core::fmt;

use tagenum_core::{IntWidth, LeafKind};

use crate::errors::EnumError;

/// A field value of an initialized instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(IntWidth, i64),
    Uint(IntWidth, u64),
    Record(Record),
}

impl Value {
    /// The leaf kind of this value, or `None` for records.
    pub fn leaf_kind(&self) -> Option<LeafKind> {
        match self {
            Value::Str(_) => Some(LeafKind::Str),
            Value::Int(w, _) => Some(LeafKind::Int(*w)),
            Value::Uint(w, _) => Some(LeafKind::Uint(*w)),
            Value::Record(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Membership equality.
    ///
    /// Strings compare by content, integers by value *and* kind (an `i8` 7 does not match a `u64` 7), records by
    /// whole value. Values of different kinds never match.
    pub fn matches(&self, other: &Value) -> bool {
        self == other
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Int(_, v) => write!(f, "{v}"),
            Value::Uint(_, v) => write!(f, "{v}"),
            Value::Record(r) => write!(f, "{r}"),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

/// An initialized instance of a record shape.
///
/// `declared` lists every direct field in declaration order; `fields` holds only the ones that were assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    name: String,
    declared: Vec<String>,
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Append a field value. Declaration order is append order.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(field, value);
        self
    }

    pub fn push(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        self.declared.push(field.clone());
        self.fields.push((field, value.into()));
    }

    /// Append a field that holds no value (a non-assignable field left untouched).
    pub fn with_untouched(mut self, field: impl Into<String>) -> Self {
        self.declare(field);
        self
    }

    pub fn declare(&mut self, field: impl Into<String>) {
        self.declared.push(field.into());
    }

    /// Names of every direct field, assigned or not, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    /// Name of the shape this record was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, v)| v)
    }

    /// Assigned fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Read a leaf field as its Rust type.
    ///
    /// ## Errors
    /// - [`EnumError::Shape`] if the field is missing or holds a value of another kind.
    pub fn leaf<L: Leaf>(&self, field: &str) -> Result<L, EnumError> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        L::from_value(value).ok_or_else(|| EnumError::Shape {
            path: self.path_of(field),
            detail: format!("expected {} value, found {value}", L::KIND),
        })
    }

    /// Read a nested record field.
    ///
    /// ## Errors
    /// - [`EnumError::Shape`] if the field is missing or is not a record.
    pub fn record(&self, field: &str) -> Result<&Record, EnumError> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        value.as_record().ok_or_else(|| EnumError::Shape {
            path: self.path_of(field),
            detail: format!("expected record value, found {value}"),
        })
    }

    fn missing(&self, field: &str) -> EnumError {
        EnumError::Shape {
            path: self.path_of(field),
            detail: "field is missing from the record".to_string(),
        }
    }

    fn path_of(&self, field: &str) -> String {
        format!("{}.{}", self.name, field)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.name)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

/// A Rust leaf type: `String` or a fixed-width integer.
///
/// `from_value` matches the exact kind only: an `i8` is never read out of an `i16` value.
pub trait Leaf: Sized {
    const KIND: LeafKind;

    fn from_value(value: &Value) -> Option<Self>;

    fn to_value(&self) -> Value;
}

impl Leaf for String {
    const KIND: LeafKind = LeafKind::Str;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

macro_rules! int_leaf {
    ($variant:ident, $repr:ty, $kind:ident: $($ty:ty => $w:ident),* $(,)?) => {
        $(
            impl Leaf for $ty {
                const KIND: LeafKind = LeafKind::$kind(IntWidth::$w);

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(IntWidth::$w, v) => <$ty>::try_from(*v).ok(),
                        _ => None,
                    }
                }

                fn to_value(&self) -> Value {
                    Value::$variant(IntWidth::$w, *self as $repr)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    v.to_value()
                }
            }
        )*
    };
}

int_leaf!(Int, i64, Int: i8 => W8, i16 => W16, i32 => W32, i64 => W64, isize => Size);
int_leaf!(Uint, u64, Uint: u8 => W8, u16 => W16, u32 => W32, u64 => W64, usize => Size);
