//! Field type classification by spelling.
//!
//! ## Notes
//! - Only the last path segment is inspected (`std::sync::Arc<T>` classifies as `Arc`).
//! - Any spelling not listed here is assumed to name a nested record; the derive then requires that type to implement
//!   `EnumShape`, so a wrong guess is a compile error rather than a silent mis-initialization.

use crate::numerics::{self, IntWidth};

/// How a field type participates in initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Str,
    Int(IntWidth),
    Uint(IntWidth),
    /// Reference-like types. Always rejected at construction.
    Pointer,
    /// Types outside the string/integer/record domain. Always rejected at construction.
    Unsupported,
    /// A nested record shape.
    Record,
}

/// Owning or shared pointer wrappers, treated like references.
pub const POINTER_TYPES: &[&str] = &["Box", "Rc", "Arc", "Weak", "NonNull", "Cow", "Pin"];

/// Spellings that are never valid enum fields.
pub const UNSUPPORTED_TYPES: &[&str] = &[
    "f32",
    "f64",
    "bool",
    "char",
    "str",
    "i128",
    "u128",
    "Option",
    "Vec",
    "VecDeque",
    "LinkedList",
    "BinaryHeap",
    "HashMap",
    "BTreeMap",
    "HashSet",
    "BTreeSet",
    "Cell",
    "RefCell",
];

/// Classify a type by the spelling of its last path segment.
pub fn classify(name: &str) -> TypeClass {
    if name == "String" {
        return TypeClass::Str;
    }
    if let Some((signed, width)) = numerics::from_type_name(name) {
        return if signed { TypeClass::Int(width) } else { TypeClass::Uint(width) };
    }
    if POINTER_TYPES.contains(&name) {
        TypeClass::Pointer
    } else if UNSUPPORTED_TYPES.contains(&name) {
        TypeClass::Unsupported
    } else {
        TypeClass::Record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_spellings() {
        assert_eq!(classify("String"), TypeClass::Str);
        assert_eq!(classify("i8"), TypeClass::Int(IntWidth::W8));
        assert_eq!(classify("isize"), TypeClass::Int(IntWidth::Size));
        assert_eq!(classify("u64"), TypeClass::Uint(IntWidth::W64));
    }

    #[test]
    fn test_rejected_spellings() {
        assert_eq!(classify("Box"), TypeClass::Pointer);
        assert_eq!(classify("Rc"), TypeClass::Pointer);
        assert_eq!(classify("f64"), TypeClass::Unsupported);
        assert_eq!(classify("bool"), TypeClass::Unsupported);
        assert_eq!(classify("HashMap"), TypeClass::Unsupported);
        assert_eq!(classify("u128"), TypeClass::Unsupported);
    }

    #[test]
    fn test_unknown_spelling_is_record() {
        assert_eq!(classify("HttpCode"), TypeClass::Record);
    }
}
