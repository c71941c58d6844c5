//! Integration tests for derived enum structs: initialization and the three query helpers.
#![allow(non_snake_case)]

use tagenum::{EnumShape, IntWidth, LeafKind, Value};

#[derive(Debug, PartialEq, EnumShape)]
struct HttpStatusType {
    StatusOK: String,
    StatusNotFound: String,
    StatusInternalServerError: String,
}

#[derive(Debug, PartialEq, EnumShape)]
struct HttpStatusCode {
    #[tagenum(value = "200")]
    StatusOK: i64,
    #[tagenum(value = "404")]
    StatusNotFound: i64,
    #[tagenum(value = "500")]
    StatusInternalServerError: i64,
}

#[derive(Debug, PartialEq, EnumShape)]
struct HttpStatus {
    Code: HttpStatusCode,
    Type: HttpStatusType,
}

#[derive(Debug, EnumShape)]
struct Digits {
    ZERO: i32,
    ONE: i32,
    TWO: i32,
}

#[test]
fn test_string_enum() {
    let status: HttpStatusType = tagenum::new().unwrap();
    assert_eq!(status.StatusOK, "StatusOK");
    assert_eq!(status.StatusNotFound, "StatusNotFound");
    assert_eq!(status.StatusInternalServerError, "StatusInternalServerError");
}

#[test]
fn test_integer_enum_defaults_to_index() {
    let digits: Digits = tagenum::new().unwrap();
    assert_eq!((digits.ZERO, digits.ONE, digits.TWO), (0, 1, 2));
}

#[test]
fn test_integer_enum_uses_annotation() {
    let code: HttpStatusCode = tagenum::new().unwrap();
    assert_eq!(code.StatusOK, 200);
    assert_eq!(code.StatusNotFound, 404);
    assert_eq!(code.StatusInternalServerError, 500);
}

#[test]
fn test_nested_enum() {
    let status: HttpStatus = tagenum::new().unwrap();
    assert_eq!(status.Code, tagenum::new::<HttpStatusCode>().unwrap());
    assert_eq!(status.Type, tagenum::new::<HttpStatusType>().unwrap());
    assert_eq!(status.Code.StatusNotFound, 404);
    assert_eq!(status.Type.StatusInternalServerError, "StatusInternalServerError");
}

#[test]
fn test_mixed_kinds_and_widths() {
    #[derive(EnumShape)]
    struct Mixed {
        #[tagenum(value = "-5")]
        small: i8,
        label: String,
        #[tagenum(value = "65535")]
        port: u16,
        position: usize,
        #[tagenum(value = "")]
        empty_literal: u32,
        #[tagenum(value = "custom")]
        renamed: String,
        r#type: String,
    }

    let mixed: Mixed = tagenum::new().unwrap();
    assert_eq!(mixed.small, -5);
    assert_eq!(mixed.label, "label");
    assert_eq!(mixed.port, 65535);
    assert_eq!(mixed.position, 3);
    assert_eq!(mixed.empty_literal, 4);
    assert_eq!(mixed.renamed, "custom");
    assert_eq!(mixed.r#type, "type");
}

#[test]
fn test_skipped_field_is_left_default() {
    #[derive(EnumShape)]
    struct WithSkip {
        #[tagenum(skip)]
        hidden: String,
        visible: u8,
    }

    let value: WithSkip = tagenum::new().unwrap();
    assert_eq!(value.hidden, "");
    assert_eq!(value.visible, 1);
    assert_eq!(tagenum::keys(&value), ["hidden", "visible"]);
    assert_eq!(tagenum::values::<String>(&value), Vec::<String>::new());
    assert_eq!(value.to_record(), tagenum::construct(&WithSkip::shape()).unwrap());
}

#[test]
fn test_generic_struct_over_nested_enum() {
    #[derive(EnumShape)]
    struct Wrapper<T> {
        inner: T,
        label: String,
    }

    let wrapper: Wrapper<HttpStatusCode> = tagenum::new().unwrap();
    assert_eq!(wrapper.inner.StatusNotFound, 404);
    assert_eq!(wrapper.label, "label");
    assert_eq!(tagenum::keys(&wrapper), ["inner", "label"]);
}

#[test]
fn test_unit_struct_is_empty_record() {
    #[derive(EnumShape)]
    struct Nothing;

    let _: Nothing = tagenum::new().unwrap();
    assert!(tagenum::keys(&Nothing).is_empty());
}

#[test]
fn test_contains() {
    let status: HttpStatusType = tagenum::new().unwrap();
    assert!(tagenum::contains(&status, "StatusOK"));
    assert!(!tagenum::contains(&status, "Unknown"));

    let code: HttpStatusCode = tagenum::new().unwrap();
    assert!(tagenum::contains(&code, 404i64));
    assert!(!tagenum::contains(&code, 404u16));
    assert!(!tagenum::contains(&code, 404i32));
    assert!(!tagenum::contains(&code, "StatusOK"));
}

#[test]
fn test_contains_nested_compares_whole_value() {
    let status: HttpStatus = tagenum::new().unwrap();
    let code: HttpStatusCode = tagenum::new().unwrap();
    assert!(tagenum::contains(&status, &code));
    assert!(!tagenum::contains(&status, 200i64));
    assert!(!tagenum::contains(&status, "StatusOK"));
}

#[test]
fn test_keys() {
    let status: HttpStatusType = tagenum::new().unwrap();
    assert_eq!(
        tagenum::keys(&status),
        ["StatusOK", "StatusNotFound", "StatusInternalServerError"]
    );
    assert!(tagenum::keys(&123).is_empty());
}

#[test]
fn test_keys_do_not_recurse() {
    let status: HttpStatus = tagenum::new().unwrap();
    assert_eq!(tagenum::keys(&status), ["Code", "Type"]);
}

#[test]
fn test_values() {
    let status: HttpStatusType = tagenum::new().unwrap();
    assert_eq!(
        tagenum::values::<String>(&status),
        ["StatusOK", "StatusNotFound", "StatusInternalServerError"]
    );
    assert!(tagenum::values::<i64>(&status).is_empty());
}

#[test]
fn test_values_skip_nested_records() {
    let status: HttpStatus = tagenum::new().unwrap();
    assert!(tagenum::values::<String>(&status).is_empty());
    assert!(tagenum::values::<i64>(&status).is_empty());

    let code: HttpStatusCode = tagenum::new().unwrap();
    assert_eq!(tagenum::values::<i64>(&code), [200, 404, 500]);
    assert!(tagenum::values::<i32>(&code).is_empty());
    assert_eq!(
        tagenum::values_of(&code, LeafKind::Int(IntWidth::W64)),
        [
            Value::Int(IntWidth::W64, 200),
            Value::Int(IntWidth::W64, 404),
            Value::Int(IntWidth::W64, 500)
        ]
    );
}

#[test]
fn test_dynamic_and_typed_construction_agree() {
    let typed: HttpStatus = tagenum::new().unwrap();
    let dynamic = tagenum::construct(&HttpStatus::shape()).unwrap();
    assert_eq!(typed.to_record(), dynamic);
    assert_eq!(
        dynamic.to_string(),
        "HttpStatus{Code: HttpStatusCode{StatusOK: 200, StatusNotFound: 404, StatusInternalServerError: 500}, \
         Type: HttpStatusType{StatusOK: \"StatusOK\", StatusNotFound: \"StatusNotFound\", \
         StatusInternalServerError: \"StatusInternalServerError\"}}"
    );
}
