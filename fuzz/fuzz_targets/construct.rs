#![no_main]

use libfuzzer_sys::fuzz_target;
use tagenum::{FieldDescriptor, FieldKind, IntWidth, RecordShape};

fuzz_target!(|data: &[u8]| {
    // Ignore invalid UTF-8; attached literals are always text
    let Ok(literal) = std::str::from_utf8(data) else {
        return;
    };
    // Every width and signedness must either construct or return an error, never panic
    let shape = IntWidth::ALL.iter().fold(RecordShape::new("Fuzz"), |shape, &w| {
        shape
            .field(FieldDescriptor::new(w.signed_name(), FieldKind::Int(w)).with_literal(literal))
            .field(FieldDescriptor::new(w.unsigned_name(), FieldKind::Uint(w)).with_literal(literal))
    });
    let _ = tagenum::construct(&shape);
    let string = RecordShape::new("Fuzz").field(FieldDescriptor::new("s", FieldKind::Str).with_literal(literal));
    if let Ok(record) = tagenum::construct(&string) {
        assert!(literal.is_empty() || tagenum::contains(&record, literal));
    }
});
