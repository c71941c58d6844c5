//! Fixed-width integer policy.
//!
//! Every integer leaf resolves to a 64-bit value first (`i64` or `u64`) and is then checked against the range of the
//! field's declared width. The range table lives here so the runtime and the derive agree on widths and spellings.
//!
//! ## Examples
//! ```rust
//! use tagenum_core::numerics::{self, IntWidth};
//!
//! assert!(numerics::check_signed(127, IntWidth::W8).is_ok());
//! assert_eq!(numerics::check_signed(200, IntWidth::W8).unwrap_err().to_string(), "i8 range [-128, 127]");
//! assert!(numerics::check_unsigned(u64::MAX, IntWidth::W64).is_ok());
//! ```

use core::fmt;

/// Bit width of an integer field.
///
/// `Size` is the pointer-sized width (`isize`/`usize`); on 64-bit targets its range is the full 64-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    Size,
}

impl IntWidth {
    pub const ALL: [IntWidth; 5] = [IntWidth::W8, IntWidth::W16, IntWidth::W32, IntWidth::W64, IntWidth::Size];

    /// Number of bits in this width.
    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
            IntWidth::Size => usize::BITS,
        }
    }

    /// Rust spelling of the signed type with this width (e.g. `"i16"`).
    pub const fn signed_name(self) -> &'static str {
        match self {
            IntWidth::W8 => "i8",
            IntWidth::W16 => "i16",
            IntWidth::W32 => "i32",
            IntWidth::W64 => "i64",
            IntWidth::Size => "isize",
        }
    }

    /// Rust spelling of the unsigned type with this width (e.g. `"u16"`).
    pub const fn unsigned_name(self) -> &'static str {
        match self {
            IntWidth::W8 => "u8",
            IntWidth::W16 => "u16",
            IntWidth::W32 => "u32",
            IntWidth::W64 => "u64",
            IntWidth::Size => "usize",
        }
    }

    /// Variant identifier, used by the derive when it emits `IntWidth::<variant>` tokens.
    pub const fn variant_name(self) -> &'static str {
        match self {
            IntWidth::W8 => "W8",
            IntWidth::W16 => "W16",
            IntWidth::W32 => "W32",
            IntWidth::W64 => "W64",
            IntWidth::Size => "Size",
        }
    }

    /// Inclusive range of the signed type with this width.
    pub const fn signed_range(self) -> IntRange {
        let half = 1i128 << (self.bits() - 1);
        IntRange {
            type_name: self.signed_name(),
            min: -half,
            max: half - 1,
        }
    }

    /// Inclusive range of the unsigned type with this width.
    pub const fn unsigned_range(self) -> IntRange {
        IntRange {
            type_name: self.unsigned_name(),
            min: 0,
            max: (1i128 << self.bits()) - 1,
        }
    }
}

/// Inclusive range of a concrete integer type.
///
/// Bounds are stored as `i128` so signed and unsigned 64-bit ranges share one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub type_name: &'static str,
    pub min: i128,
    pub max: i128,
}

impl IntRange {
    #[inline]
    pub fn contains(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} range [{}, {}]", self.type_name, self.min, self.max)
    }
}

/// Check that a signed value fits the signed type of `width`.
///
/// ## Returns
/// - `Ok(value)` when it fits.
/// - `Err(range)` with the violated range otherwise.
pub fn check_signed(value: i64, width: IntWidth) -> Result<i64, IntRange> {
    let range = width.signed_range();
    if range.contains(i128::from(value)) { Ok(value) } else { Err(range) }
}

/// Check that an unsigned value fits the unsigned type of `width`.
///
/// ## Returns
/// - `Ok(value)` when it fits.
/// - `Err(range)` with the violated range otherwise.
pub fn check_unsigned(value: u64, width: IntWidth) -> Result<u64, IntRange> {
    let range = width.unsigned_range();
    if range.contains(i128::from(value)) { Ok(value) } else { Err(range) }
}

/// Resolve a Rust integer type spelling to its signedness and width.
///
/// ## Returns
/// - `Some((true, width))` for `i8`..`i64`/`isize`, `Some((false, width))` for `u8`..`u64`/`usize`.
/// - `None` for anything else (including `i128`/`u128`, which are not supported widths).
pub fn from_type_name(name: &str) -> Option<(bool, IntWidth)> {
    IntWidth::ALL.iter().find_map(|&w| {
        if w.signed_name() == name {
            Some((true, w))
        } else if w.unsigned_name() == name {
            Some((false, w))
        } else {
            None
        }
    })
}
