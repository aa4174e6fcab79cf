//! Multiprecision integers: arbitrary-precision naturals and integers, fixed-width unsigned
//! integers, and codecs for byte sequences, decimal and hexadecimal text.

mod ops_macros;

mod add_impl;
mod base_uint;
mod bytes_codec;
mod cmp_impl;
mod div_impl;
mod endian;
mod error;
mod euclid;
pub mod hexstr;
mod int;
mod modular;
mod mul_impl;
mod nat;
mod number;
mod shift_impl;
pub mod text;
mod word;

pub use base_uint::{
    BaseUint, Uint128, Uint160, Uint224, Uint256, Uint320, Uint384, Uint448, Uint512,
};

pub use bytes_codec::{read_bytes, read_signed_bytes, write_bytes, write_signed_bytes};

pub use endian::{Endian, EndianBytes, Signedness};

pub use error::{ByteLengthError, DivisionByZero, IndexOutOfBounds, RangeError};

pub use euclid::{extended_gcd, ExtendedGcd, ExtendedGcdError};

pub use int::Z;

pub use modular::{Modular, Modulus};

pub use nat::N;

pub use number::{Division, FromMagnitude, Signed, Unsigned};

pub use text::Base;

pub use word::{WordType, WORD_BITS};
