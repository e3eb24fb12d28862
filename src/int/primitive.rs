use std::fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex};
use std::hash::Hash;
use std::ops::{Not, Shl, Shr};

use super::SafeInt;

// Every supported value is widened into an i128 exactly, and the sum or difference of any two of
// them still fits.
const _: () = assert!(usize::BITS <= 64, "safe integers require a pointer width of at most 64");

mod private {
    pub trait Sealed {}
}

/// A native integer type that can back a [`SafeInt`].
///
/// This trait is sealed and implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`,
/// `u64` and `usize`. All of these fit into an [`i128`] exactly, which is used as the common type
/// that mixed operations are carried out in before the result is narrowed back down.
pub trait Primitive:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Display
    + Binary
    + Octal
    + LowerHex
    + UpperHex
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Send
    + Sync
    + 'static
    + private::Sealed
{
    const BITS: u32;
    const SIGNED: bool;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
    /// The name of the type as written in Rust, used in error messages.
    const NAME: &'static str;

    /// Widens the value into the common type without any loss.
    fn widen(self) -> i128;

    /// Narrows a value out of the common type, if it is within range.
    fn narrow(wide: i128) -> Option<Self>;
}

/// Anything that can be used as the second operand of a checked operation: a native integer or
/// another [`SafeInt`] of any width and signedness.
pub trait Operand: Copy + private::Sealed {
    type Primitive: Primitive;

    fn primitive(self) -> Self::Primitive;
}

impl<T: Primitive> private::Sealed for SafeInt<T> {}

impl<T: Primitive> Operand for SafeInt<T> {
    type Primitive = T;

    fn primitive(self) -> T {
        self.0
    }
}

macro_rules! impl_primitive {
    ($($t:ty => $signed:literal),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Primitive for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = $signed;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }

            impl Operand for $t {
                type Primitive = $t;

                #[inline]
                fn primitive(self) -> $t {
                    self
                }
            }

            impl From<SafeInt<$t>> for $t {
                fn from(value: SafeInt<$t>) -> $t {
                    value.get()
                }
            }
        )*
    };
}

impl_primitive! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
}
