use std::fmt::{self, Binary, Display, Formatter, LowerHex, Octal, UpperHex};
use std::hash::{Hash, Hasher};
use std::num::IntErrorKind;
use std::str::FromStr;

use super::{
    ArithmeticOverflow, ArithmeticUnderflow, ConversionLossOfValue, Operand, ParseError, Primitive,
};
use crate::util::fault::fault;
use crate::util::result::ResultExtension;

pub type SafeI8 = SafeInt<i8>;
pub type SafeI16 = SafeInt<i16>;
pub type SafeI32 = SafeInt<i32>;
pub type SafeI64 = SafeInt<i64>;
pub type SafeIsize = SafeInt<isize>;
pub type SafeU8 = SafeInt<u8>;
pub type SafeU16 = SafeInt<u16>;
pub type SafeU32 = SafeInt<u32>;
pub type SafeU64 = SafeInt<u64>;
pub type SafeUsize = SafeInt<usize>;

/// An integer of type `T` where every operation is checked, so that the value can never silently
/// wrap, truncate or change sign.
///
/// Each operation comes in two forms. The `try_` methods return a [`Result`] naming the rule that
/// was violated, while the operator traits (`+`, `<<`, `+=`, ...) and the methods without a prefix
/// panic with the same error instead. When an assigning operation fails, the value is left as it
/// was.
///
/// The right-hand side of an operation can be a native integer or a `SafeInt` of any width and
/// signedness. The exact result is computed first and then checked against the range of `T`, which
/// is always the type of the result.
///
/// # Examples
/// ```
/// # use safer::int::{SafeI32, SafeU8};
/// let a = SafeU8::new(200_u32);
/// assert_eq!(a + 55_i64, 255_u8);
/// assert!(a.try_add(56_u8).is_err());
///
/// let b = SafeI32::new(-1_i8);
/// assert!(b != u32::MAX);
/// assert!(b < 0_u64);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[repr(transparent)]
pub struct SafeInt<T: Primitive>(pub(crate) T);

impl<T: Primitive> SafeInt<T> {
    pub const MIN: SafeInt<T> = SafeInt(T::MIN);
    pub const MAX: SafeInt<T> = SafeInt(T::MAX);
    pub const ZERO: SafeInt<T> = SafeInt(T::ZERO);
    pub const BITS: u32 = T::BITS;

    /// Creates a SafeInt from any native or safe integer, returning an error if the value can't be
    /// represented by `T`.
    ///
    /// # Examples
    /// ```
    /// # use safer::int::SafeU8;
    /// assert_eq!(SafeU8::try_new(255_i32).map(|v| v.get()), Ok(255));
    /// assert!(SafeU8::try_new(300_i32).is_err());
    /// assert!(SafeU8::try_new(-1_i8).is_err());
    /// ```
    pub fn try_new<V: Operand>(value: V) -> Result<SafeInt<T>, ConversionLossOfValue> {
        SafeInt::try_new_wide(value.primitive().widen())
    }

    pub(crate) fn try_new_wide(wide: i128) -> Result<SafeInt<T>, ConversionLossOfValue> {
        match T::narrow(wide) {
            Some(value) => Ok(SafeInt(value)),
            None => Err(fault!(ConversionLossOfValue::of::<T>(wide))),
        }
    }

    /// Creates a SafeInt from any native or safe integer.
    ///
    /// # Panics
    /// Panics if the value can't be represented by `T`.
    #[track_caller]
    pub fn new<V: Operand>(value: V) -> SafeInt<T> {
        SafeInt::try_new(value).throw()
    }

    /// Creates a SafeInt holding 1 for `true` and 0 for `false`.
    pub fn from_bool(flag: bool) -> SafeInt<T> {
        SafeInt(if flag { T::ONE } else { T::ZERO })
    }

    /// Returns the underlying value. No check is needed, the value is always in range.
    pub fn get(self) -> T {
        self.0
    }

    pub(crate) fn widen(self) -> i128 {
        self.0.widen()
    }

    /// Converts into a SafeInt of another type, returning an error if the value can't be
    /// represented by `U`.
    ///
    /// # Examples
    /// ```
    /// # use safer::int::{SafeI16, SafeI64};
    /// let wide = SafeI64::new(-300_i32);
    /// assert_eq!(wide.convert::<i16>(), Ok(SafeI16::new(-300_i16)));
    /// assert!(wide.convert::<u16>().is_err());
    /// ```
    pub fn convert<U: Primitive>(self) -> Result<SafeInt<U>, ConversionLossOfValue> {
        SafeInt::try_new(self)
    }

    /// Converts into a native integer of another type, returning an error if the value can't be
    /// represented by `U`.
    pub fn try_into_primitive<U: Primitive>(self) -> Result<U, ConversionLossOfValue> {
        self.convert::<U>().map(SafeInt::get)
    }

    pub fn is_zero(self) -> bool {
        self.0 == T::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < T::ZERO
    }

    /// Returns `true` for any nonzero value.
    pub fn as_bool(self) -> bool {
        !self.is_zero()
    }

    /// The logical negation of the value: `true` only when it is zero.
    pub fn logical_not(self) -> bool {
        self.is_zero()
    }

    /// Adds one in place, leaving the value unchanged if it is already `MAX`.
    ///
    /// # Examples
    /// ```
    /// # use safer::int::SafeI8;
    /// let mut v = SafeI8::new(126_i8);
    /// assert!(v.try_increment().is_ok());
    /// assert!(v.try_increment().is_err());
    /// assert_eq!(v, 127_i8);
    /// ```
    pub fn try_increment(&mut self) -> Result<(), ArithmeticOverflow> {
        match T::narrow(self.widen() + 1) {
            Some(value) => {
                self.0 = value;
                Ok(())
            }
            None => Err(fault!(ArithmeticOverflow::of::<T>())),
        }
    }

    /// Subtracts one in place, leaving the value unchanged if it is already `MIN`.
    pub fn try_decrement(&mut self) -> Result<(), ArithmeticUnderflow> {
        match T::narrow(self.widen() - 1) {
            Some(value) => {
                self.0 = value;
                Ok(())
            }
            None => Err(fault!(ArithmeticUnderflow::of::<T>())),
        }
    }

    /// # Panics
    /// Panics if the value is already `MAX`.
    #[track_caller]
    pub fn increment(&mut self) {
        self.try_increment().throw()
    }

    /// # Panics
    /// Panics if the value is already `MIN`.
    #[track_caller]
    pub fn decrement(&mut self) {
        self.try_decrement().throw()
    }
}

impl<T: Primitive> From<T> for SafeInt<T> {
    fn from(value: T) -> Self {
        SafeInt(value)
    }
}

impl<T: Primitive> From<SafeInt<T>> for bool {
    fn from(value: SafeInt<T>) -> Self {
        value.as_bool()
    }
}

impl<T: Primitive> Hash for SafeInt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Primitive> FromStr for SafeInt<T> {
    type Err = ParseError;

    /// Parses a decimal integer, distinguishing text that isn't an integer at all from an integer
    /// that `T` can't hold. Integers beyond even the `i128` range are reported with their value
    /// saturated to `i128::MAX` or `i128::MIN`.
    ///
    /// # Examples
    /// ```
    /// # use safer::int::{ParseError, SafeU8};
    /// assert_eq!("255".parse::<SafeU8>().map(SafeU8::get), Ok(255));
    /// assert!(matches!("256".parse::<SafeU8>(), Err(ParseError::LossOfValue(_))));
    /// assert!(matches!("-".parse::<SafeU8>(), Err(ParseError::Invalid(_))));
    /// assert!(matches!(
    ///     "1000000000000000000000000000000000000000".parse::<SafeU8>(),
    ///     Err(ParseError::LossOfValue(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wide = match s.parse::<i128>() {
            Ok(wide) => wide,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i128::MAX,
                IntErrorKind::NegOverflow => i128::MIN,
                _ => return Err(e.into()),
            },
        };
        Ok(SafeInt::try_new_wide(wide)?)
    }
}

impl<T: Primitive> Display for SafeInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Primitive> LowerHex for SafeInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl<T: Primitive> UpperHex for SafeInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(&self.0, f)
    }
}

impl<T: Primitive> Binary for SafeInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Binary::fmt(&self.0, f)
    }
}

impl<T: Primitive> Octal for SafeInt<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Octal::fmt(&self.0, f)
    }
}
