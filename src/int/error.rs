use std::num::ParseIntError;

use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::Primitive;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{value} cannot be represented as {target} without loss of value")]
pub struct ConversionLossOfValue {
    pub value: i128,
    pub target: &'static str,
}

impl ConversionLossOfValue {
    pub(crate) const fn of<T: Primitive>(value: i128) -> ConversionLossOfValue {
        ConversionLossOfValue {
            value,
            target: T::NAME,
        }
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("arithmetic overflow: result exceeds {target}::MAX")]
pub struct ArithmeticOverflow {
    pub target: &'static str,
}

impl ArithmeticOverflow {
    pub(crate) const fn of<T: Primitive>() -> ArithmeticOverflow {
        ArithmeticOverflow { target: T::NAME }
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("arithmetic underflow: result is below {target}::MIN")]
pub struct ArithmeticUnderflow {
    pub target: &'static str,
}

impl ArithmeticUnderflow {
    pub(crate) const fn of<T: Primitive>() -> ArithmeticUnderflow {
        ArithmeticUnderflow { target: T::NAME }
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("division by zero")]
pub struct DivisionByZero;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("division overflow: {target}::MIN cannot be divided by -1")]
pub struct DivisionOverflow {
    pub target: &'static str,
}

impl DivisionOverflow {
    pub(crate) const fn of<T: Primitive>() -> DivisionOverflow {
        DivisionOverflow { target: T::NAME }
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("shift amount {amount} is invalid for a {bits}-bit integer")]
pub struct InvalidShiftAmount {
    pub amount: i128,
    pub bits: u32,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("bitwise operation on negative signed operand {value}")]
pub struct DisallowedSignedBitwiseOperand {
    pub value: i128,
}

/// The ways in which addition, subtraction, multiplication, negation or stepping can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    Overflow(ArithmeticOverflow),
    Underflow(ArithmeticUnderflow),
}

/// The ways in which division or remainder can fail. A quotient can still leave the destination's
/// range without being `MIN / -1`, e.g. a positive unsigned value divided by a negative divisor.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum DivisionError {
    ByZero(DivisionByZero),
    Overflow(DivisionOverflow),
    ResultOverflow(ArithmeticOverflow),
    ResultUnderflow(ArithmeticUnderflow),
}

impl From<ArithmeticError> for DivisionError {
    fn from(value: ArithmeticError) -> Self {
        match value {
            ArithmeticError::Overflow(e) => e.into(),
            ArithmeticError::Underflow(e) => e.into(),
        }
    }
}

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseError {
    Disallowed(DisallowedSignedBitwiseOperand),
    LossOfValue(ConversionLossOfValue),
}

/// The ways in which a left shift can fail. Bits shifted past the top of `T` are a loss of value.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ShiftError {
    InvalidAmount(InvalidShiftAmount),
    Disallowed(DisallowedSignedBitwiseOperand),
    LossOfValue(ConversionLossOfValue),
}

/// Returned when parsing a safe integer from text.
#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum ParseError {
    Invalid(ParseIntError),
    LossOfValue(ConversionLossOfValue),
}

/// Every rule a checked operation can report as violated. All of the per-operation errors convert
/// into this type, so `?` can be used freely across mixed operations.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum SafeIntError {
    ConversionLossOfValue(ConversionLossOfValue),
    ArithmeticOverflow(ArithmeticOverflow),
    ArithmeticUnderflow(ArithmeticUnderflow),
    DivisionByZero(DivisionByZero),
    DivisionOverflow(DivisionOverflow),
    InvalidShiftAmount(InvalidShiftAmount),
    DisallowedSignedBitwiseOperand(DisallowedSignedBitwiseOperand),
}

impl From<ArithmeticError> for SafeIntError {
    fn from(value: ArithmeticError) -> Self {
        match value {
            ArithmeticError::Overflow(e) => e.into(),
            ArithmeticError::Underflow(e) => e.into(),
        }
    }
}

impl From<DivisionError> for SafeIntError {
    fn from(value: DivisionError) -> Self {
        match value {
            DivisionError::ByZero(e) => e.into(),
            DivisionError::Overflow(e) => e.into(),
            DivisionError::ResultOverflow(e) => e.into(),
            DivisionError::ResultUnderflow(e) => e.into(),
        }
    }
}

impl From<BitwiseError> for SafeIntError {
    fn from(value: BitwiseError) -> Self {
        match value {
            BitwiseError::Disallowed(e) => e.into(),
            BitwiseError::LossOfValue(e) => e.into(),
        }
    }
}

impl From<ShiftError> for SafeIntError {
    fn from(value: ShiftError) -> Self {
        match value {
            ShiftError::InvalidAmount(e) => e.into(),
            ShiftError::Disallowed(e) => e.into(),
            ShiftError::LossOfValue(e) => e.into(),
        }
    }
}
