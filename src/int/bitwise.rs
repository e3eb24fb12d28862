use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use super::{
    BitwiseError, ConversionLossOfValue, DisallowedSignedBitwiseOperand, InvalidShiftAmount,
    Operand, Primitive, SafeInt, ShiftError,
};
use crate::util::fault::fault;
use crate::util::result::ResultExtension;

fn non_negative(value: i128) -> Result<i128, DisallowedSignedBitwiseOperand> {
    if value < 0 {
        Err(fault!(DisallowedSignedBitwiseOperand { value }))
    } else {
        Ok(value)
    }
}

/// Shift amounts must lie in `0..T::BITS`.
fn shift_amount<T: Primitive>(amount: i128) -> Result<u32, InvalidShiftAmount> {
    match u32::try_from(amount) {
        Ok(valid) if valid < T::BITS => Ok(valid),
        _ => Err(fault!(InvalidShiftAmount {
            amount,
            bits: T::BITS,
        })),
    }
}

impl<T: Primitive> SafeInt<T> {
    /// Both operands are checked to be non-negative and widened to the common type, so the bits
    /// being combined are exactly the bits of the two values. The combined result must still fit
    /// into `T`.
    fn combine<R: Operand>(
        self,
        rhs: R,
        op: impl FnOnce(i128, i128) -> i128,
    ) -> Result<SafeInt<T>, BitwiseError> {
        let lhs = non_negative(self.widen())?;
        let rhs = non_negative(rhs.primitive().widen())?;
        let wide = op(lhs, rhs);
        match T::narrow(wide) {
            Some(value) => Ok(SafeInt(value)),
            None => Err(fault!(ConversionLossOfValue::of::<T>(wide)).into()),
        }
    }

    /// # Examples
    /// ```
    /// # use safer::int::{BitwiseError, SafeI32, SafeU32};
    /// assert_eq!(SafeU32::new(5_u32).try_bitand(SafeU32::new(3_u32)), Ok(SafeU32::new(1_u32)));
    /// assert!(matches!(SafeI32::new(-5_i32).try_bitand(3_i32), Err(BitwiseError::Disallowed(_))));
    /// ```
    pub fn try_bitand<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, BitwiseError> {
        self.combine(rhs, |a, b| a & b)
    }

    pub fn try_bitor<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, BitwiseError> {
        self.combine(rhs, |a, b| a | b)
    }

    pub fn try_bitxor<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, BitwiseError> {
        self.combine(rhs, |a, b| a ^ b)
    }

    /// Complements every bit of `T`. A non-negative signed value produces a negative one.
    pub fn try_not(self) -> Result<SafeInt<T>, DisallowedSignedBitwiseOperand> {
        non_negative(self.widen())?;
        Ok(SafeInt(!self.0))
    }

    /// Shifts left, failing instead of dropping any bit shifted past the top of `T`. Negative
    /// values can't be shifted left.
    ///
    /// # Examples
    /// ```
    /// # use safer::int::{SafeI32, SafeU32, SafeU8, ShiftError};
    /// let one = SafeU32::new(1_u32);
    /// assert_eq!(one.try_shl(31_u8), Ok(SafeU32::new(0x8000_0000_u32)));
    /// assert!(matches!(one.try_shl(32_u8), Err(ShiftError::InvalidAmount(_))));
    /// assert!(matches!(SafeI32::new(1_i32).try_shl(31_u8), Err(ShiftError::LossOfValue(_))));
    /// assert!(matches!(SafeU8::new(0xff_u8).try_shl(4_u8), Err(ShiftError::LossOfValue(_))));
    /// assert!(matches!(SafeI32::new(-1_i32).try_shl(1_u8), Err(ShiftError::Disallowed(_))));
    /// ```
    pub fn try_shl<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, ShiftError> {
        let amount = shift_amount::<T>(rhs.primitive().widen())?;
        let lhs = non_negative(self.widen())?;
        // At most 64 value bits shifted by at most 63 still fits below i128::MAX.
        Ok(SafeInt::try_new_wide(lhs << amount)?)
    }

    /// Shifts right. For signed types the shift is arithmetic.
    pub fn try_shr<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, InvalidShiftAmount> {
        let amount = shift_amount::<T>(rhs.primitive().widen())?;
        Ok(SafeInt(self.0 >> amount))
    }

    pub fn try_bitand_assign<R: Operand>(&mut self, rhs: R) -> Result<(), BitwiseError> {
        *self = self.try_bitand(rhs)?;
        Ok(())
    }

    pub fn try_bitor_assign<R: Operand>(&mut self, rhs: R) -> Result<(), BitwiseError> {
        *self = self.try_bitor(rhs)?;
        Ok(())
    }

    pub fn try_bitxor_assign<R: Operand>(&mut self, rhs: R) -> Result<(), BitwiseError> {
        *self = self.try_bitxor(rhs)?;
        Ok(())
    }

    pub fn try_shl_assign<R: Operand>(&mut self, rhs: R) -> Result<(), ShiftError> {
        *self = self.try_shl(rhs)?;
        Ok(())
    }

    pub fn try_shr_assign<R: Operand>(&mut self, rhs: R) -> Result<(), InvalidShiftAmount> {
        *self = self.try_shr(rhs)?;
        Ok(())
    }
}

impl_checked_op!(BitAnd, bitand, BitAndAssign, bitand_assign, try_bitand);
impl_checked_op!(BitOr, bitor, BitOrAssign, bitor_assign, try_bitor);
impl_checked_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, try_bitxor);
impl_checked_op!(Shl, shl, ShlAssign, shl_assign, try_shl);
impl_checked_op!(Shr, shr, ShrAssign, shr_assign, try_shr);

impl<T: Primitive> Not for SafeInt<T> {
    type Output = SafeInt<T>;

    #[track_caller]
    fn not(self) -> SafeInt<T> {
        self.try_not().throw()
    }
}
