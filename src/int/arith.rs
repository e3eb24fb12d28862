use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use super::{
    ArithmeticError, ArithmeticOverflow, ArithmeticUnderflow, DivisionByZero, DivisionError,
    DivisionOverflow, Operand, Primitive, SafeInt,
};
use crate::util::fault::fault;
use crate::util::result::ResultExtension;

/// Narrows an exact result into `T`, reporting which end of the range it fell off.
fn settle<T: Primitive>(exact: i128) -> Result<T, ArithmeticError> {
    match T::narrow(exact) {
        Some(value) => Ok(value),
        None if exact > 0 => Err(fault!(ArithmeticOverflow::of::<T>()).into()),
        None => Err(fault!(ArithmeticUnderflow::of::<T>()).into()),
    }
}

// Operands are widened from at most 64 bits, so sums and differences are always exact in an i128.

fn checked_add<T: Primitive>(lhs: i128, rhs: i128) -> Result<T, ArithmeticError> {
    settle(lhs + rhs)
}

fn checked_sub<T: Primitive>(lhs: i128, rhs: i128) -> Result<T, ArithmeticError> {
    settle(lhs - rhs)
}

fn checked_mul<T: Primitive>(lhs: i128, rhs: i128) -> Result<T, ArithmeticError> {
    // Only u64 * u64 can leave the i128 range, and a saturated product is outside any destination.
    settle(lhs.saturating_mul(rhs))
}

fn check_divisor<T: Primitive>(lhs: i128, rhs: i128) -> Result<(), DivisionError> {
    if rhs == 0 {
        return Err(fault!(DivisionByZero).into());
    }
    if T::SIGNED && rhs == -1 && lhs == T::MIN.widen() {
        return Err(fault!(DivisionOverflow::of::<T>()).into());
    }
    Ok(())
}

fn checked_div<T: Primitive>(lhs: i128, rhs: i128) -> Result<T, DivisionError> {
    check_divisor::<T>(lhs, rhs)?;
    Ok(settle(lhs / rhs)?)
}

/// The remainder takes the sign of the dividend, as with native integers. `MIN % -1` is rejected
/// even though its result would be zero.
fn checked_rem<T: Primitive>(lhs: i128, rhs: i128) -> Result<T, DivisionError> {
    check_divisor::<T>(lhs, rhs)?;
    Ok(settle(lhs % rhs)?)
}

impl<T: Primitive> SafeInt<T> {
    /// # Examples
    /// ```
    /// # use safer::int::{ArithmeticError, SafeI32};
    /// let min = SafeI32::MIN;
    /// assert!(matches!(min.try_add(-1_i32), Err(ArithmeticError::Underflow(_))));
    /// assert_eq!(min.try_add(1_u64), Ok(SafeI32::new(i32::MIN + 1)));
    /// ```
    pub fn try_add<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, ArithmeticError> {
        checked_add(self.widen(), rhs.primitive().widen()).map(SafeInt)
    }

    pub fn try_sub<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, ArithmeticError> {
        checked_sub(self.widen(), rhs.primitive().widen()).map(SafeInt)
    }

    pub fn try_mul<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, ArithmeticError> {
        checked_mul(self.widen(), rhs.primitive().widen()).map(SafeInt)
    }

    /// Divides, rounding towards zero.
    ///
    /// # Examples
    /// ```
    /// # use safer::int::{DivisionError, SafeI32, SafeU32};
    /// assert_eq!(SafeU32::MAX.try_div(2_u32), Ok(SafeU32::new(2147483647_u32)));
    /// assert!(matches!(SafeI32::MIN.try_div(-1_i32), Err(DivisionError::Overflow(_))));
    /// assert!(matches!(SafeU32::MAX.try_div(0_u8), Err(DivisionError::ByZero(_))));
    /// ```
    pub fn try_div<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, DivisionError> {
        checked_div(self.widen(), rhs.primitive().widen()).map(SafeInt)
    }

    pub fn try_rem<R: Operand>(self, rhs: R) -> Result<SafeInt<T>, DivisionError> {
        checked_rem(self.widen(), rhs.primitive().widen()).map(SafeInt)
    }

    /// Negates the value. Fails for `MIN` of a signed type and for any nonzero unsigned value.
    pub fn try_neg(self) -> Result<SafeInt<T>, ArithmeticError> {
        checked_sub(0, self.widen()).map(SafeInt)
    }

    /// Adds in place. On failure the value is left unchanged.
    pub fn try_add_assign<R: Operand>(&mut self, rhs: R) -> Result<(), ArithmeticError> {
        *self = self.try_add(rhs)?;
        Ok(())
    }

    pub fn try_sub_assign<R: Operand>(&mut self, rhs: R) -> Result<(), ArithmeticError> {
        *self = self.try_sub(rhs)?;
        Ok(())
    }

    pub fn try_mul_assign<R: Operand>(&mut self, rhs: R) -> Result<(), ArithmeticError> {
        *self = self.try_mul(rhs)?;
        Ok(())
    }

    pub fn try_div_assign<R: Operand>(&mut self, rhs: R) -> Result<(), DivisionError> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    pub fn try_rem_assign<R: Operand>(&mut self, rhs: R) -> Result<(), DivisionError> {
        *self = self.try_rem(rhs)?;
        Ok(())
    }
}

impl_checked_op!(Add, add, AddAssign, add_assign, try_add);
impl_checked_op!(Sub, sub, SubAssign, sub_assign, try_sub);
impl_checked_op!(Mul, mul, MulAssign, mul_assign, try_mul);
impl_checked_op!(Div, div, DivAssign, div_assign, try_div);
impl_checked_op!(Rem, rem, RemAssign, rem_assign, try_rem);

impl<T: Primitive> Neg for SafeInt<T> {
    type Output = SafeInt<T>;

    #[track_caller]
    fn neg(self) -> SafeInt<T> {
        self.try_neg().throw()
    }
}

// A native integer on the left still produces a SafeInt, while assigning into a native integer
// checks the result against the native type.
macro_rules! impl_native_lhs {
    (@op $t:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $checked:ident) => {
        impl<T: Primitive> $Op<SafeInt<T>> for $t {
            type Output = SafeInt<T>;

            #[track_caller]
            fn $op(self, rhs: SafeInt<T>) -> SafeInt<T> {
                SafeInt($checked::<T>(Primitive::widen(self), rhs.widen()).throw())
            }
        }

        impl<T: Primitive> $OpAssign<SafeInt<T>> for $t {
            #[track_caller]
            fn $op_assign(&mut self, rhs: SafeInt<T>) {
                *self = $checked::<$t>(Primitive::widen(*self), rhs.widen()).throw();
            }
        }
    };
    ($($t:ty),* $(,)?) => {
        $(
            impl_native_lhs!(@op $t, Add, add, AddAssign, add_assign, checked_add);
            impl_native_lhs!(@op $t, Sub, sub, SubAssign, sub_assign, checked_sub);
            impl_native_lhs!(@op $t, Mul, mul, MulAssign, mul_assign, checked_mul);
            impl_native_lhs!(@op $t, Div, div, DivAssign, div_assign, checked_div);
            impl_native_lhs!(@op $t, Rem, rem, RemAssign, rem_assign, checked_rem);
        )*
    };
}

impl_native_lhs!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
