//! Overflow-checked integers. Revolves around [`SafeInt`], a wrapper over a native integer type
//! whose conversions, arithmetic, bitwise operations and comparisons detect every case where the
//! native operation would wrap, truncate, change sign or be undefined in C.
//!
//! # Method
//! Every supported native type fits into an [`i128`] exactly. Operations widen both operands,
//! compute the exact result and only then check it against the range of the destination type, so
//! mixing widths and signedness never involves the implicit conversions that make this kind of
//! code so easy to get wrong.
//!
//! # Errors
//! Each rule has its own error type and each family of operations returns a union of the rules it
//! can break, e.g. [`DivisionError`]. All of them convert into [`SafeIntError`].

// Implements an operator and its assigning form on top of the matching `try_` method.
macro_rules! impl_checked_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try_op:ident) => {
        impl<T: Primitive, R: Operand> $Op<R> for SafeInt<T> {
            type Output = SafeInt<T>;

            #[track_caller]
            fn $op(self, rhs: R) -> SafeInt<T> {
                self.$try_op(rhs).throw()
            }
        }

        impl<T: Primitive, R: Operand> $OpAssign<R> for SafeInt<T> {
            #[track_caller]
            fn $op_assign(&mut self, rhs: R) {
                *self = self.$try_op(rhs).throw();
            }
        }
    };
}

mod arith;
mod bitwise;
mod cmp;
mod error;
mod primitive;
mod safe_int;

pub use cmp::*;
pub use error::*;
pub use primitive::*;
pub use safe_int::*;
