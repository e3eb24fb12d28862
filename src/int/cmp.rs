use std::cmp::Ordering;

use super::{Operand, Primitive, SafeInt};

/// Compares the mathematical values of two integers of any width and signedness.
///
/// Both values are promoted to a common type wide enough to hold either one exactly, so a negative
/// signed value is always less than any unsigned value. This is a deliberate departure from the
/// usual integer promotion rules, under which `-1` and `u32::MAX` would be considered equal. Casting
/// the returned [`Ordering`] with `as i8` gives -1, 0 or 1.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use safer::int::{compare, SafeI8};
/// assert_eq!(compare(-1_i32, u32::MAX), Ordering::Less);
/// assert_eq!(compare(u8::MAX, SafeI8::MAX), Ordering::Greater);
/// assert_eq!(compare(255_u8, 255_i64) as i8, 0);
/// ```
pub fn compare<A: Operand, B: Operand>(lhs: A, rhs: B) -> Ordering {
    lhs.primitive().widen().cmp(&rhs.primitive().widen())
}

impl<T: Primitive, R: Operand> PartialEq<R> for SafeInt<T> {
    fn eq(&self, other: &R) -> bool {
        compare(*self, *other) == Ordering::Equal
    }
}

impl<T: Primitive> Eq for SafeInt<T> {}

impl<T: Primitive, R: Operand> PartialOrd<R> for SafeInt<T> {
    fn partial_cmp(&self, other: &R) -> Option<Ordering> {
        Some(compare(*self, *other))
    }
}

impl<T: Primitive> Ord for SafeInt<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

macro_rules! impl_native_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl<T: Primitive> PartialEq<SafeInt<T>> for $t {
                fn eq(&self, other: &SafeInt<T>) -> bool {
                    compare(*self, *other) == Ordering::Equal
                }
            }

            impl<T: Primitive> PartialOrd<SafeInt<T>> for $t {
                fn partial_cmp(&self, other: &SafeInt<T>) -> Option<Ordering> {
                    Some(compare(*self, *other))
                }
            }
        )*
    };
}

impl_native_cmp!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
