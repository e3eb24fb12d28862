//! This crate provides integers that refuse to be wrong quietly.
//!
//! # Purpose
//! Native integers wrap, truncate and change sign in ways that are easy to miss, especially when
//! two operands differ in width or signedness. Rust already panics on overflow in debug builds, but
//! it says nothing about a comparison between an `i32` and a `u32` after an `as` cast, or about a
//! narrowing conversion that was written years ago and is now silently losing data.
//! [`SafeInt`](int::SafeInt) wraps a native integer and checks every conversion, arithmetic
//! operation, shift, bitwise operation and comparison against the real mathematical result.
//!
//! # Error Handling
//! Every checked operation is available in two forms. Methods prefixed with `try_` return a
//! [`Result`] with a strongly typed error that names the rule that was broken, using enums for
//! static dispatch and small structs that implement [`Error`](std::error::Error) for each rule.
//! The operator traits (and the unprefixed methods such as `new` and `increment`) panic with the
//! same error instead, because having to handle a `Result` for every `a + b` would make the type
//! unpleasant to use. Neither form ever produces a wrapped or truncated value.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because deriving `Display`, `Error`
//! and `From` by hand for a dozen small types is exactly the kind of repetitive programming I'd
//! rather not do. With the default `log` feature, every fault is also reported through the `log`
//! facade at debug level under the `safer::int` target.
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::unwrap_used)]

pub mod int;

pub(crate) mod util;
