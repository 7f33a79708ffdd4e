use thiserror::Error;

/// Failure cases reported by [`BigInt`](crate::BigInt) construction and
/// arithmetic. Every fallible operation surfaces its kind synchronously at
/// the failing call; nothing is retried or degraded to an approximation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// The input string is empty, or contains anything other than an
    /// optional leading sign followed by one or more ASCII digits.
    #[error("invalid decimal string: {input:?}")]
    Format { input: String },

    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Exponentiation with a negative exponent.
    #[error("negative exponent")]
    InvalidExponent,

    /// The value does not fit in the requested native integer width.
    #[error("value out of range for {target}")]
    Overflow { target: &'static str },
}
