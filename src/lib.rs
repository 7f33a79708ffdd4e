//! Long Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers stored as
//!   base-ten digits, with comparison, `+`, `-`, `*`, `/`, `%`, binary
//!   exponentiation, and fallible narrowing conversions back to the
//!   native integer widths.
//! - [`BigIntError`]: the error kinds reported by parsing, division,
//!   exponentiation, and narrowing.

mod big_int;
mod big_int_cache;
mod error;

pub use big_int::BigInt;
pub use error::BigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
