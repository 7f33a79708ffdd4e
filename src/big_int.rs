//! # BigInt
//! Immutable arbitrary-precision signed integers stored as base-ten digits,
//! least significant first. Every operation returns a new value.
//! # Example
//! ```
//! use long_int::BigInt;
//!
//! let a: BigInt = "12345678901234567890".parse().unwrap();
//! let b = BigInt::from(987654321);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a ^ 3 = {}", a.pow(&BigInt::from(3)).unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};

use crate::big_int_cache::*;
use crate::error::BigIntError;

/// A signed integer of unbounded magnitude.
///
/// The magnitude is a vector of base-ten digits, least significant first,
/// with no most-significant zero digits; zero is the single digit `[0]`
/// and is never negative. Those invariants hold after every construction
/// and every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    digits: Vec<u8>,
    negative: bool,
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt { digits: vec![0], negative: false }
    }
}

// construction
impl BigInt {
    /// Builds a value from pre-normalized parts. The caller guarantees the
    /// digit invariants; only the cache module uses this.
    pub(crate) fn from_raw(digits: Vec<u8>, negative: bool) -> Self {
        debug_assert!(digits.iter().all(|&d| d < 10));
        debug_assert!(digits.len() == 1 || digits.last() != Some(&0));
        debug_assert!(!(negative && digits == [0]));
        BigInt { digits, negative }
    }

    /// Normalizing constructor: strips most-significant zero digits and
    /// canonicalizes the sign of zero. Every arithmetic result passes
    /// through here.
    fn new(mut digits: Vec<u8>, negative: bool) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        let negative = negative && digits != [0];
        BigInt { digits, negative }
    }

    fn value_of(val: u64, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            return if negative {
                SMALL_NEG[val as usize].clone()
            } else {
                SMALL_POS[val as usize].clone()
            };
        }
        let mut digits = Vec::new();
        let mut rest = val;
        while rest != 0 {
            digits.push((rest % 10) as u8);
            rest /= 10;
        }
        BigInt { digits, negative }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// The magnitude of this value, as a new non-negative value.
    pub fn abs(&self) -> BigInt {
        BigInt { digits: self.digits.clone(), negative: false }
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

// parsing
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Accepts an optional leading `+` or `-` followed by one or more
    /// ASCII digits. Leading zeros are allowed and normalized away;
    /// `"-0"` parses to canonical zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'+') => (false, &s[1..]),
            Some(b'-') => (true, &s[1..]),
            Some(_) => (false, s),
            None => return Err(BigIntError::Format { input: s.to_owned() }),
        };
        if body.is_empty() {
            return Err(BigIntError::Format { input: s.to_owned() });
        }

        let mut digits = Vec::with_capacity(body.len());
        for c in body.chars().rev() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(BigIntError::Format { input: s.to_owned() }),
            }
        }
        Ok(BigInt::new(digits, negative))
    }
}

// printing
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::with_capacity(self.digits.len() + 1);
        if self.negative {
            s.push('-');
        }
        s.extend(self.digits.iter().rev().map(|&d| char::from(b'0' + d)));
        f.write_str(&s)
    }
}

// comparison
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        BigInt::cmp_mag(&self.digits, &other.digits)
    }

    /// Compares two normalized magnitudes: shorter means smaller, equal
    /// lengths compare digit by digit from the most significant end.
    fn cmp_mag(x: &[u8], y: &[u8]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        x.iter().rev().cmp(y.iter().rev())
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare_mag(other),
            (true, true) => self.compare_mag(other).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// addition
impl Add for BigInt {
    type Output = BigInt;

    fn add(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }

        if self.is_zero() {
            return val;
        }

        if val.negative == self.negative {
            let negative = self.negative;
            return BigInt::new(BigInt::add_mag(&self.digits, &val.digits), negative);
        }

        match self.compare_mag(&val) {
            Ordering::Less => {
                let negative = val.negative;
                BigInt::new(BigInt::sub_mag(&val.digits, &self.digits), negative)
            }
            Ordering::Equal => BigInt::default(),
            Ordering::Greater => {
                let negative = self.negative;
                BigInt::new(BigInt::sub_mag(&self.digits, &val.digits), negative)
            }
        }
    }
}

impl BigInt {
    /// Positional base-ten addition with carry; the result has at most
    /// one digit more than the longer operand.
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut sum = Vec::with_capacity(x.len().max(y.len()) + 1);
        let mut carry = 0;
        for pair in x.iter().zip_longest(y.iter()) {
            let t = match pair {
                EitherOrBoth::Both(a, b) => a + b + carry,
                EitherOrBoth::Left(d) | EitherOrBoth::Right(d) => d + carry,
            };
            sum.push(t % 10);
            carry = t / 10;
        }
        if carry != 0 {
            sum.push(carry);
        }
        sum
    }

    /// Positional subtraction with borrow. The first operand's magnitude
    /// must not be smaller than the second's; the caller normalizes.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut diff = Vec::with_capacity(big.len());
        let mut borrow = 0i16;
        for (i, &d) in big.iter().enumerate() {
            let mut t = d as i16 - borrow - little.get(i).copied().unwrap_or(0) as i16;
            if t < 0 {
                t += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            diff.push(t as u8);
        }
        diff
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() + rhs.clone();
    }
}

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        let BigInt { digits, negative } = self;
        BigInt { digits, negative: !negative }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// subtraction
impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, val: Self) -> Self::Output {
        self + (-val)
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() - rhs.clone();
    }
}

// multiplication
impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return BigInt::default();
        }
        let negative = self.negative != val.negative;
        BigInt::new(BigInt::mul_mag(&self.digits, &val.digits), negative)
    }
}

impl BigInt {
    /// Schoolbook multiplication: accumulate every digit pair into a
    /// `len(x) + len(y)` buffer, letting the carry ripple as far as it
    /// needs to.
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut acc = vec![0u8; x.len() + y.len()];
        for (i, &xd) in x.iter().enumerate() {
            let mut carry = 0u32;
            for (j, &yd) in y.iter().enumerate() {
                let t = acc[i + j] as u32 + xd as u32 * yd as u32 + carry;
                acc[i + j] = (t % 10) as u8;
                carry = t / 10;
            }
            let mut k = i + y.len();
            while carry != 0 {
                let t = acc[k] as u32 + carry;
                acc[k] = (t % 10) as u8;
                carry = t / 10;
                k += 1;
            }
        }
        acc
    }

    /// Multiplies a magnitude by a single nonzero digit.
    fn mul_by_digit(x: &[u8], d: u8) -> Vec<u8> {
        let mut product = Vec::with_capacity(x.len() + 1);
        let mut carry = 0;
        for &xd in x {
            let t = xd * d + carry;
            product.push(t % 10);
            carry = t / 10;
        }
        if carry != 0 {
            product.push(carry);
        }
        product
    }

    fn trim_mag(mut digits: Vec<u8>) -> Vec<u8> {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        digits
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() * rhs.clone()
    }
}

// division
impl BigInt {
    /// Computes quotient and remainder in one pass.
    ///
    /// Division truncates toward zero: the quotient's sign is the
    /// exclusive-or of the operand signs, the remainder takes the
    /// dividend's sign, and `(a / b) * b + (a % b) == a` holds for every
    /// nonzero `b`. Fails with [`BigIntError::DivisionByZero`] when the
    /// divisor is zero.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() || self.compare_mag(other) == Ordering::Less {
            return Ok((BigInt::default(), self.clone()));
        }
        let (q, r) = BigInt::div_rem_mag(&self.digits, &other.digits);
        let quotient = BigInt::new(q, self.negative != other.negative);
        let remainder = BigInt::new(r, self.negative);
        Ok((quotient, remainder))
    }

    /// Fallible form of the `/` operator.
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Fallible form of the `%` operator.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Long division on magnitudes. Walks the dividend from the most
    /// significant digit, keeping a running remainder; each quotient
    /// digit is the largest `q` in `0..=9` with `v * q <= remainder`,
    /// found by binary search over the ten candidates (at most four
    /// trial products per digit).
    fn div_rem_mag(u: &[u8], v: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let mut quotient = Vec::with_capacity(u.len());
        let mut remainder = vec![0u8];
        for &d in u.iter().rev() {
            if remainder == [0] {
                remainder[0] = d;
            } else {
                remainder.insert(0, d);
            }

            let (mut lo, mut hi) = (0u8, 9u8);
            while lo < hi {
                let mid = (lo + hi + 1) / 2;
                if BigInt::cmp_mag(&BigInt::mul_by_digit(v, mid), &remainder) == Ordering::Greater {
                    hi = mid - 1;
                } else {
                    lo = mid;
                }
            }

            if lo != 0 {
                let product = BigInt::mul_by_digit(v, lo);
                remainder = BigInt::trim_mag(BigInt::sub_mag(&remainder, &product));
            }
            quotient.push(lo);
        }
        quotient.reverse();
        (quotient, remainder)
    }
}

impl Div for BigInt {
    type Output = BigInt;

    /// Panics on a zero divisor; use [`BigInt::checked_div`] to handle
    /// that case as an error.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() / rhs.clone();
    }
}

// remainder
impl Rem for BigInt {
    type Output = BigInt;

    /// Panics on a zero divisor; use [`BigInt::checked_rem`] to handle
    /// that case as an error.
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(&rhs).expect("division by zero")
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.clone() % rhs;
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() % rhs.clone();
    }
}

// exponentiation
impl BigInt {
    /// Raises `self` to `exponent` by repeated squaring.
    ///
    /// Fails with [`BigIntError::InvalidExponent`] when the exponent is
    /// negative, and with [`BigIntError::Overflow`] when it does not fit
    /// in a `u32`. A zero exponent yields one, including `0^0`.
    pub fn pow(&self, exponent: &BigInt) -> Result<BigInt, BigIntError> {
        if exponent.negative {
            return Err(BigIntError::InvalidExponent);
        }
        let mut e = u32::try_from(exponent)?;
        let mut base = self.clone();
        let mut acc = BigInt::from(1_u32);
        while e != 0 {
            if e & 1 == 1 {
                acc = &acc * &base;
            }
            e >>= 1;
            if e != 0 {
                base = &base * &base;
            }
        }
        Ok(acc)
    }
}

// narrowing conversion
impl BigInt {
    /// Rebuilds the magnitude by digit-weighted summation, failing as soon
    /// as the accumulator would leave `u64` range.
    fn magnitude_as_u64(&self, target: &'static str) -> Result<u64, BigIntError> {
        let mut acc: u64 = 0;
        for &d in self.digits.iter().rev() {
            acc = acc
                .checked_mul(10)
                .and_then(|acc| acc.checked_add(d as u64))
                .ok_or(BigIntError::Overflow { target })?;
        }
        Ok(acc)
    }
}

macro_rules! impl_big_num_to_unsigned {
    ($($u: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $u {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            if val.negative {
                return Err(BigIntError::Overflow { target: stringify!($u) });
            }
            let mag = val.magnitude_as_u64(stringify!($u))?;
            <$u>::try_from(mag).map_err(|_| BigIntError::Overflow { target: stringify!($u) })
        }
    }
    impl TryFrom<BigInt> for $u {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$u>::try_from(&val)
        }
    }
    )*
    };
}

macro_rules! impl_big_num_to_signed {
    ($($i: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $i {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            let mag = val.magnitude_as_u64(stringify!($i))?;
            let max = <$i>::MAX as u64;
            if val.negative {
                // one extra magnitude on the negative side
                if mag > max + 1 {
                    Err(BigIntError::Overflow { target: stringify!($i) })
                } else if mag == max + 1 {
                    Ok(<$i>::MIN)
                } else {
                    Ok(-(mag as $i))
                }
            } else if mag > max {
                Err(BigIntError::Overflow { target: stringify!($i) })
            } else {
                Ok(mag as $i)
            }
        }
    }
    impl TryFrom<BigInt> for $i {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$i>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_num_to_unsigned!(u8, u16, u32, usize, u64);
impl_big_num_to_signed!(i8, i16, i32, isize, i64);

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0).to_string(), "0");
    assert_eq!(BigInt::from(12_i8).to_string(), "12");
    assert_eq!(BigInt::from(-100_i16).to_string(), "-100");
    assert_eq!(BigInt::from(7_u8).to_string(), "7");
    assert_eq!(BigInt::from(16_u32).to_string(), "16");
    assert_eq!(BigInt::from(123456789_usize).to_string(), "123456789");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(-1_isize), BigInt::from(-1_i8));
}

#[test]
fn test_parse() {
    let a: BigInt = "+0042".parse().unwrap();
    assert_eq!(a.to_string(), "42");

    let zero: BigInt = "-0".parse().unwrap();
    assert_eq!(zero.to_string(), "0");
    assert!(!zero.negative);
    assert_eq!(zero.digits, [0]);

    let b: BigInt = "0000".parse().unwrap();
    assert_eq!(b, BigInt::default());

    let c: BigInt = "-00700".parse().unwrap();
    assert_eq!(c.to_string(), "-700");

    let d: BigInt = "12345678901234567890".parse().unwrap();
    assert_eq!(d.to_string(), "12345678901234567890");

    for bad in ["", "+", "-", "12a3", "1 2", "+-3", "12.5"] {
        assert!(matches!(
            bad.parse::<BigInt>(),
            Err(BigIntError::Format { .. })
        ));
    }
}

#[test]
fn test_cmp() {
    let parse = |s: &str| s.parse::<BigInt>().unwrap();
    let mut vals = vec![
        parse("100"),
        parse("-100"),
        parse("0"),
        parse("-99"),
        parse("99"),
        parse("-1"),
        parse("1"),
    ];
    vals.sort();
    let sorted: Vec<String> = vals.iter().map(|v| v.to_string()).collect();
    assert_eq!(sorted, ["-100", "-99", "-1", "0", "1", "99", "100"]);

    let a = parse("12345678901234567890");
    let b = parse("-12345678901234567890");
    assert!(b < a);
    assert!(a > b);
    assert_eq!(a, parse("+12345678901234567890"));
    assert_ne!(a, b);

    // exactly one of <, ==, > holds for every pair
    for x in [&a, &b, &vals[3]] {
        for y in [&a, &b, &vals[3]] {
            let flags = [x < y, x == y, x > y];
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
        }
    }
}

#[test]
fn test_add() {
    let a: BigInt = "12345678901234567890".parse().unwrap();
    let b: BigInt = "987654321321".parse().unwrap();
    assert_eq!((&a + &b).to_string(), "12345679888888889211");
    assert_eq!(&a + &b, &b + &a);

    assert_eq!(&a + &BigInt::default(), a);

    let neg_a = -&a;
    assert_eq!(&a + &neg_a, BigInt::default());

    let carry: BigInt = "999999999999999999".parse().unwrap();
    assert_eq!((carry + BigInt::from(1)).to_string(), "1000000000000000000");

    let c: BigInt = "-12345".parse().unwrap();
    let d: BigInt = "999".parse().unwrap();
    assert_eq!((&c + &d).to_string(), "-11346");

    let e: BigInt = "-111111111111111111111".parse().unwrap();
    assert_eq!((&a + &b) + e.clone(), &a + &(&b + &e));
}

#[test]
fn test_sub() {
    let a: BigInt = "12345678901234567890".parse().unwrap();
    let b: BigInt = "987654321321".parse().unwrap();
    assert_eq!((&a - &b).to_string(), "12345677913580246569");
    assert_eq!((&a - &a).to_string(), "0");

    let c: BigInt = "-12345".parse().unwrap();
    let d: BigInt = "999".parse().unwrap();
    assert_eq!((&c - &d).to_string(), "-13344");
    assert_eq!((&d - &c).to_string(), "13344");

    // a difference that collapses to zero stays canonical
    let e = &d - &d;
    assert!(!e.negative);
    assert_eq!(e.digits, [0]);
}

#[test]
fn test_mul() {
    let a: BigInt = "12345678901234567890".parse().unwrap();
    let b: BigInt = "987654321321".parse().unwrap();
    assert_eq!((&a * &b).to_string(), "12193263116445816138422648982690");
    assert_eq!(&a * &b, &b * &a);
    assert_eq!(&a * &BigInt::from(1), a);
    assert_eq!(&a * &BigInt::default(), BigInt::default());

    let e: BigInt = "123456789012345678901234567890".parse().unwrap();
    let f: BigInt = "-987654321098765432109876543210".parse().unwrap();
    assert_eq!(
        (&e * &f).to_string(),
        "-121932631137021795226185032733622923332237463801111263526900"
    );
    assert_eq!(
        ((-&e) * f.clone()).to_string(),
        "121932631137021795226185032733622923332237463801111263526900"
    );
}

#[test]
fn test_div() {
    let a: BigInt = "12345678901234567890".parse().unwrap();
    let b: BigInt = "987654321321".parse().unwrap();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "12499999");
    assert_eq!(r.to_string(), "872376389211");
    assert_eq!(&(&q * &b) + &r, a);

    let c: BigInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".parse().unwrap();
    let d: BigInt = "526738495607659438721653478560954837265378495607".parse().unwrap();
    assert_eq!(
        (&c / &d).to_string(),
        "44532135147185277413589594536286141607822"
    );

    // dividend smaller than divisor
    let small: BigInt = "5".parse().unwrap();
    let big: BigInt = "100".parse().unwrap();
    assert_eq!((&small / &big).to_string(), "0");
    assert_eq!((small % big).to_string(), "5");
}

#[test]
fn test_mod() {
    let a: BigInt = "12".parse().unwrap();
    let b: BigInt = "8".parse().unwrap();
    assert_eq!((a % b).to_string(), "4");

    let a: BigInt = "10000000000000000".parse().unwrap();
    let b: BigInt = "10".parse().unwrap();
    assert_eq!(a % b, BigInt::default());

    let a: BigInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".parse().unwrap();
    let b: BigInt = "526738495607659438721653478560954837265378495607".parse().unwrap();
    assert_eq!(
        (a % b).to_string(),
        "393707270751296419349581795408095683999332705291"
    );
}

#[test]
fn test_truncated_division() {
    let cases = [
        (7, 2, 3, 1),
        (-7, 2, -3, -1),
        (7, -2, -3, 1),
        (-7, -2, 3, -1),
    ];
    for (x, y, q, r) in cases {
        let a = BigInt::from(x);
        let b = BigInt::from(y);
        assert_eq!(a.checked_div(&b).unwrap(), BigInt::from(q));
        assert_eq!(a.checked_rem(&b).unwrap(), BigInt::from(r));
    }
}

#[test]
fn test_div_mod_identity() {
    let a: BigInt = "12345678901234567890".parse().unwrap();
    let b: BigInt = "987654321321".parse().unwrap();
    for x in [a.clone(), -a.clone()] {
        for y in [b.clone(), -b.clone()] {
            let (q, r) = x.div_rem(&y).unwrap();
            assert_eq!(&(&q * &y) + &r, x);
            assert!(r.abs() < y.abs());
        }
    }
}

#[test]
fn test_div_by_zero() {
    for s in ["0", "5", "-5", "12345678901234567890"] {
        let a: BigInt = s.parse().unwrap();
        assert_eq!(
            a.checked_div(&BigInt::default()),
            Err(BigIntError::DivisionByZero)
        );
        assert_eq!(
            a.checked_rem(&BigInt::default()),
            Err(BigIntError::DivisionByZero)
        );
        assert!(a.div_rem(&BigInt::default()).is_err());
    }
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_zero_divisor() {
    let _ = BigInt::from(1) / BigInt::default();
}

#[test]
fn test_pow() {
    let two = BigInt::from(2);
    assert_eq!(two.pow(&BigInt::from(10)).unwrap().to_string(), "1024");
    assert_eq!(
        two.pow(&BigInt::from(100)).unwrap().to_string(),
        "1267650600228229401496703205376"
    );
    assert_eq!(BigInt::from(3).pow(&BigInt::from(7)).unwrap().to_string(), "2187");
    assert_eq!(
        BigInt::from(12).pow(&BigInt::from(34)).unwrap().to_string(),
        "4922235242952026704037113243122008064"
    );

    let x: BigInt = "-12345678901".parse().unwrap();
    assert_eq!(x.pow(&BigInt::from(3)).unwrap(), &(&x * &x) * &x);
    assert_eq!(x.pow(&BigInt::default()).unwrap(), BigInt::from(1));
    assert_eq!(BigInt::default().pow(&BigInt::default()).unwrap(), BigInt::from(1));
    assert_eq!(BigInt::default().pow(&BigInt::from(5)).unwrap(), BigInt::default());

    assert_eq!(x.pow(&BigInt::from(-1)), Err(BigIntError::InvalidExponent));
    let huge = BigInt::from(1_u64 << 40);
    assert_eq!(two.pow(&huge), Err(BigIntError::Overflow { target: "u32" }));
}

#[test]
fn test_to_native() {
    let max_u8: BigInt = "255".parse().unwrap();
    assert_eq!(u8::try_from(&max_u8), Ok(255));
    let over_u8: BigInt = "256".parse().unwrap();
    assert_eq!(u8::try_from(&over_u8), Err(BigIntError::Overflow { target: "u8" }));

    let max_u64: BigInt = "18446744073709551615".parse().unwrap();
    assert_eq!(u64::try_from(&max_u64), Ok(u64::MAX));
    let over_u64: BigInt = "18446744073709551616".parse().unwrap();
    assert!(u64::try_from(&over_u64).is_err());

    let min_i64: BigInt = "-9223372036854775808".parse().unwrap();
    assert_eq!(i64::try_from(&min_i64), Ok(i64::MIN));
    let under_i64: BigInt = "-9223372036854775809".parse().unwrap();
    assert_eq!(
        i64::try_from(&under_i64),
        Err(BigIntError::Overflow { target: "i64" })
    );

    assert_eq!(i8::try_from(BigInt::from(127)), Ok(127));
    assert_eq!(i8::try_from(BigInt::from(-128)), Ok(-128));
    assert!(i8::try_from(BigInt::from(128)).is_err());
    assert!(i8::try_from(BigInt::from(-129)).is_err());

    let neg: BigInt = "-1".parse().unwrap();
    assert_eq!(u32::try_from(&neg), Err(BigIntError::Overflow { target: "u32" }));
    assert_eq!(u16::try_from(BigInt::default()), Ok(0));
    assert_eq!(usize::try_from(BigInt::from(42)), Ok(42));
    assert_eq!(isize::try_from(BigInt::from(-42)), Ok(-42));
}

#[test]
fn test_assign_ops() {
    let mut a = BigInt::from(100);
    a += BigInt::from(20);
    a -= &BigInt::from(2);
    a *= BigInt::from(3);
    a /= &BigInt::from(5);
    a %= BigInt::from(50);
    assert_eq!(a.to_string(), "20");
}

#[test]
fn test_abs() {
    let a: BigInt = "-12345".parse().unwrap();
    assert_eq!(a.abs().to_string(), "12345");
    assert_eq!(a.abs(), (-a).abs());
    assert_eq!(BigInt::default().abs(), BigInt::default());
}
