// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Exact rational numbers
//!
//! A [`Fraction`] is stored as a sign plus a sorted map prime -> signed exponent, so
//! `-45/4` is `-(2^-2 * 3^2 * 5)`. Zero is the empty map with no sign. The map never holds
//! a zero exponent, which makes the representation canonical: two Fractions are equal
//! exactly when their maps are equal.
//!
//! Products, quotients, powers and roots only touch exponents. Addition isolates the
//! common prime-power part of both operands first, so `(a*b) + (a*c)` is computed as
//! `a*(b + c)` and only the small integral remainders are ever added and refactored.
use crate::symbolic::primes;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::symbolic_traits::{OutputFormat, SymbolicOutput};
use num::bigint::{BigInt, BigUint, Sign};
use num::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;
use std::sync::OnceLock;

#[derive(Clone)]
pub struct Fraction {
    sign: Sign,
    factors: BTreeMap<BigUint, i64>,
    /// lazily computed `double_value`
    approximation: OnceLock<f64>,
}

impl Fraction {
    //___________________________________CONSTRUCTION____________________________________

    pub fn zero() -> Fraction {
        Fraction {
            sign: Sign::NoSign,
            factors: BTreeMap::new(),
            approximation: OnceLock::new(),
        }
    }

    pub fn one() -> Fraction {
        Fraction::from_parts(Sign::Plus, BTreeMap::new())
    }

    /// canonical value from a sign and a factor map (zero exponents are dropped)
    fn from_parts(sign: Sign, mut factors: BTreeMap<BigUint, i64>) -> Fraction {
        if sign == Sign::NoSign {
            return Fraction::zero();
        }
        factors.retain(|_, e| *e != 0);
        Fraction {
            sign,
            factors,
            approximation: OnceLock::new(),
        }
    }

    /// `numerator / denominator`; fails on a zero denominator
    pub fn get(numerator: i64, denominator: i64) -> AlgebraResult<Fraction> {
        Fraction::from_ratio(&BigInt::from(numerator), &BigInt::from(denominator))
    }

    pub fn from_ratio(numerator: &BigInt, denominator: &BigInt) -> AlgebraResult<Fraction> {
        if denominator.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        if numerator.is_zero() {
            return Ok(Fraction::zero());
        }
        let sign = numerator.sign() * denominator.sign();
        let mut factors = primes::factorize(numerator.magnitude());
        for (p, e) in primes::factorize(denominator.magnitude()) {
            *factors.entry(p).or_insert(0) -= e;
        }
        Ok(Fraction::from_parts(sign, factors))
    }

    pub fn from_integer(value: &BigInt) -> Fraction {
        if value.is_zero() {
            return Fraction::zero();
        }
        Fraction::from_parts(value.sign(), primes::factorize(value.magnitude()))
    }

    //___________________________________INSPECTION____________________________________

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    pub fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.factors.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i32 {
        match self.sign {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// true when no prime carries a negative exponent
    pub fn is_integer(&self) -> bool {
        self.factors.values().all(|&e| e >= 0)
    }

    /// the prime -> exponent map
    pub fn factors(&self) -> &BTreeMap<BigUint, i64> {
        &self.factors
    }

    /// signed numerator in lowest terms
    pub fn numerator(&self) -> BigInt {
        let magnitude = self
            .factors
            .iter()
            .filter(|(_, e)| **e > 0)
            .fold(BigUint::one(), |acc, (p, e)| acc * p.pow(*e as u32));
        BigInt::from_biguint(self.sign, magnitude)
    }

    /// positive denominator in lowest terms
    pub fn denominator(&self) -> BigInt {
        let magnitude = self
            .factors
            .iter()
            .filter(|(_, e)| **e < 0)
            .fold(BigUint::one(), |acc, (p, e)| acc * p.pow((-*e) as u32));
        BigInt::from(magnitude)
    }

    /// `None` unless the value is an integer that fits an `i64`
    pub fn long_value(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        self.numerator().to_i64()
    }

    /// `None` unless the value is an integer
    pub fn big_integer_value(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// lossy floating point value, computed once
    pub fn double_value(&self) -> f64 {
        *self
            .approximation
            .get_or_init(|| self.to_big_rational().to_f64().unwrap_or(f64::NAN))
    }

    pub fn to_big_rational(&self) -> BigRational {
        BigRational::new(self.numerator(), self.denominator())
    }

    //___________________________________ARITHMETIC____________________________________

    pub fn negate(&self) -> Fraction {
        Fraction {
            sign: -self.sign,
            factors: self.factors.clone(),
            approximation: OnceLock::new(),
        }
    }

    pub fn abs(&self) -> Fraction {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let common = self.common_factor(other);
        let sum = self.scaled_integer(&common) + other.scaled_integer(&common);
        if sum.is_zero() {
            return Fraction::zero();
        }
        let hints = self.factors.keys().chain(other.factors.keys());
        let mut factors = primes::factorize_with_hints(sum.magnitude(), hints);
        for (p, c) in common {
            *factors.entry(p).or_insert(0) += c;
        }
        Fraction::from_parts(sum.sign(), factors)
    }

    pub fn subtract(&self, other: &Fraction) -> Fraction {
        self.add(&other.negate())
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        if self.is_zero() || other.is_zero() {
            return Fraction::zero();
        }
        let mut factors = self.factors.clone();
        for (p, e) in &other.factors {
            *factors.entry(p.clone()).or_insert(0) += e;
        }
        Fraction::from_parts(self.sign * other.sign, factors)
    }

    pub fn invert(&self) -> AlgebraResult<Fraction> {
        if self.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.invert_nonzero())
    }

    /// `1/self` for a value already known to be non-zero; zero stays zero
    pub(crate) fn invert_nonzero(&self) -> Fraction {
        let factors = self.factors.iter().map(|(p, e)| (p.clone(), -e)).collect();
        Fraction::from_parts(self.sign, factors)
    }

    pub fn divide_by(&self, other: &Fraction) -> AlgebraResult<Fraction> {
        Ok(self.multiply(&other.invert()?))
    }

    /// integral power; negative exponents invert, `x^0 = 1`
    pub fn raise_to_power(&self, exponent: i64) -> AlgebraResult<Fraction> {
        if exponent == 0 {
            return Ok(Fraction::one());
        }
        if self.is_zero() {
            return if exponent < 0 {
                Err(AlgebraError::DivisionByZero)
            } else {
                Ok(Fraction::zero())
            };
        }
        let sign = if self.is_negative() && exponent % 2 != 0 {
            Sign::Minus
        } else {
            Sign::Plus
        };
        let factors = self
            .factors
            .iter()
            .map(|(p, e)| e.checked_mul(exponent).map(|e| (p.clone(), e)))
            .collect::<Option<BTreeMap<BigUint, i64>>>()
            .ok_or_else(|| {
                AlgebraError::InvariantViolation(format!(
                    "prime exponent overflow raising {} to {}",
                    self, exponent
                ))
            })?;
        Ok(Fraction::from_parts(sign, factors))
    }

    /// exact `n`-th root
    pub fn get_root(&self, n: u32) -> AlgebraResult<Fraction> {
        if n == 0 {
            return Err(AlgebraError::InvariantViolation(
                "the zeroth root is undefined".to_string(),
            ));
        }
        if n == 1 || self.is_zero() {
            return Ok(self.clone());
        }
        if self.is_negative() && n % 2 == 0 {
            return Err(AlgebraError::Imaginary(format!("root {} of {}", n, self)));
        }
        let degree = n as i64;
        if self.factors.values().any(|e| e % degree != 0) {
            return Err(AlgebraError::Irrational(format!("root {} of {}", n, self)));
        }
        let factors = self
            .factors
            .iter()
            .map(|(p, e)| (p.clone(), e / degree))
            .collect();
        Ok(Fraction::from_parts(self.sign, factors))
    }

    /// `self^(p/q)` computed as the `q`-th root raised to `p`
    pub fn raise_to_fraction(&self, exponent: &Fraction) -> AlgebraResult<Fraction> {
        let numerator = exponent.numerator().to_i64().ok_or_else(|| {
            AlgebraError::Irrational(format!("exponent {} is out of range", exponent))
        })?;
        if exponent.is_integer() {
            return self.raise_to_power(numerator);
        }
        let root = exponent.denominator().to_u32().ok_or_else(|| {
            AlgebraError::Irrational(format!("exponent {} is out of range", exponent))
        })?;
        self.get_root(root)?.raise_to_power(numerator)
    }

    //___________________________________DECOMPOSITION____________________________________

    /// signed numerator as a Fraction
    pub fn isolate_numerator(&self) -> Fraction {
        let factors = self
            .factors
            .iter()
            .filter(|(_, e)| **e > 0)
            .map(|(p, e)| (p.clone(), *e))
            .collect();
        Fraction::from_parts(self.sign, factors)
    }

    /// positive denominator as an integral Fraction
    pub fn isolate_denominator(&self) -> Fraction {
        if self.is_zero() {
            return Fraction::one();
        }
        Fraction::from_parts(Sign::Plus, self.denominator_exponents())
    }

    /// least common denominator of `self` and `other`
    pub fn isolate_lcd(&self, other: &Fraction) -> Fraction {
        let mut lcd = self.denominator_exponents();
        for (p, e) in other.denominator_exponents() {
            let entry = lcd.entry(p).or_insert(0);
            *entry = (*entry).max(e);
        }
        Fraction::from_parts(Sign::Plus, lcd)
    }

    /// greatest common divisor of the two denominators
    pub fn isolate_common_denominator(&self, other: &Fraction) -> Fraction {
        let theirs = other.denominator_exponents();
        let common = self
            .denominator_exponents()
            .into_iter()
            .filter_map(|(p, e)| theirs.get(&p).map(|f| (p.clone(), e.min(*f))))
            .collect();
        Fraction::from_parts(Sign::Plus, common)
    }

    /// Positive factor shared by both values: primes present in both with exponents of
    /// the same sign, taking the exponent closer to zero.
    pub fn get_common_elements(&self, other: &Fraction) -> Fraction {
        let mut common = BTreeMap::new();
        for (p, &e) in &self.factors {
            if let Some(&f) = other.factors.get(p) {
                if e > 0 && f > 0 {
                    common.insert(p.clone(), e.min(f));
                } else if e < 0 && f < 0 {
                    common.insert(p.clone(), e.max(f));
                }
            }
        }
        Fraction::from_parts(Sign::Plus, common)
    }

    fn denominator_exponents(&self) -> BTreeMap<BigUint, i64> {
        self.factors
            .iter()
            .filter(|(_, e)| **e < 0)
            .map(|(p, e)| (p.clone(), -*e))
            .collect()
    }

    /// greatest prime-power factor dividing both (absent primes count as exponent 0)
    fn common_factor(&self, other: &Fraction) -> BTreeMap<BigUint, i64> {
        let mut common = BTreeMap::new();
        for (p, &e) in &self.factors {
            let m = e.min(other.factors.get(p).copied().unwrap_or(0));
            if m != 0 {
                common.insert(p.clone(), m);
            }
        }
        for (p, &f) in &other.factors {
            if f < 0 && !self.factors.contains_key(p) {
                common.insert(p.clone(), f);
            }
        }
        common
    }

    /// `self / common` as a signed integer; every exponent left over is non-negative
    fn scaled_integer(&self, common: &BTreeMap<BigUint, i64>) -> BigInt {
        let mut magnitude = BigUint::one();
        for (p, &e) in &self.factors {
            let c = common.get(p).copied().unwrap_or(0);
            magnitude *= p.pow((e - c) as u32);
        }
        for (p, &c) in common {
            if !self.factors.contains_key(p) {
                magnitude *= p.pow((-c) as u32);
            }
        }
        BigInt::from_biguint(self.sign, magnitude)
    }
}

//___________________________________TRAITS____________________________________

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.factors == other.factors
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.factors.hash(state);
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        let (a, b) = (self.signum(), other.signum());
        if a != b || a == 0 {
            return a.cmp(&b);
        }
        let common = self.common_factor(other);
        self.scaled_integer(&common)
            .cmp(&other.scaled_integer(&common))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::from_integer(&BigInt::from(value))
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Fraction::from_integer(&BigInt::from(value))
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::from_integer(&value)
    }
}

impl From<&Fraction> for Fraction {
    fn from(value: &Fraction) -> Self {
        value.clone()
    }
}

impl SymbolicOutput for Fraction {
    fn write_formatted(&self, out: &mut dyn fmt::Write, format: OutputFormat) -> fmt::Result {
        if self.is_integer() {
            return write!(out, "{}", self.numerator());
        }
        if self.is_negative() {
            out.write_str("-")?;
        }
        let numerator = self.numerator().abs().to_string();
        let denominator = self.denominator().to_string();
        out.write_str(&format.fraction(&numerator, &denominator))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_formatted(f, OutputFormat::Plain)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Fraction({})", self)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        self.negate()
    }
}

impl ops::Neg for &Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        self.negate()
    }
}

// only borrowed operands: an owned impl would shadow the inherent `add`/`multiply`
// in method-call position
macro_rules! fraction_binary_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl ops::$trait<&Fraction> for &Fraction {
            type Output = Fraction;
            fn $method(self, rhs: &Fraction) -> Fraction {
                Fraction::$inherent(self, rhs)
            }
        }
    };
}

fraction_binary_op!(Add, add, add);
fraction_binary_op!(Sub, sub, subtract);
fraction_binary_op!(Mul, mul, multiply);
