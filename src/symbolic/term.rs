// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Term
//!
//! One monomial: a [`Fraction`] coefficient times a product of variables, each raised to a
//! (possibly negative or fractional) Fraction exponent. Variables are keyed by their
//! interned [`VarId`]; zero exponents are never stored, so two terms have the same
//! "signature" exactly when their exponent maps are equal.
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::symbolic_traits::{OutputFormat, SymbolicOutput};
use crate::symbolic::variable_interner::VarId;
use num::{BigInt, BigRational};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: Fraction,
    variables: BTreeMap<VarId, Fraction>,
}

impl Term {
    /// `coefficient * names[0] * names[1] * ...`; a repeated name raises its exponent
    pub fn new(coefficient: impl Into<Fraction>, names: &[&str]) -> Term {
        let mut variables: BTreeMap<VarId, Fraction> = BTreeMap::new();
        for name in names {
            let entry = variables.entry(VarId::of(name)).or_insert_with(Fraction::zero);
            *entry = entry.add(&Fraction::one());
        }
        Term::from_map(coefficient.into(), variables)
    }

    /// `coefficient * name_0^exponent_0 * ...` with explicit exponents
    pub fn with_exponents(coefficient: impl Into<Fraction>, powers: &[(&str, Fraction)]) -> Term {
        let mut variables: BTreeMap<VarId, Fraction> = BTreeMap::new();
        for (name, exponent) in powers {
            let entry = variables.entry(VarId::of(name)).or_insert_with(Fraction::zero);
            *entry = entry.add(exponent);
        }
        Term::from_map(coefficient.into(), variables)
    }

    pub fn constant(coefficient: impl Into<Fraction>) -> Term {
        Term::from_map(coefficient.into(), BTreeMap::new())
    }

    pub fn one() -> Term {
        Term::constant(Fraction::one())
    }

    pub fn variable(name: &str) -> Term {
        Term::new(1, &[name])
    }

    pub(crate) fn from_map(coefficient: Fraction, mut variables: BTreeMap<VarId, Fraction>) -> Term {
        variables.retain(|_, e| !e.is_zero());
        Term {
            coefficient,
            variables,
        }
    }

    //___________________________________INSPECTION____________________________________

    pub fn coefficient(&self) -> &Fraction {
        &self.coefficient
    }

    pub(crate) fn exponents(&self) -> &BTreeMap<VarId, Fraction> {
        &self.variables
    }

    /// variables and exponents, sorted by variable name
    pub fn variables(&self) -> Vec<(Arc<str>, Fraction)> {
        let mut named: Vec<(Arc<str>, Fraction)> = self
            .variables
            .iter()
            .map(|(id, e)| (id.name(), e.clone()))
            .collect();
        named.sort_by(|a, b| a.0.cmp(&b.0));
        named
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    pub fn contains(&self, name: &str) -> bool {
        VarId::lookup(name).is_some_and(|id| self.variables.contains_key(&id))
    }

    pub(crate) fn contains_id(&self, id: VarId) -> bool {
        self.variables.contains_key(&id)
    }

    /// exponent of `name`, zero when absent
    pub fn get_degree(&self, name: &str) -> Fraction {
        VarId::lookup(name)
            .map(|id| self.degree_of(id))
            .unwrap_or_else(Fraction::zero)
    }

    pub(crate) fn degree_of(&self, id: VarId) -> Fraction {
        self.variables.get(&id).cloned().unwrap_or_else(Fraction::zero)
    }

    /// same variables with the same exponents
    pub fn matches_variables(&self, other: &Term) -> bool {
        self.variables == other.variables
    }

    //___________________________________ARITHMETIC____________________________________

    /// sum of two variable-matching terms
    pub fn add(&self, other: &Term) -> AlgebraResult<Term> {
        if !self.matches_variables(other) {
            return Err(AlgebraError::VariableMismatch(format!(
                "cannot add {} and {}",
                self, other
            )));
        }
        Ok(self.merge(other))
    }

    /// coefficient sum of two terms already known to match
    pub(crate) fn merge(&self, other: &Term) -> Term {
        Term {
            coefficient: self.coefficient.add(&other.coefficient),
            variables: self.variables.clone(),
        }
    }

    pub fn multiply(&self, other: &Term) -> Term {
        let mut variables = self.variables.clone();
        for (id, e) in &other.variables {
            let entry = variables.entry(*id).or_insert_with(Fraction::zero);
            *entry = entry.add(e);
        }
        Term::from_map(self.coefficient.multiply(&other.coefficient), variables)
    }

    pub fn multiply_coefficient(&self, factor: &Fraction) -> Term {
        Term {
            coefficient: self.coefficient.multiply(factor),
            variables: self.variables.clone(),
        }
    }

    /// exponent-wise subtraction; fails only for a zero divisor
    pub fn divide_by(&self, other: &Term) -> AlgebraResult<Term> {
        Ok(self.multiply(&other.reciprocal()?))
    }

    pub fn reciprocal(&self) -> AlgebraResult<Term> {
        let variables = self
            .variables
            .iter()
            .map(|(id, e)| (*id, e.negate()))
            .collect();
        Ok(Term::from_map(self.coefficient.invert()?, variables))
    }

    pub fn negate(&self) -> Term {
        Term {
            coefficient: self.coefficient.negate(),
            variables: self.variables.clone(),
        }
    }

    /// the same variables with coefficient 1
    pub fn remove_coefficient(&self) -> Term {
        Term {
            coefficient: Fraction::one(),
            variables: self.variables.clone(),
        }
    }

    pub fn remove_variable(&self, name: &str) -> Term {
        match VarId::lookup(name) {
            Some(id) => self.remove_variable_id(id),
            None => self.clone(),
        }
    }

    pub(crate) fn remove_variable_id(&self, id: VarId) -> Term {
        let mut variables = self.variables.clone();
        variables.remove(&id);
        Term {
            coefficient: self.coefficient.clone(),
            variables,
        }
    }

    /// Multiplies every exponent by `power` and raises the coefficient exactly.
    /// Fails with Irrational/Imaginary when the coefficient has no exact root.
    pub fn raise_to_power(&self, power: &Fraction) -> AlgebraResult<Term> {
        if power.is_zero() {
            return Ok(Term::one());
        }
        let coefficient = self.coefficient.raise_to_fraction(power)?;
        let variables = self
            .variables
            .iter()
            .map(|(id, e)| (*id, e.multiply(power)))
            .collect();
        Ok(Term::from_map(coefficient, variables))
    }

    /// Per variable, the exponent shared by both terms when both exponents have the same
    /// sign (the smaller positive one, the larger negative one); the coefficient part is
    /// [`Fraction::get_common_elements`].
    pub fn get_common_elements(&self, other: &Term) -> Term {
        let mut variables = BTreeMap::new();
        for (id, e) in &self.variables {
            if let Some(f) = other.variables.get(id) {
                match (e.signum(), f.signum()) {
                    (1, 1) => {
                        variables.insert(*id, e.min(f).clone());
                    }
                    (-1, -1) => {
                        variables.insert(*id, e.max(f).clone());
                    }
                    _ => {}
                }
            }
        }
        Term::from_map(self.coefficient.get_common_elements(&other.coefficient), variables)
    }

    //___________________________________ORDERING____________________________________

    /// Order of variable signatures: number of variables first, then id and exponent
    /// pairwise. Coefficients are ignored.
    pub fn signature_cmp(&self, other: &Term) -> Ordering {
        self.variables
            .len()
            .cmp(&other.variables.len())
            .then_with(|| self.variables.iter().cmp(other.variables.iter()))
    }

    //___________________________________EVALUATION____________________________________

    fn value_of<'a, V>(&self, id: VarId, values: &'a HashMap<String, V>) -> AlgebraResult<&'a V> {
        let name = id.name();
        values
            .get(&*name)
            .ok_or_else(|| AlgebraError::MissingVariable(name.to_string()))
    }

    /// floating point value at the given variable values
    pub fn evaluate(&self, values: &HashMap<String, f64>) -> AlgebraResult<f64> {
        let mut result = self.coefficient.double_value();
        for (id, e) in &self.variables {
            let value = *self.value_of(*id, values)?;
            result *= match e.long_value().and_then(|p| i32::try_from(p).ok()) {
                Some(p) => value.powi(p),
                None => value.powf(e.double_value()),
            };
        }
        Ok(result)
    }

    /// exact value; every exponent must be an integer
    pub fn evaluate_rational(&self, values: &HashMap<String, BigRational>) -> AlgebraResult<BigRational> {
        let mut result = self.coefficient.to_big_rational();
        for (id, e) in &self.variables {
            let value = self.value_of(*id, values)?;
            let power = integral_exponent(e, id)?;
            if value.is_zero() && power < 0 {
                return Err(AlgebraError::DivisionByZero);
            }
            result *= value.pow(power);
        }
        Ok(result)
    }

    /// exact integer value; the coefficient must be an integer and every exponent a
    /// non-negative integer
    pub fn evaluate_integer(&self, values: &HashMap<String, BigInt>) -> AlgebraResult<BigInt> {
        let mut result = self.coefficient.big_integer_value().ok_or_else(|| {
            AlgebraError::NonInteger(format!("coefficient {} of {}", self.coefficient, self))
        })?;
        for (id, e) in &self.variables {
            let value = self.value_of(*id, values)?;
            let power = integral_exponent(e, id)?;
            let power = u32::try_from(power).map_err(|_| {
                AlgebraError::NonInteger(format!("negative exponent {} of {}", e, id.name()))
            })?;
            result *= value.pow(power);
        }
        Ok(result)
    }

    //___________________________________OUTPUT____________________________________

    /// text of the term without its leading sign
    pub(crate) fn unsigned_text(&self, format: OutputFormat) -> String {
        let magnitude = self.coefficient.abs();
        let numerator_value = magnitude.numerator();
        let denominator_value = magnitude.denominator();
        let named = self.variables();
        let mut numerator: Vec<String> = Vec::new();
        let mut denominator: Vec<String> = Vec::new();
        let has_numerator_variables = named.iter().any(|(_, e)| e.signum() > 0);
        if !numerator_value.is_one() || !has_numerator_variables {
            numerator.push(numerator_value.to_string());
        }
        if !denominator_value.is_one() {
            denominator.push(denominator_value.to_string());
        }
        for (name, exponent) in &named {
            if exponent.signum() > 0 {
                numerator.push(power_text(name, exponent, format));
            } else {
                denominator.push(power_text(name, &exponent.negate(), format));
            }
        }
        let separator = format.product_separator();
        let top = numerator.join(separator);
        if denominator.is_empty() {
            return top;
        }
        let bottom = denominator.join(separator);
        match format {
            OutputFormat::Plain if denominator.len() > 1 => format!("{}/({})", top, bottom),
            _ => format.fraction(&top, &bottom),
        }
    }
}

fn integral_exponent(exponent: &Fraction, id: &VarId) -> AlgebraResult<i32> {
    exponent
        .long_value()
        .and_then(|p| i32::try_from(p).ok())
        .ok_or_else(|| {
            AlgebraError::NonInteger(format!("exponent {} of {}", exponent, id.name()))
        })
}

/// `name`, `name^k` or `name^(p/q)`
pub(crate) fn power_text(name: &str, exponent: &Fraction, format: OutputFormat) -> String {
    if exponent.is_one() {
        name.to_string()
    } else if exponent.is_integer() {
        format.power(name, &exponent.to_string())
    } else {
        match format {
            OutputFormat::Plain => format!("{}^({})", name, exponent),
            OutputFormat::Latex => format.power(name, &exponent.to_latex()),
        }
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.signature_cmp(other)
            .then_with(|| self.coefficient.cmp(&other.coefficient))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SymbolicOutput for Term {
    fn write_formatted(&self, out: &mut dyn fmt::Write, format: OutputFormat) -> fmt::Result {
        if self.is_negative() {
            out.write_str("-")?;
        }
        out.write_str(&self.unsigned_text(format))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_formatted(f, OutputFormat::Plain)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Term({})", self)
    }
}

impl From<Fraction> for Term {
    fn from(value: Fraction) -> Self {
        Term::constant(value)
    }
}

//___________________________________TESTS____________________________________
