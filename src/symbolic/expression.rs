// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Expression
//!
//! A polynomial: an immutable sum of [`Term`]s where no two terms share a variable
//! signature and no term has a zero coefficient. The empty sum is 0.
//!
//! ## Main methods
//! - `new` - consolidates an arbitrary term list (sorting first above `SORT_THRESHOLD`)
//! - `add`, `subtract`, `multiply` (full distribution), `divide_by_*`, `raise_to`
//! - `eliminate_fractions` - clears fractional coefficients and negative powers at once
//! - `factor` - groups terms by the exponent of one variable
//! - `substitute` - see `expression_substitution.rs`
//! - text output - see `expression_output.rs`
//!
//! Equality and hashing ignore term order.
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::term::Term;
use crate::symbolic::variable_interner::VarId;
use log::debug;
use num::{BigInt, BigRational};
use num_traits::Zero;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::{Hash, Hasher};
use std::ops;

#[derive(Clone)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// above this many input terms, consolidation sorts instead of scanning
    pub const SORT_THRESHOLD: usize = 50;
    /// above this many partial products, `multiply` runs on the rayon pool
    pub const PARALLEL_PRODUCT_THRESHOLD: usize = 4096;

    //___________________________________CONSTRUCTION____________________________________

    /// Consolidates matching terms and drops zero ones. Below `SORT_THRESHOLD` the input
    /// order is kept.
    pub fn new(terms: Vec<Term>) -> Expression {
        Expression {
            terms: consolidate(terms),
        }
    }

    pub fn from_terms(terms: &[Term]) -> Expression {
        Expression::new(terms.to_vec())
    }

    /// terms that are known to be consolidated already
    pub(crate) fn from_consolidated(mut terms: Vec<Term>) -> Expression {
        terms.retain(|t| !t.is_zero());
        Expression { terms }
    }

    pub fn zero() -> Expression {
        Expression { terms: Vec::new() }
    }

    pub fn one() -> Expression {
        Expression::constant(1)
    }

    pub fn constant(value: impl Into<Fraction>) -> Expression {
        Expression::from_consolidated(vec![Term::constant(value)])
    }

    pub fn variable(name: &str) -> Expression {
        Expression::monomial(1, &[name])
    }

    /// single term `coefficient * names...`
    pub fn monomial(coefficient: impl Into<Fraction>, names: &[&str]) -> Expression {
        Expression::from_consolidated(vec![Term::new(coefficient, names)])
    }

    //___________________________________INSPECTION____________________________________

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// the only term, when there is exactly one
    pub fn single_term(&self) -> Option<&Term> {
        match self.terms.as_slice() {
            [term] => Some(term),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(Term::is_constant)
    }

    /// names of all variables, sorted
    pub fn variables(&self) -> BTreeSet<String> {
        self.terms
            .iter()
            .flat_map(|t| t.exponents().keys().map(|id| id.name().to_string()))
            .collect()
    }

    pub fn contains_variable(&self, name: &str) -> bool {
        VarId::lookup(name).is_some_and(|id| self.contains_id(id))
    }

    pub(crate) fn contains_id(&self, id: VarId) -> bool {
        self.terms.iter().any(|t| t.contains_id(id))
    }

    /// highest exponent of `name` (zero when absent)
    pub fn get_degree(&self, name: &str) -> Fraction {
        self.terms
            .iter()
            .map(|t| t.get_degree(name))
            .max()
            .unwrap_or_else(Fraction::zero)
    }

    /// Coefficient of the monomial with the signature of `pattern` (whose own
    /// coefficient is ignored). Fails when there is no such monomial.
    pub fn get_coefficient(&self, pattern: &Term) -> AlgebraResult<Fraction> {
        self.terms
            .iter()
            .find(|t| t.matches_variables(pattern))
            .map(|t| t.coefficient().clone())
            .ok_or_else(|| {
                AlgebraError::TermNotFound(format!(
                    "{} in {}",
                    pattern.remove_coefficient(),
                    self
                ))
            })
    }

    //___________________________________ADDITION____________________________________

    pub fn add_terms(&self, terms: &[Term]) -> Expression {
        let mut all = self.terms.clone();
        all.extend_from_slice(terms);
        Expression::new(all)
    }

    pub fn add(&self, other: &Expression) -> Expression {
        self.add_terms(&other.terms)
    }

    pub fn add_all(&self, others: &[Expression]) -> Expression {
        let mut all = self.terms.clone();
        for other in others {
            all.extend_from_slice(&other.terms);
        }
        Expression::new(all)
    }

    pub fn subtract(&self, other: &Expression) -> Expression {
        self.add(&other.negate())
    }

    pub fn negate(&self) -> Expression {
        Expression {
            terms: self.terms.iter().map(Term::negate).collect(),
        }
    }

    //___________________________________MULTIPLICATION____________________________________

    pub fn multiply_long(&self, factor: i64) -> Expression {
        self.multiply_fraction(&Fraction::from(factor))
    }

    pub fn multiply_fraction(&self, factor: &Fraction) -> Expression {
        if factor.is_zero() {
            return Expression::zero();
        }
        Expression {
            terms: self
                .terms
                .iter()
                .map(|t| t.multiply_coefficient(factor))
                .collect(),
        }
    }

    /// multiplying every term by the same monomial keeps signatures distinct
    pub fn multiply_term(&self, factor: &Term) -> Expression {
        if factor.is_zero() {
            return Expression::zero();
        }
        Expression {
            terms: self.terms.iter().map(|t| t.multiply(factor)).collect(),
        }
    }

    pub fn multiply_terms(&self, factors: &[Term]) -> Expression {
        factors
            .iter()
            .fold(self.clone(), |acc, factor| acc.multiply_term(factor))
    }

    /// full distribution of the product
    pub fn multiply(&self, other: &Expression) -> Expression {
        if self.is_zero() || other.is_zero() {
            return Expression::zero();
        }
        let products: Vec<Term> = if self.len() * other.len() > Self::PARALLEL_PRODUCT_THRESHOLD {
            debug!(
                "distributing {} x {} terms in parallel",
                self.len(),
                other.len()
            );
            self.terms
                .par_iter()
                .flat_map_iter(|a| other.terms.iter().map(move |b| a.multiply(b)))
                .collect()
        } else {
            self.terms
                .iter()
                .flat_map(|a| other.terms.iter().map(move |b| a.multiply(b)))
                .collect()
        };
        Expression::new(products)
    }

    pub fn square(&self) -> Expression {
        self.multiply(self)
    }

    pub fn cube(&self) -> Expression {
        self.square().multiply(self)
    }

    /// `self^n` by repeated squaring; `self^0 = 1`
    pub fn raise_to(&self, n: u32) -> Expression {
        let mut result = Expression::one();
        let mut base = self.clone();
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = result.multiply(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.square();
            }
        }
        result
    }

    //___________________________________DIVISION____________________________________

    pub fn divide_by_fraction(&self, divisor: &Fraction) -> AlgebraResult<Expression> {
        Ok(self.multiply_fraction(&divisor.invert()?))
    }

    pub fn divide_by_term(&self, divisor: &Term) -> AlgebraResult<Expression> {
        Ok(self.multiply_term(&divisor.reciprocal()?))
    }

    /// divides by the product of the named variables
    pub fn divide_by_variables(&self, names: &[&str]) -> Expression {
        let product = Term::new(1, names);
        let inverse = Term::from_map(
            Fraction::one(),
            product
                .exponents()
                .iter()
                .map(|(id, e)| (*id, e.negate()))
                .collect(),
        );
        self.multiply_term(&inverse)
    }

    /// Finds the least common denominator of all coefficients and the most negative
    /// exponent of every variable, and returns `(divisor, quotient)` with
    /// `self = divisor * quotient`, where the quotient has integral coefficients and no
    /// negative exponents.
    pub fn eliminate_fractions(&self) -> (Term, Expression) {
        // the running lcd is integral, so its reciprocal carries it as a denominator
        let lcd = self.terms.iter().fold(Fraction::one(), |lcd, t| {
            lcd.invert_nonzero().isolate_lcd(t.coefficient())
        });
        let mut lowest: BTreeMap<VarId, Fraction> = BTreeMap::new();
        for term in &self.terms {
            for (id, e) in term.exponents() {
                if e.is_negative() {
                    let entry = lowest.entry(*id).or_insert_with(Fraction::zero);
                    if *e < *entry {
                        *entry = e.clone();
                    }
                }
            }
        }
        let multiplier = Term::from_map(
            lcd.clone(),
            lowest.iter().map(|(id, e)| (*id, e.negate())).collect(),
        );
        let divisor = Term::from_map(lcd.invert_nonzero(), lowest);
        (divisor, self.multiply_term(&multiplier))
    }

    //___________________________________FACTORING____________________________________

    /// Groups the terms by their exponent of `name`, highest exponent first; each group
    /// holds the co-terms with `name` removed.
    pub fn factor(&self, name: &str) -> Factorization {
        let Some(id) = VarId::lookup(name) else {
            let buckets = if self.is_zero() {
                Vec::new()
            } else {
                vec![(Fraction::zero(), self.clone())]
            };
            return Factorization {
                variable: name.to_string(),
                buckets,
            };
        };
        let mut buckets: BTreeMap<Fraction, Vec<Term>> = BTreeMap::new();
        for term in &self.terms {
            buckets
                .entry(term.degree_of(id))
                .or_default()
                .push(term.remove_variable_id(id));
        }
        Factorization {
            variable: name.to_string(),
            buckets: buckets
                .into_iter()
                .rev()
                .map(|(exponent, terms)| (exponent, Expression::from_consolidated(terms)))
                .collect(),
        }
    }

    //___________________________________EVALUATION____________________________________

    pub fn evaluate(&self, values: &HashMap<String, f64>) -> AlgebraResult<f64> {
        self.terms
            .iter()
            .try_fold(0.0, |acc, t| Ok(acc + t.evaluate(values)?))
    }

    pub fn evaluate_rational(&self, values: &HashMap<String, BigRational>) -> AlgebraResult<BigRational> {
        self.terms
            .iter()
            .try_fold(BigRational::zero(), |acc, t| Ok(acc + t.evaluate_rational(values)?))
    }

    pub fn evaluate_integer(&self, values: &HashMap<String, BigInt>) -> AlgebraResult<BigInt> {
        self.terms
            .iter()
            .try_fold(BigInt::zero(), |acc, t| Ok(acc + t.evaluate_integer(values)?))
    }

    fn sorted_terms(&self) -> Vec<&Term> {
        let mut sorted: Vec<&Term> = self.terms.iter().collect();
        sorted.sort();
        sorted
    }
}

fn consolidate(terms: Vec<Term>) -> Vec<Term> {
    let mut result: Vec<Term> = Vec::with_capacity(terms.len());
    if terms.len() > Expression::SORT_THRESHOLD {
        debug!("consolidating {} terms by sorting", terms.len());
        let mut terms = terms;
        terms.sort_by(|a, b| a.signature_cmp(b));
        for term in terms {
            match result.last_mut() {
                Some(last) if last.matches_variables(&term) => *last = last.merge(&term),
                _ => result.push(term),
            }
        }
    } else {
        for term in terms {
            match result.iter_mut().find(|t| t.matches_variables(&term)) {
                Some(existing) => *existing = existing.merge(&term),
                None => result.push(term),
            }
        }
    }
    result.retain(|t| !t.is_zero());
    result
}

/// Result of [`Expression::factor`]: exponent -> coefficient expression, highest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Factorization {
    variable: String,
    buckets: Vec<(Fraction, Expression)>,
}

impl Factorization {
    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Fraction, &Expression)> {
        self.buckets.iter().map(|(e, c)| (e, c))
    }

    pub fn exponents(&self) -> impl Iterator<Item = &Fraction> {
        self.buckets.iter().map(|(e, _)| e)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// coefficient of `variable^exponent`; zero when there is none
    pub fn coefficient(&self, exponent: &Fraction) -> Expression {
        self.buckets
            .iter()
            .find(|(e, _)| e == exponent)
            .map(|(_, c)| c.clone())
            .unwrap_or_else(Expression::zero)
    }

    pub fn has_exponent(&self, exponent: &Fraction) -> bool {
        self.buckets.iter().any(|(e, _)| e == exponent)
    }

    pub fn degree(&self) -> Option<&Fraction> {
        self.buckets.first().map(|(e, _)| e)
    }

    pub fn leading_coefficient(&self) -> Option<&Expression> {
        self.buckets.first().map(|(_, c)| c)
    }

    /// `sum(coefficient_k * variable^k)`, the inverse of `factor`
    pub fn reassemble(&self) -> Expression {
        let parts: Vec<Expression> = self
            .buckets
            .iter()
            .map(|(e, c)| c.multiply_term(&Term::with_exponents(1, &[(self.variable.as_str(), e.clone())])))
            .collect();
        Expression::zero().add_all(&parts)
    }
}

//___________________________________TRAITS____________________________________

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len() && self.sorted_terms() == other.sorted_terms()
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for term in self.sorted_terms() {
            term.hash(state);
        }
    }
}

impl Ord for Expression {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sorted_terms().cmp(&other.sorted_terms())
    }
}

impl PartialOrd for Expression {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::new(vec![term])
    }
}

impl From<Fraction> for Expression {
    fn from(value: Fraction) -> Self {
        Expression::constant(value)
    }
}

impl ops::Add<&Expression> for &Expression {
    type Output = Expression;
    fn add(self, rhs: &Expression) -> Expression {
        Expression::add(self, rhs)
    }
}

impl ops::Sub<&Expression> for &Expression {
    type Output = Expression;
    fn sub(self, rhs: &Expression) -> Expression {
        self.subtract(rhs)
    }
}

impl ops::Mul<&Expression> for &Expression {
    type Output = Expression;
    fn mul(self, rhs: &Expression) -> Expression {
        self.multiply(rhs)
    }
}

impl ops::Neg for &Expression {
    type Output = Expression;
    fn neg(self) -> Expression {
        self.negate()
    }
}
