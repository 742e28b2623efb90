// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Factored expressions
//!
//! `FactoredExpression` keeps a product `coefficient * f_1^m_1 * f_2^m_2 * ...` without
//! expanding it; `FactoredExpressionSum` is a sum of such products. Both expand to a
//! plain [`Expression`] on demand.
//!
//! A zero coefficient or a zero factor collapses the product to the canonical zero
//! (coefficient 0, no factors). Constant integer factors are folded into the
//! coefficient.
use crate::symbolic::expression::Expression;
use crate::symbolic::expression_output::write_signed_pieces;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_traits::{OutputFormat, SymbolicOutput};
use num::BigInt;
use num::bigint::Sign;
use num_traits::{One, Signed, Zero};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactoredExpression {
    coefficient: BigInt,
    factors: BTreeMap<Expression, u32>,
}

impl FactoredExpression {
    /// `coefficient * factors[0] * factors[1] * ...`; repeated factors raise the multiplicity
    pub fn new(coefficient: impl Into<BigInt>, factors: &[Expression]) -> FactoredExpression {
        factors.iter().fold(
            FactoredExpression::constant(coefficient),
            |product, factor| product.with_factor(factor, 1),
        )
    }

    pub fn constant(coefficient: impl Into<BigInt>) -> FactoredExpression {
        FactoredExpression {
            coefficient: coefficient.into(),
            factors: BTreeMap::new(),
        }
    }

    pub fn zero() -> FactoredExpression {
        FactoredExpression::constant(0)
    }

    pub fn one() -> FactoredExpression {
        FactoredExpression::constant(1)
    }

    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// factors with their multiplicities, in expression order
    pub fn factors(&self) -> impl Iterator<Item = (&Expression, u32)> {
        self.factors.iter().map(|(f, m)| (f, *m))
    }

    pub fn multiplicity(&self, factor: &Expression) -> u32 {
        self.factors.get(factor).copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// `self * factor^multiplicity`
    pub fn with_factor(&self, factor: &Expression, multiplicity: u32) -> FactoredExpression {
        if self.is_zero() || multiplicity == 0 {
            return self.clone();
        }
        if factor.is_zero() {
            return FactoredExpression::zero();
        }
        if let Some(value) = integral_constant(factor) {
            return self.multiply_coefficient(&num::pow::pow(value, multiplicity as usize));
        }
        let mut result = self.clone();
        *result.factors.entry(factor.clone()).or_insert(0) += multiplicity;
        result
    }

    pub fn multiply_coefficient(&self, factor: &BigInt) -> FactoredExpression {
        if factor.is_zero() {
            return FactoredExpression::zero();
        }
        FactoredExpression {
            coefficient: &self.coefficient * factor,
            factors: self.factors.clone(),
        }
    }

    /// merges the factor multisets and multiplies the coefficients
    pub fn multiply(&self, other: &FactoredExpression) -> FactoredExpression {
        other
            .factors
            .iter()
            .fold(self.multiply_coefficient(&other.coefficient), |product, (f, m)| {
                product.with_factor(f, *m)
            })
    }

    pub fn negate(&self) -> FactoredExpression {
        FactoredExpression {
            coefficient: -&self.coefficient,
            factors: self.factors.clone(),
        }
    }

    /// the product multiplied out
    pub fn expand(&self) -> Expression {
        if self.is_zero() {
            return Expression::zero();
        }
        self.factors.iter().fold(
            Expression::constant(Fraction::from_integer(&self.coefficient)),
            |product, (factor, multiplicity)| product.multiply(&factor.raise_to(*multiplicity)),
        )
    }

    fn unsigned_text(&self, format: OutputFormat) -> String {
        let magnitude = self.coefficient.abs();
        let mut parts: Vec<String> = Vec::with_capacity(self.factors.len() + 1);
        if !magnitude.is_one() || self.factors.is_empty() {
            parts.push(magnitude.to_string());
        }
        for (factor, multiplicity) in &self.factors {
            let text = factor.to_formatted_string(format);
            let base = if needs_group(factor) {
                format.group(&text)
            } else {
                text
            };
            if *multiplicity == 1 {
                parts.push(base);
            } else {
                parts.push(format.power(&base, &multiplicity.to_string()));
            }
        }
        parts.join(format.product_separator())
    }
}

/// the value of a constant expression with an integral coefficient
fn integral_constant(factor: &Expression) -> Option<BigInt> {
    factor
        .single_term()
        .filter(|t| t.is_constant())
        .and_then(|t| t.coefficient().big_integer_value())
}

/// anything except a bare variable is bracketed
fn needs_group(factor: &Expression) -> bool {
    match factor.single_term() {
        Some(term) => {
            !(term.coefficient().is_one()
                && term.variables().len() == 1
                && term.variables().iter().all(|(_, e)| e.is_one()))
        }
        None => true,
    }
}

impl SymbolicOutput for FactoredExpression {
    fn write_formatted(&self, out: &mut dyn fmt::Write, format: OutputFormat) -> fmt::Result {
        write_signed_pieces(
            out,
            vec![(self.coefficient.sign() == Sign::Minus, self.unsigned_text(format))],
        )
    }
}

impl fmt::Display for FactoredExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_formatted(f, OutputFormat::Plain)
    }
}

impl fmt::Debug for FactoredExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FactoredExpression({})", self)
    }
}

impl From<Expression> for FactoredExpression {
    fn from(value: Expression) -> Self {
        FactoredExpression::new(1, &[value])
    }
}

//___________________________________SUM____________________________________

/// `p_1 + p_2 + ...` of factored products; zero products are dropped
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FactoredExpressionSum {
    summands: Vec<FactoredExpression>,
}

impl FactoredExpressionSum {
    pub fn new(summands: Vec<FactoredExpression>) -> FactoredExpressionSum {
        FactoredExpressionSum {
            summands: summands.into_iter().filter(|s| !s.is_zero()).collect(),
        }
    }

    pub fn summands(&self) -> &[FactoredExpression] {
        &self.summands
    }

    pub fn len(&self) -> usize {
        self.summands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summands.is_empty()
    }

    pub fn add(&self, summand: &FactoredExpression) -> FactoredExpressionSum {
        let mut summands = self.summands.clone();
        if !summand.is_zero() {
            summands.push(summand.clone());
        }
        FactoredExpressionSum { summands }
    }

    pub fn add_sum(&self, other: &FactoredExpressionSum) -> FactoredExpressionSum {
        let mut summands = self.summands.clone();
        summands.extend(other.summands.iter().cloned());
        FactoredExpressionSum { summands }
    }

    pub fn negate(&self) -> FactoredExpressionSum {
        FactoredExpressionSum {
            summands: self.summands.iter().map(FactoredExpression::negate).collect(),
        }
    }

    /// every summand of `self` times every summand of `other`, still factored
    pub fn multiply(&self, other: &FactoredExpressionSum) -> FactoredExpressionSum {
        FactoredExpressionSum::new(
            self.summands
                .iter()
                .flat_map(|a| other.summands.iter().map(move |b| a.multiply(b)))
                .collect(),
        )
    }

    /// Expands every summand (in parallel) and adds the results.
    pub fn expand(&self) -> Expression {
        self.summands
            .par_iter()
            .map(FactoredExpression::expand)
            .reduce(Expression::zero, |a, b| a.add(&b))
    }
}

impl SymbolicOutput for FactoredExpressionSum {
    fn write_formatted(&self, out: &mut dyn fmt::Write, format: OutputFormat) -> fmt::Result {
        let pieces = self
            .summands
            .iter()
            .map(|s| (s.coefficient.sign() == Sign::Minus, s.unsigned_text(format)))
            .collect();
        write_signed_pieces(out, pieces)
    }
}

impl fmt::Display for FactoredExpressionSum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_formatted(f, OutputFormat::Plain)
    }
}

impl fmt::Debug for FactoredExpressionSum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FactoredExpressionSum({})", self)
    }
}

//___________________________________TESTS____________________________________
