// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Depressing a polynomial: `x = y - a_{n-1}/n` removes the `y^{n-1}` term of a monic
//! polynomial of degree `n`.
use crate::symbolic::definition::Definition;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use log::{info, warn};

#[derive(Clone, Debug)]
pub struct TschirnhausTransformation {
    expression: Expression,
    substitution: Definition,
    degree: i64,
}

impl TschirnhausTransformation {
    /// Transforms the zeroed equation `expression = 0` in `variable_to_remove` into an
    /// equation in `new_variable` without the second-highest power. The leading
    /// coefficient must be a single term; it is divided out first.
    pub fn new(
        expression: &Expression,
        variable_to_remove: &str,
        new_variable: &str,
    ) -> AlgebraResult<TschirnhausTransformation> {
        if new_variable == variable_to_remove || expression.contains_variable(new_variable) {
            return Err(AlgebraError::illegal_substitution(format!(
                "{} already occurs in {}",
                new_variable, expression
            )));
        }
        let factorization = expression.factor(variable_to_remove);
        let degree = factorization
            .degree()
            .and_then(Fraction::long_value)
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                AlgebraError::illegal_substitution(format!(
                    "{} is not a polynomial of positive degree in {}",
                    expression, variable_to_remove
                ))
            })?;
        let leading = factorization
            .leading_coefficient()
            .and_then(Expression::single_term)
            .ok_or_else(|| {
                AlgebraError::illegal_substitution(format!(
                    "the leading coefficient of {} in {} is not a single term",
                    expression, variable_to_remove
                ))
            })?;
        let monic = expression.divide_by_term(leading)?;
        let second = monic
            .factor(variable_to_remove)
            .coefficient(&Fraction::from(degree - 1));
        if second.is_zero() {
            warn!(
                "{} is already depressed in {}",
                expression, variable_to_remove
            );
        }
        let shift = second.divide_by_fraction(&Fraction::from(degree))?;
        let substitution = Definition::new(
            variable_to_remove,
            Expression::variable(new_variable).subtract(&shift),
        )?;
        let transformed = monic.substitute(std::slice::from_ref(&substitution))?;
        info!(
            "Tschirnhaus transformation of degree {}: {}",
            degree, substitution
        );
        Ok(TschirnhausTransformation {
            expression: transformed,
            substitution,
            degree,
        })
    }

    /// the depressed equation in the new variable
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn substitution(&self) -> &Definition {
        &self.substitution
    }

    pub fn degree(&self) -> i64 {
        self.degree
    }
}
