// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Vieta's substitution `x = w - p/(3w)` for a depressed cubic `x^3 + p*x + q`. After
//! clearing the negative powers of `w` the result is a quadratic in `w^3`.
use crate::symbolic::definition::Definition;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::term::Term;
use log::info;

#[derive(Clone, Debug)]
pub struct VietaSubstitution {
    expression: Expression,
    substitution: Definition,
}

impl VietaSubstitution {
    /// `expression` must be exactly `x^3 + p*x (+ q)` in `variable_to_remove`, with a
    /// leading coefficient of 1 and a non-zero `p`.
    pub fn new(
        expression: &Expression,
        variable_to_remove: &str,
        new_variable: &str,
    ) -> AlgebraResult<VietaSubstitution> {
        if new_variable == variable_to_remove || expression.contains_variable(new_variable) {
            return Err(AlgebraError::illegal_substitution(format!(
                "{} already occurs in {}",
                new_variable, expression
            )));
        }
        let factorization = expression.factor(variable_to_remove);
        let (zero, one, three) = (Fraction::zero(), Fraction::one(), Fraction::from(3));
        let depressed_cubic = factorization.has_exponent(&three)
            && factorization.has_exponent(&one)
            && factorization
                .exponents()
                .all(|e| *e == three || *e == one || *e == zero);
        if !depressed_cubic {
            return Err(AlgebraError::illegal_substitution(format!(
                "{} is not of the form {}^3 + p*{} + q",
                expression, variable_to_remove, variable_to_remove
            )));
        }
        if factorization.coefficient(&three) != Expression::one() {
            return Err(AlgebraError::illegal_substitution(format!(
                "{} is not monic in {}",
                expression, variable_to_remove
            )));
        }
        let p = factorization.coefficient(&one);
        // p/(3w)
        let correction = p.multiply_term(&Term::with_exponents(
            Fraction::get(1, 3)?,
            &[(new_variable, Fraction::from(-1))],
        ));
        let substitution = Definition::new(
            variable_to_remove,
            Expression::variable(new_variable).subtract(&correction),
        )?;
        let substituted = expression.substitute(std::slice::from_ref(&substitution))?;
        let (_, cleared) = substituted.eliminate_fractions();
        info!("Vieta substitution {}", substitution);
        Ok(VietaSubstitution {
            expression: cleared,
            substitution,
        })
    }

    /// the equation in the new variable, free of negative powers
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn substitution(&self) -> &Definition {
        &self.substitution
    }
}
