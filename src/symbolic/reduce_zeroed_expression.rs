// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Reduction of a zeroed equation `E = 0` by the factor all of its terms share.
use crate::symbolic::expression::Expression;
use crate::symbolic::term::Term;
use log::debug;

/// `E = 0` divided by the common part of every term: shared variables with their
/// smallest same-signed exponent and the shared prime powers of the coefficients.
/// Expressions with fewer than two terms are left alone.
#[derive(Clone, Debug)]
pub struct ReduceZeroedExpression {
    expression: Expression,
    divisor: Term,
    reduced: bool,
}

impl ReduceZeroedExpression {
    pub fn new(expression: &Expression) -> ReduceZeroedExpression {
        let unchanged = || ReduceZeroedExpression {
            expression: expression.clone(),
            divisor: Term::one(),
            reduced: false,
        };
        let Some((first, rest)) = expression.terms().split_first() else {
            return unchanged();
        };
        if rest.is_empty() {
            return unchanged();
        }
        let divisor = rest
            .iter()
            .fold(first.clone(), |common, term| common.get_common_elements(term));
        if divisor == Term::one() {
            return unchanged();
        }
        debug!("reducing {} by {}", expression, divisor);
        // the common coefficient is positive, so the inverse always exists
        let inverse = Term::from_map(
            divisor.coefficient().invert_nonzero(),
            divisor
                .exponents()
                .iter()
                .map(|(id, e)| (*id, e.negate()))
                .collect(),
        );
        ReduceZeroedExpression {
            expression: expression.multiply_term(&inverse),
            divisor,
            reduced: true,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// what the input was divided by (1 when nothing happened)
    pub fn divisor(&self) -> &Term {
        &self.divisor
    }

    pub fn is_reduced(&self) -> bool {
        self.reduced
    }
}
