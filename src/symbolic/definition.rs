// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Named bindings `variable = expression` used by [`Expression::substitute`], and the
//! [`CoefficientSubstitution`] helper that replaces the coefficients of a polynomial by
//! fresh named variables.
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::symbolic_traits::{OutputFormat, SymbolicOutput};
use crate::symbolic::term::Term;
use crate::symbolic::variable_interner::VarId;
use std::collections::BTreeSet;
use std::fmt;

/// `variable = expression`, where the expression never mentions the variable itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Definition {
    variable: String,
    expression: Expression,
}

impl Definition {
    pub fn new(variable: &str, expression: Expression) -> AlgebraResult<Definition> {
        if expression.contains_variable(variable) {
            return Err(AlgebraError::InvariantViolation(format!(
                "{} cannot be defined in terms of itself: {} = {}",
                variable, variable, expression
            )));
        }
        Ok(Definition {
            variable: variable.to_string(),
            expression,
        })
    }

    /// `variable = value`
    pub fn constant(variable: &str, value: impl Into<Fraction>) -> Definition {
        Definition {
            variable: variable.to_string(),
            expression: Expression::constant(value),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub(crate) fn id(&self) -> VarId {
        VarId::of(&self.variable)
    }
}

impl SymbolicOutput for Definition {
    fn write_formatted(&self, out: &mut dyn fmt::Write, format: OutputFormat) -> fmt::Result {
        write!(out, "{} = ", self.variable)?;
        self.expression.write_formatted(out, format)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_formatted(f, OutputFormat::Plain)
    }
}

/// Factors an expression by a variable and names every non-zero coefficient
/// `prefix_{1}`, `prefix_{2}`, ... (highest power first), which keeps large generated
/// formulas readable.
#[derive(Clone, Debug)]
pub struct CoefficientSubstitution {
    expression: Expression,
    definitions: BTreeSet<Definition>,
}

impl CoefficientSubstitution {
    pub fn new(expression: &Expression, variable: &str, prefix: &str) -> AlgebraResult<Self> {
        let factorization = expression.factor(variable);
        let mut parts = Vec::with_capacity(factorization.len());
        let mut definitions = BTreeSet::new();
        for (index, (exponent, coefficient)) in factorization.iter().enumerate() {
            let name = format!("{}_{{{}}}", prefix, index + 1);
            if name == variable || expression.contains_variable(&name) {
                return Err(AlgebraError::InvariantViolation(format!(
                    "coefficient name {} is already used in {}",
                    name, expression
                )));
            }
            definitions.insert(Definition::new(&name, coefficient.clone())?);
            parts.push(Term::with_exponents(
                1,
                &[(name.as_str(), Fraction::one()), (variable, exponent.clone())],
            ));
        }
        Ok(CoefficientSubstitution {
            expression: Expression::new(parts),
            definitions,
        })
    }

    /// the polynomial with named coefficients
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn definitions(&self) -> &BTreeSet<Definition> {
        &self.definitions
    }
}
