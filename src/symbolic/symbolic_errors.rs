// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Error kinds of the exact algebra engine.
//!
//! Ordinary arithmetic (add, multiply, negate) never fails. Everything that can hit an
//! algebraic impossibility returns [`AlgebraResult`].
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// dividing by a zero Fraction/Term, inverting zero or a zero denominator
    #[error("division by zero")]
    DivisionByZero,
    /// a root or power that has no exact rational value
    #[error("irrational result: {0}")]
    Irrational(String),
    /// an even root of a negative value
    #[error("imaginary result: {0}")]
    Imaginary(String),
    #[error("illegal substitution: {reason}")]
    IllegalSubstitution {
        reason: String,
        #[source]
        cause: Option<Box<AlgebraError>>,
    },
    #[error("no value given for variable `{0}`")]
    MissingVariable(String),
    #[error("non-integer value: {0}")]
    NonInteger(String),
    /// adding two terms with different variable signatures
    #[error("variable mismatch: {0}")]
    VariableMismatch(String),
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    #[error("term not found: {0}")]
    TermNotFound(String),
}

impl AlgebraError {
    pub fn illegal_substitution(reason: impl Into<String>) -> Self {
        AlgebraError::IllegalSubstitution {
            reason: reason.into(),
            cause: None,
        }
    }

    /// wraps a failure met in the middle of a substitution
    pub fn substitution_failed(reason: impl Into<String>, cause: AlgebraError) -> Self {
        AlgebraError::IllegalSubstitution {
            reason: reason.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// true for the two "no exact value" kinds
    pub fn is_inexact(&self) -> bool {
        matches!(self, AlgebraError::Irrational(_) | AlgebraError::Imaginary(_))
    }
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;
