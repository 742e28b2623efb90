// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Elimination of fractional exponents
//!
//! An equation `E = 0` in which a variable `x` appears with exponents that are multiples
//! of `1/n` (n = 2, 3, 4) is written as `C0 + C1*r + ... + C{n-1}*r^(n-1) = 0` with
//! `r = x^(1/n)` and `K = r^n = x`. Multiplying by the conjugates of that sum gives its
//! norm, a fixed polynomial in `C0..C{n-1}` and `K` free of `r`:
//! - n = 2: `C1^2*K - C0^2`
//! - n = 3: `C0^3 + C1^3*K + C2^3*K^2 - 3*C0*C1*C2*K`
//! - n = 4: `(C0^2 + C2^2*K - 2*C1*C3*K)^2 - K*(2*C0*C2 - C1^2 - C3^2*K)^2`
//!
//! Every root of `E` is a root of the norm.
use crate::symbolic::definition::Definition;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::term::Term;
use enum_dispatch::enum_dispatch;
use log::{debug, info, warn};

/// name of the radicand in the norm formulas
pub const RADICAND: &str = "K";
/// coefficient names `C0..C8` reserved by the formulas
pub const RESERVED_COEFFICIENTS: [&str; 9] = ["C0", "C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8"];

#[enum_dispatch]
pub trait FractionalExponentElimination {
    /// n, the root being removed
    fn root_degree(&self) -> u32;

    /// norm of `C0 + C1*r + ... + C{n-1}*r^(n-1)` with `r^n = K`
    fn formula(&self) -> Expression;

    /// Rewrites `expression = 0` into an equation with integral powers of `variable` only.
    fn eliminate(&self, expression: &Expression, variable: &str) -> AlgebraResult<Expression> {
        let n = self.root_degree();
        if let Some(name) = std::iter::once(RADICAND)
            .chain(RESERVED_COEFFICIENTS)
            .find(|name| expression.contains_variable(name))
        {
            return Err(AlgebraError::InvariantViolation(format!(
                "{} is reserved for radical elimination but occurs in {}",
                name, expression
            )));
        }
        if !expression.contains_variable(variable) {
            warn!("{} does not occur in {}", variable, expression);
        }
        let (_, cleared) = expression.eliminate_fractions();
        let buckets = split_by_root_power(&cleared, variable, n)?;
        let mut definitions = buckets
            .into_iter()
            .zip(RESERVED_COEFFICIENTS)
            .map(|(bucket, name)| Definition::new(name, bucket))
            .collect::<AlgebraResult<Vec<_>>>()?;
        definitions.push(Definition::new(RADICAND, Expression::variable(variable))?);
        for definition in &definitions {
            debug!("{}", definition);
        }
        let result = self.formula().substitute(&definitions)?;
        info!(
            "eliminated {}^(1/{}): {} terms, degree {}",
            variable,
            n,
            result.len(),
            result.get_degree(variable)
        );
        Ok(result)
    }
}

/// Groups the terms of `expression` by `(exponent * n) mod n`; the whole part of
/// `exponent` stays on `variable` as an integral power.
fn split_by_root_power(expression: &Expression, variable: &str, n: u32) -> AlgebraResult<Vec<Expression>> {
    let root = i64::from(n);
    let mut buckets = vec![Expression::zero(); n as usize];
    for (exponent, coefficient) in expression.factor(variable).iter() {
        let scaled = exponent
            .multiply(&Fraction::from(root))
            .long_value()
            .ok_or_else(|| {
                AlgebraError::illegal_substitution(format!(
                    "{}^{} is not a power of {}^(1/{})",
                    variable, exponent, variable, n
                ))
            })?;
        let power = Term::with_exponents(1, &[(variable, Fraction::from(scaled.div_euclid(root)))]);
        let slot = scaled.rem_euclid(root) as usize;
        buckets[slot] = buckets[slot].add(&coefficient.multiply_term(&power));
    }
    Ok(buckets)
}

fn power_product(coefficient: i64, powers: &[(&str, u32)]) -> Term {
    let names: Vec<&str> = powers
        .iter()
        .flat_map(|(name, k)| std::iter::repeat_n(*name, *k as usize))
        .collect();
    Term::new(coefficient, &names)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuadraticElimination;

impl FractionalExponentElimination for QuadraticElimination {
    fn root_degree(&self) -> u32 {
        2
    }

    fn formula(&self) -> Expression {
        Expression::new(vec![
            power_product(1, &[("C1", 2), (RADICAND, 1)]),
            power_product(-1, &[("C0", 2)]),
        ])
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CubicElimination;

impl FractionalExponentElimination for CubicElimination {
    fn root_degree(&self) -> u32 {
        3
    }

    fn formula(&self) -> Expression {
        Expression::new(vec![
            power_product(1, &[("C0", 3)]),
            power_product(1, &[("C1", 3), (RADICAND, 1)]),
            power_product(1, &[("C2", 3), (RADICAND, 2)]),
            power_product(-3, &[("C0", 1), ("C1", 1), ("C2", 1), (RADICAND, 1)]),
        ])
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuarticElimination;

impl FractionalExponentElimination for QuarticElimination {
    fn root_degree(&self) -> u32 {
        4
    }

    fn formula(&self) -> Expression {
        let even = Expression::new(vec![
            power_product(1, &[("C0", 2)]),
            power_product(1, &[("C2", 2), (RADICAND, 1)]),
            power_product(-2, &[("C1", 1), ("C3", 1), (RADICAND, 1)]),
        ]);
        let odd = Expression::new(vec![
            power_product(2, &[("C0", 1), ("C2", 1)]),
            power_product(-1, &[("C1", 2)]),
            power_product(-1, &[("C3", 2), (RADICAND, 1)]),
        ]);
        even.square()
            .subtract(&odd.square().multiply_term(&Term::variable(RADICAND)))
    }
}

#[enum_dispatch(FractionalExponentElimination)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadicalEliminator {
    Quadratic(QuadraticElimination),
    Cubic(CubicElimination),
    Quartic(QuarticElimination),
}

impl RadicalEliminator {
    /// eliminator for square (2), cube (3) or fourth (4) roots
    pub fn for_degree(n: u32) -> AlgebraResult<RadicalEliminator> {
        match n {
            2 => Ok(QuadraticElimination.into()),
            3 => Ok(CubicElimination.into()),
            4 => Ok(QuarticElimination.into()),
            _ => Err(AlgebraError::InvariantViolation(format!(
                "no radical elimination for roots of degree {}",
                n
            ))),
        }
    }
}
