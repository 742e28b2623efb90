// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::expression::Expression;
    use crate::symbolic::fraction::Fraction;
    use crate::symbolic::fractional_exponent_elimination::{
        FractionalExponentElimination, QuadraticElimination, RadicalEliminator,
    };
    use crate::symbolic::reduce_zeroed_expression::ReduceZeroedExpression;
    use crate::symbolic::symbolic_errors::AlgebraError;
    use crate::symbolic::term::Term;
    use crate::symbolic::tschirnhaus_transformation::TschirnhausTransformation;
    use crate::symbolic::vieta_substitution::VietaSubstitution;
    use approx::assert_relative_eq;
    use num::BigInt;
    use std::collections::HashMap;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::get(n, d).unwrap()
    }

    fn root_term(coefficient: i64, name: &str, exponent: Fraction) -> Term {
        Term::with_exponents(coefficient, &[(name, exponent)])
    }

    fn at(name: &str, value: i64) -> HashMap<String, BigInt> {
        [(name.to_string(), BigInt::from(value))].into_iter().collect()
    }

    //___________________________________TSCHIRNHAUS____________________________________

    #[test]
    fn test_tschirnhaus_quadratic() {
        // x^2 + 2*x + 5 with x = y - 1 gives y^2 + 4
        let e = Expression::new(vec![Term::new(1, &["x", "x"]), Term::new(2, &["x"]), Term::constant(5)]);
        let t = TschirnhausTransformation::new(&e, "x", "y").unwrap();
        assert_eq!(t.degree(), 2);
        assert_eq!(t.substitution().to_string(), "x = y - 1");
        assert!(!t.expression().factor("y").has_exponent(&Fraction::one()));
        assert_eq!(
            t.expression(),
            &Expression::new(vec![Term::new(1, &["y", "y"]), Term::constant(4)])
        );
    }

    #[test]
    fn test_tschirnhaus_cubic_with_leading_coefficient() {
        // 2*x^3 - 6*x^2 + 4*x + 1 -> y^3 - y + 1/2 with x = y + 1
        let e = Expression::new(vec![
            Term::new(2, &["x", "x", "x"]),
            Term::new(-6, &["x", "x"]),
            Term::new(4, &["x"]),
            Term::one(),
        ]);
        let t = TschirnhausTransformation::new(&e, "x", "y").unwrap();
        assert_eq!(t.substitution().to_string(), "x = y + 1");
        let expected = Expression::new(vec![
            Term::new(1, &["y", "y", "y"]),
            Term::new(-1, &["y"]),
            Term::constant(frac(1, 2)),
        ]);
        assert_eq!(t.expression(), &expected);
    }

    #[test]
    fn test_tschirnhaus_symbolic_coefficients() {
        // a*x^2 + b*x + c -> y^2 + c/a - b^2/(4*a^2)
        let e = Expression::new(vec![
            Term::new(1, &["a", "x", "x"]),
            Term::new(1, &["b", "x"]),
            Term::new(1, &["c"]),
        ]);
        let t = TschirnhausTransformation::new(&e, "x", "y").unwrap();
        let factorization = t.expression().factor("y");
        let exponents: Vec<Fraction> = factorization.exponents().cloned().collect();
        assert_eq!(exponents, vec![Fraction::from(2), Fraction::zero()]);
        assert_eq!(factorization.leading_coefficient(), Some(&Expression::one()));
        let point: HashMap<String, f64> = [("a", 2.0), ("b", 3.0), ("c", 1.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_relative_eq!(
            factorization.coefficient(&Fraction::zero()).evaluate(&point).unwrap(),
            -0.0625,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tschirnhaus_preconditions() {
        let sum_leading = Expression::new(vec![
            Term::new(1, &["a", "x", "x"]),
            Term::new(1, &["b", "x", "x"]),
            Term::new(1, &["x"]),
            Term::one(),
        ]);
        assert!(matches!(
            TschirnhausTransformation::new(&sum_leading, "x", "y"),
            Err(AlgebraError::IllegalSubstitution { .. })
        ));
        let uses_y = Expression::new(vec![Term::new(1, &["x", "x"]), Term::new(1, &["y"])]);
        assert!(matches!(
            TschirnhausTransformation::new(&uses_y, "x", "y"),
            Err(AlgebraError::IllegalSubstitution { .. })
        ));
        assert!(matches!(
            TschirnhausTransformation::new(&Expression::constant(3), "x", "y"),
            Err(AlgebraError::IllegalSubstitution { .. })
        ));
    }

    //___________________________________VIETA____________________________________

    #[test]
    fn test_vieta_cubic() {
        // x^3 + 3*x - 4 with x = w - 1/w gives w^6 - 4*w^3 - 1
        let e = Expression::new(vec![Term::new(1, &["x", "x", "x"]), Term::new(3, &["x"]), Term::constant(-4)]);
        let v = VietaSubstitution::new(&e, "x", "w").unwrap();
        assert_eq!(v.substitution().to_string(), "x = w - 1/w");
        let expected = Expression::new(vec![
            Term::with_exponents(1, &[("w", Fraction::from(6))]),
            Term::new(-4, &["w", "w", "w"]),
            Term::constant(-1),
        ]);
        assert_eq!(v.expression(), &expected);
        // w^3 = 2 + sqrt(5) leads back to the root x = 1
        let w = (2.0 + 5.0_f64.sqrt()).cbrt();
        assert_relative_eq!(w - 1.0 / w, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vieta_rejects_other_shapes() {
        let full = Expression::new(vec![Term::new(1, &["x", "x", "x"]), Term::new(1, &["x", "x"]), Term::one()]);
        assert!(matches!(
            VietaSubstitution::new(&full, "x", "w"),
            Err(AlgebraError::IllegalSubstitution { .. })
        ));
        let not_monic = Expression::new(vec![Term::new(2, &["x", "x", "x"]), Term::new(3, &["x"]), Term::one()]);
        assert!(matches!(
            VietaSubstitution::new(&not_monic, "x", "w"),
            Err(AlgebraError::IllegalSubstitution { .. })
        ));
    }

    #[test]
    fn test_depress_then_vieta() {
        // x^3 - 3*x^2 + 6*x - 4 = (x - 1)*(x^2 - 2*x + 4) is depressed to y^3 + 3*y,
        // whose Vieta form w^6 - 1 has w = 1 giving y = 0, x = 1
        let e = Expression::new(vec![
            Term::new(1, &["x", "x", "x"]),
            Term::new(-3, &["x", "x"]),
            Term::new(6, &["x"]),
            Term::constant(-4),
        ]);
        let depressed = TschirnhausTransformation::new(&e, "x", "y").unwrap();
        assert_eq!(
            depressed.expression(),
            &Expression::new(vec![Term::new(1, &["y", "y", "y"]), Term::new(3, &["y"])])
        );
        let vieta = VietaSubstitution::new(depressed.expression(), "y", "w").unwrap();
        assert_eq!(
            vieta.expression(),
            &Expression::new(vec![root_term(1, "w", Fraction::from(6)), Term::constant(-1)])
        );
    }

    //___________________________________RADICALS____________________________________

    #[test]
    fn test_quadratic_elimination() {
        // x^(1/2) + x - 6 -> x - (x - 6)^2 = -x^2 + 13*x - 36
        let e = Expression::new(vec![
            root_term(1, "x", frac(1, 2)),
            Term::variable("x"),
            Term::constant(-6),
        ]);
        let result = QuadraticElimination.eliminate(&e, "x").unwrap();
        let expected = Expression::new(vec![
            Term::new(-1, &["x", "x"]),
            Term::new(13, &["x"]),
            Term::constant(-36),
        ]);
        assert_eq!(result, expected);
        // x = 4 solves the radical equation, x = 9 solves its conjugate
        assert_eq!(result.evaluate_integer(&at("x", 4)).unwrap(), BigInt::from(0));
        assert_eq!(result.evaluate_integer(&at("x", 9)).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_quadratic_elimination_folds_whole_powers() {
        // y*x^(5/2) - 32 -> y^2*x^5 - 1024
        let e = Expression::new(vec![
            Term::with_exponents(1, &[("x", frac(5, 2)), ("y", Fraction::one())]),
            Term::constant(-32),
        ]);
        let result = RadicalEliminator::for_degree(2).unwrap().eliminate(&e, "x").unwrap();
        let expected = Expression::new(vec![
            Term::with_exponents(1, &[("x", Fraction::from(5)), ("y", Fraction::from(2))]),
            Term::constant(-1024),
        ]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_quadratic_elimination_clears_fractions() {
        // x^(1/2)/2 - 1/x = 0 holds at x = 4^(1/3); cleared to x^(3/2) - 2, then x^3 - 4
        let e = Expression::new(vec![
            Term::with_exponents(frac(1, 2), &[("x", frac(1, 2))]),
            Term::with_exponents(-1, &[("x", Fraction::from(-1))]),
        ]);
        let result = QuadraticElimination.eliminate(&e, "x").unwrap();
        let point: HashMap<String, f64> = [("x".to_string(), 4.0_f64.cbrt())].into_iter().collect();
        assert_relative_eq!(result.evaluate(&point).unwrap(), 0.0, epsilon = 1e-9);
        assert_eq!(
            result,
            Expression::new(vec![Term::new(1, &["x", "x", "x"]), Term::constant(-4)])
        );
    }

    #[test]
    fn test_cubic_elimination() {
        // x^(2/3) + x^(1/3) - 6 -> x^2 + 19*x - 216, zero at x = 8
        let e = Expression::new(vec![
            root_term(1, "x", frac(2, 3)),
            root_term(1, "x", frac(1, 3)),
            Term::constant(-6),
        ]);
        let eliminator = RadicalEliminator::for_degree(3).unwrap();
        assert_eq!(eliminator.root_degree(), 3);
        let result = eliminator.eliminate(&e, "x").unwrap();
        let expected = Expression::new(vec![
            Term::new(1, &["x", "x"]),
            Term::new(19, &["x"]),
            Term::constant(-216),
        ]);
        assert_eq!(result, expected);
        assert_eq!(result.evaluate_integer(&at("x", 8)).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_quartic_elimination() {
        // x^(3/4) + x^(1/2) - 12 vanishes at x = 16
        let e = Expression::new(vec![
            root_term(1, "x", frac(3, 4)),
            root_term(1, "x", frac(1, 2)),
            Term::constant(-12),
        ]);
        let result = RadicalEliminator::for_degree(4).unwrap().eliminate(&e, "x").unwrap();
        assert!(result.terms().iter().all(|t| t.get_degree("x").is_integer()));
        assert_eq!(result.get_degree("x"), Fraction::from(3));
        assert_eq!(result.evaluate_integer(&at("x", 16)).unwrap(), BigInt::from(0));
        // the eliminated form of x^(1/4) - 2 is 16 - x
        let simple = Expression::new(vec![root_term(1, "x", frac(1, 4)), Term::constant(-2)]);
        let result = RadicalEliminator::for_degree(4).unwrap().eliminate(&simple, "x").unwrap();
        assert_eq!(result, Expression::new(vec![Term::constant(16), Term::new(-1, &["x"])]));
    }

    #[test]
    fn test_radical_elimination_errors() {
        let cube_root = Expression::new(vec![root_term(1, "x", frac(1, 3)), Term::constant(-2)]);
        assert!(matches!(
            QuadraticElimination.eliminate(&cube_root, "x"),
            Err(AlgebraError::IllegalSubstitution { .. })
        ));
        let reserved = Expression::new(vec![root_term(1, "x", frac(1, 2)), Term::variable("C1")]);
        assert!(matches!(
            QuadraticElimination.eliminate(&reserved, "x"),
            Err(AlgebraError::InvariantViolation(_))
        ));
        let radicand = Expression::new(vec![root_term(1, "x", frac(1, 2)), Term::variable("K")]);
        assert!(matches!(
            QuadraticElimination.eliminate(&radicand, "x"),
            Err(AlgebraError::InvariantViolation(_))
        ));
        assert!(matches!(
            RadicalEliminator::for_degree(5),
            Err(AlgebraError::InvariantViolation(_))
        ));
    }

    //___________________________________REDUCTION____________________________________

    #[test]
    fn test_reduce_after_elimination() {
        // 2*x^(1/2)*y + 2*x*y = 2*x^(1/2)*y*(1 + x^(1/2))
        let e = Expression::new(vec![
            Term::with_exponents(2, &[("x", frac(1, 2)), ("y", Fraction::one())]),
            Term::new(2, &["x", "y"]),
        ]);
        let reduction = ReduceZeroedExpression::new(&e);
        assert!(reduction.is_reduced());
        assert_eq!(
            reduction.divisor(),
            &Term::with_exponents(2, &[("x", frac(1, 2)), ("y", Fraction::one())])
        );
        let result = QuadraticElimination.eliminate(reduction.expression(), "x").unwrap();
        assert_eq!(result, Expression::new(vec![Term::variable("x"), Term::constant(-1)]));
    }
}
