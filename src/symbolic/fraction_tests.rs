// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::fraction::Fraction;
    use crate::symbolic::symbolic_errors::AlgebraError;
    use crate::symbolic::symbolic_traits::{OutputFormat, SymbolicOutput};
    use approx::assert_relative_eq;
    use num::BigInt;
    use rand::Rng;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::get(n, d).unwrap()
    }

    #[test]
    fn test_half_plus_third() {
        assert_eq!(frac(1, 2).add(&frac(1, 3)), frac(5, 6));
        assert_eq!(frac(1, 2).subtract(&frac(1, 3)), frac(1, 6));
        assert_eq!(&frac(1, 2) + &frac(1, 2), Fraction::one());
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(frac(6, 8), frac(3, 4));
        assert_eq!(frac(-6, -8), frac(3, 4));
        assert_eq!(frac(6, -8), frac(-3, 4));
        assert_eq!(frac(0, 5), Fraction::zero());
        assert!(frac(0, -5).factors().is_empty());
        assert_eq!(frac(12, 1).factors().len(), 2);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Fraction::get(1, 0), Err(AlgebraError::DivisionByZero));
        assert_eq!(Fraction::zero().invert(), Err(AlgebraError::DivisionByZero));
        assert_eq!(
            frac(3, 2).divide_by(&Fraction::zero()),
            Err(AlgebraError::DivisionByZero)
        );
        assert_eq!(
            Fraction::zero().raise_to_power(-2),
            Err(AlgebraError::DivisionByZero)
        );
    }

    #[test]
    fn test_roots() {
        assert!(matches!(
            Fraction::from(-1).get_root(2),
            Err(AlgebraError::Imaginary(_))
        ));
        assert!(matches!(
            Fraction::from(2).get_root(3),
            Err(AlgebraError::Irrational(_))
        ));
        assert_eq!(frac(-8, 27).get_root(3).unwrap(), frac(-2, 3));
        assert_eq!(frac(16, 81).get_root(4).unwrap(), frac(2, 3));
        assert_eq!(Fraction::zero().get_root(2).unwrap(), Fraction::zero());
        let three_halves = frac(3, 2);
        assert_eq!(frac(4, 9).raise_to_fraction(&three_halves).unwrap(), frac(8, 27));
        assert_eq!(
            frac(4, 9).raise_to_fraction(&frac(-1, 2)).unwrap(),
            frac(3, 2)
        );
        assert!(matches!(
            frac(2, 9).raise_to_fraction(&frac(1, 2)),
            Err(AlgebraError::Irrational(_))
        ));
    }

    #[test]
    fn test_integer_powers() {
        assert_eq!(frac(-2, 3).raise_to_power(3).unwrap(), frac(-8, 27));
        assert_eq!(frac(-2, 3).raise_to_power(-2).unwrap(), frac(9, 4));
        assert_eq!(frac(7, 3).raise_to_power(0).unwrap(), Fraction::one());
        // 4 = 2^2, so the prime exponent 2 * i64::MAX does not fit
        assert!(matches!(
            Fraction::from(4).raise_to_power(i64::MAX),
            Err(AlgebraError::InvariantViolation(_))
        ));
        assert!(matches!(
            frac(1, 9).raise_to_power(i64::MIN),
            Err(AlgebraError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_exactness_beyond_machine_words() {
        // a, b, c chosen so that every product overflows i64
        let a = BigInt::parse_bytes(b"98765432109876543210", 10).unwrap();
        let b = BigInt::parse_bytes(b"12345678901234567890", 10).unwrap();
        let c = BigInt::from(1_000_000_007i64) * BigInt::from(998_244_353i64);
        let lhs = Fraction::from_ratio(&a, &c)
            .unwrap()
            .add(&Fraction::from_ratio(&b, &c).unwrap());
        let rhs = Fraction::from_ratio(&(&a + &b), &c).unwrap();
        assert_eq!(lhs, rhs);
        let square = Fraction::from_integer(&a).multiply(&Fraction::from_integer(&a));
        assert_eq!(square.big_integer_value(), Some(&a * &a));
        assert_eq!(square.long_value(), None);
    }

    #[test]
    fn test_random_field_laws() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let f = frac(rng.random_range(-500..500), rng.random_range(1..500));
            let g = frac(rng.random_range(-500..500), rng.random_range(1..500));
            let h = frac(rng.random_range(-500..500), rng.random_range(1..500));
            assert_eq!(f.add(&g), g.add(&f));
            assert_eq!(f.multiply(&g), g.multiply(&f));
            assert_eq!(f.add(&g).add(&h), f.add(&g.add(&h)));
            assert_eq!(f.multiply(&g).multiply(&h), f.multiply(&g.multiply(&h)));
            assert!(f.add(&f.negate()).is_zero());
            if !f.is_zero() {
                assert!(f.multiply(&f.invert().unwrap()).is_one());
            }
            // ordering agrees with the floating point approximation
            if f.double_value() < g.double_value() {
                assert!(f < g);
            }
        }
    }

    #[test]
    fn test_comparison() {
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(-1, 3));
        assert!(frac(-1, 2) < Fraction::zero());
        assert!(frac(10, 3) > Fraction::from(3));
        let mut values = vec![frac(3, 2), frac(-7, 5), Fraction::zero(), frac(1, 9)];
        values.sort();
        assert_eq!(
            values,
            vec![frac(-7, 5), Fraction::zero(), frac(1, 9), frac(3, 2)]
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Fraction::from(-42).long_value(), Some(-42));
        assert_eq!(frac(1, 2).long_value(), None);
        assert_eq!(frac(1, 2).big_integer_value(), None);
        assert!(frac(4, 2).is_integer());
        assert_relative_eq!(frac(1, 3).double_value(), 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(frac(-22, 7).double_value(), -22.0 / 7.0, epsilon = 1e-15);
    }

    #[test]
    fn test_decomposition() {
        let f = frac(-9, 20);
        assert_eq!(f.isolate_numerator(), Fraction::from(-9));
        assert_eq!(f.isolate_denominator(), Fraction::from(20));
        assert_eq!(frac(1, 4).isolate_lcd(&frac(1, 6)), Fraction::from(12));
        assert_eq!(
            frac(1, 4).isolate_common_denominator(&frac(1, 6)),
            Fraction::from(2)
        );
        assert_eq!(Fraction::from(4).get_common_elements(&Fraction::from(6)), Fraction::from(2));
        assert_eq!(frac(1, 4).get_common_elements(&frac(1, 6)), frac(1, 2));
        assert_eq!(frac(2, 3).get_common_elements(&frac(3, 2)), Fraction::one());
    }

    #[test]
    fn test_output() {
        assert_eq!(frac(5, 6).to_string(), "5/6");
        assert_eq!(frac(-5, 6).to_string(), "-5/6");
        assert_eq!(Fraction::from(-12).to_string(), "-12");
        assert_eq!(Fraction::zero().to_string(), "0");
        assert_eq!(frac(-5, 6).to_formatted_string(OutputFormat::Latex), "-\\frac{5}{6}");
        assert_eq!(Fraction::from(7).to_latex(), "7");
    }
}
