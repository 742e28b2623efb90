#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// ________________________________________________________________________________________________________________________________
/// # Exact polynomial algebra
/// rational numbers stored as products of prime powers, monomials with fractional/negative exponents,
/// polynomials that consolidate themselves, substitution and the classic equation transformations
///# Example
/// ```
/// use RustedExactAlgebra::symbolic::expression::Expression;
/// use RustedExactAlgebra::symbolic::term::Term;
/// use RustedExactAlgebra::symbolic::tschirnhaus_transformation::TschirnhausTransformation;
/// use RustedExactAlgebra::symbolic::symbolic_traits::OutputFormat;
/// // x^2 + 2*x + 5 = 0
/// let e = Expression::new(vec![Term::new(1, &["x", "x"]), Term::new(2, &["x"]), Term::constant(5)]);
/// let depressed = TschirnhausTransformation::new(&e, "x", "y").unwrap();
/// let text = depressed.expression().to_polynomial_string("y", OutputFormat::Plain);
/// assert_eq!(text, "y^2 + 4");
/// ```
/// ________________________________________________________________________________________________________________________________
/// error kinds of the engine
pub mod symbolic_errors;
/// output formats (PLAIN, LaTeX) shared by all values
pub mod symbolic_traits;
/// process-wide table of variable names
pub mod variable_interner;
/// integer factorisation: trial division, Miller-Rabin, Pollard-Brent
pub mod primes;
/// exact rationals as prime-power maps
pub mod fraction;
mod fraction_tests;
/// coefficient times a product of powers of variables
pub mod term;
/// sums of terms
pub mod expression;
pub mod expression_output;
pub mod expression_substitution;
/// `variable = expression`
pub mod definition;
/// unexpanded products and sums of products
pub mod factored_expression;
///____________________________________________________________________________________________________________________________
/// # Transformations of zeroed equations
pub mod reduce_zeroed_expression;
pub mod tschirnhaus_transformation;
pub mod vieta_substitution;
pub mod fractional_exponent_elimination;
mod transformation_tests;
