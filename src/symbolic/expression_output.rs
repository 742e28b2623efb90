// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
/// PLAIN and LaTeX output of expressions, either as a flat sum of terms or as a
/// polynomial in one chosen variable.
use crate::symbolic::expression::Expression;
use crate::symbolic::symbolic_traits::{OutputFormat, SymbolicOutput};
use crate::symbolic::term::{power_text, Term};
use std::fmt;

impl Expression {
    /// Writes the expression. With `variable` set, terms are grouped by descending power
    /// of that variable and multi-term coefficients are bracketed:
    /// `(a + b)*x^2 + c*x - 1`.
    pub fn write(
        &self,
        out: &mut dyn fmt::Write,
        variable: Option<&str>,
        format: OutputFormat,
    ) -> fmt::Result {
        let pieces = match variable {
            None => self
                .terms()
                .iter()
                .map(|t| (t.is_negative(), t.unsigned_text(format)))
                .collect(),
            Some(name) => self.polynomial_pieces(name, format),
        };
        write_signed_pieces(out, pieces)
    }

    /// text of the expression as a polynomial in `variable`
    pub fn to_polynomial_string(&self, variable: &str, format: OutputFormat) -> String {
        let mut text = String::new();
        let _ = self.write(&mut text, Some(variable), format);
        text
    }

    fn polynomial_pieces(&self, name: &str, format: OutputFormat) -> Vec<(bool, String)> {
        let mut pieces = Vec::new();
        for (exponent, coefficient) in self.factor(name).iter() {
            if exponent.is_zero() {
                pieces.extend(
                    coefficient
                        .terms()
                        .iter()
                        .map(|t| (t.is_negative(), t.unsigned_text(format))),
                );
            } else if let Some(term) = coefficient.single_term() {
                let full = term.multiply(&Term::with_exponents(1, &[(name, exponent.clone())]));
                pieces.push((full.is_negative(), full.unsigned_text(format)));
            } else {
                let inner = coefficient.to_formatted_string(format);
                pieces.push((
                    false,
                    format!(
                        "{}{}{}",
                        format.group(&inner),
                        format.product_separator(),
                        power_text(name, exponent, format)
                    ),
                ));
            }
        }
        pieces
    }
}

/// `a - b + c`; an empty list is written as `0`
pub(crate) fn write_signed_pieces(
    out: &mut dyn fmt::Write,
    pieces: Vec<(bool, String)>,
) -> fmt::Result {
    if pieces.is_empty() {
        return out.write_str("0");
    }
    for (i, (negative, text)) in pieces.into_iter().enumerate() {
        match (i, negative) {
            (0, true) => write!(out, "-{}", text)?,
            (0, false) => out.write_str(&text)?,
            (_, true) => write!(out, " - {}", text)?,
            (_, false) => write!(out, " + {}", text)?,
        }
    }
    Ok(())
}

impl SymbolicOutput for Expression {
    fn write_formatted(&self, out: &mut dyn fmt::Write, format: OutputFormat) -> fmt::Result {
        self.write(out, None, format)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write(f, None, OutputFormat::Plain)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expression({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::fraction::Fraction;

    #[test]
    fn test_flat_output() {
        let e = Expression::new(vec![
            Term::new(1, &["x", "x"]),
            Term::new(-2, &["x"]),
            Term::constant(5),
        ]);
        assert_eq!(e.to_string(), "x^2 - 2*x + 5");
        assert_eq!(Expression::zero().to_string(), "0");
        let negative_first = Expression::new(vec![Term::new(-1, &["y"]), Term::constant(Fraction::get(1, 2).unwrap())]);
        assert_eq!(negative_first.to_string(), "-y + 1/2");
        assert_eq!(negative_first.to_latex(), "-y + \\frac{1}{2}");
    }

    #[test]
    fn test_polynomial_output() {
        // a*x^2 + b*x^2 + c*x - 1
        let e = Expression::new(vec![
            Term::new(1, &["a", "x", "x"]),
            Term::new(1, &["b", "x", "x"]),
            Term::new(3, &["c", "x"]),
            Term::constant(-1),
        ]);
        assert_eq!(e.to_polynomial_string("x", OutputFormat::Plain), "(a + b)*x^2 + 3*c*x - 1");
        assert_eq!(
            e.to_polynomial_string("x", OutputFormat::Latex),
            "\\left(a + b\\right)\\,x^2 + 3\\,c\\,x - 1"
        );
    }
}
