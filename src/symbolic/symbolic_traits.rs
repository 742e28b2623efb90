// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
// SYMBOLIC TRAITS //////////////////////////////////////////////////////////////////
// Text output shared by every value of the engine: Fraction, Term, Expression,
// Definition, FactoredExpression and FactoredExpressionSum.
// There is no parser on the other side - text is write-only.

use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// The two supported serialisations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// infix text: `*` for products, `/( )` for a denominator group, `^` for powers
    #[default]
    Plain,
    /// `\frac{}{}`, `\,` for implicit products, `^{}` for long exponents
    Latex,
}

impl OutputFormat {
    /// separator between two factors of a product
    pub fn product_separator(self) -> &'static str {
        match self {
            OutputFormat::Plain => "*",
            OutputFormat::Latex => "\\,",
        }
    }

    /// wraps `inner` in brackets
    pub fn group(self, inner: &str) -> String {
        match self {
            OutputFormat::Plain => format!("({})", inner),
            OutputFormat::Latex => format!("\\left({}\\right)", inner),
        }
    }

    /// `base^exponent`; latex braces exponents longer than one character
    pub fn power(self, base: &str, exponent: &str) -> String {
        match self {
            OutputFormat::Plain => format!("{}^{}", base, exponent),
            OutputFormat::Latex if exponent.chars().count() == 1 => {
                format!("{}^{}", base, exponent)
            }
            OutputFormat::Latex => format!("{}^{{{}}}", base, exponent),
        }
    }

    pub fn fraction(self, numerator: &str, denominator: &str) -> String {
        match self {
            OutputFormat::Plain => format!("{}/{}", numerator, denominator),
            OutputFormat::Latex => format!("\\frac{{{}}}{{{}}}", numerator, denominator),
        }
    }
}

/// Anything that can be written as PLAIN text or LaTeX.
pub trait SymbolicOutput {
    fn write_formatted(&self, out: &mut dyn fmt::Write, format: OutputFormat) -> fmt::Result;

    fn to_formatted_string(&self, format: OutputFormat) -> String {
        let mut text = String::new();
        // writing into a String cannot fail
        let _ = self.write_formatted(&mut text, format);
        text
    }

    fn to_latex(&self) -> String {
        self.to_formatted_string(OutputFormat::Latex)
    }
}

//___________________________________TESTS____________________________________
