// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::symbolic::definition::CoefficientSubstitution;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::fractional_exponent_elimination::{
    FractionalExponentElimination, RadicalEliminator,
};
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::symbolic_traits::{OutputFormat, SymbolicOutput};
use crate::symbolic::term::Term;
use crate::symbolic::tschirnhaus_transformation::TschirnhausTransformation;
use crate::symbolic::vieta_substitution::VietaSubstitution;
use log::info;
use tabled::{builder::Builder, settings::Style};

pub const EXAMPLE_NAMES: [&str; 5] = [
    "tschirnhaus_cubic",
    "vieta_cubic",
    "radical_elimination",
    "coefficient_table",
    "coefficient_substitution",
];

/// a*x^3 + b*x^2 + c*x + d
fn general_cubic() -> Expression {
    Expression::new(vec![
        Term::new(1, &["a", "x", "x", "x"]),
        Term::new(1, &["b", "x", "x"]),
        Term::new(1, &["c", "x"]),
        Term::new(1, &["d"]),
    ])
}

fn root_power(name: &str, numerator: i64, denominator: i64) -> AlgebraResult<Term> {
    Ok(Term::with_exponents(1, &[(name, Fraction::get(numerator, denominator)?)]))
}

/// Runs one named demo; unknown names are reported as an error listing the known ones.
pub fn run_example(name: &str, format: OutputFormat) -> AlgebraResult<()> {
    info!("running example {}", name);
    match name {
        "tschirnhaus_cubic" => {
            // the general cubic loses its x^2 term; the leading coefficient a is divided out
            let cubic = general_cubic();
            println!("cubic: {} = 0", cubic.to_polynomial_string("x", format));
            let depressed = TschirnhausTransformation::new(&cubic, "x", "y")?;
            println!("substitution: {}", depressed.substitution().to_formatted_string(format));
            println!(
                "depressed: {} = 0",
                depressed.expression().to_polynomial_string("y", format)
            );
        }
        "vieta_cubic" => {
            // y^3 + p*y + q = 0 becomes a quadratic in w^3
            let depressed = Expression::new(vec![
                Term::new(1, &["y", "y", "y"]),
                Term::new(1, &["p", "y"]),
                Term::new(1, &["q"]),
            ]);
            let vieta = VietaSubstitution::new(&depressed, "y", "w")?;
            println!("substitution: {}", vieta.substitution().to_formatted_string(format));
            println!(
                "quadratic in w^3: {} = 0",
                vieta.expression().to_polynomial_string("w", format)
            );
        }
        "radical_elimination" => {
            let equations = [
                (2, Expression::new(vec![root_power("x", 1, 2)?, Term::variable("x"), Term::constant(-6)])),
                (3, Expression::new(vec![root_power("x", 2, 3)?, root_power("x", 1, 3)?, Term::constant(-6)])),
                (4, Expression::new(vec![root_power("x", 3, 4)?, root_power("x", 1, 2)?, Term::constant(-12)])),
            ];
            for (degree, equation) in equations {
                let eliminator = RadicalEliminator::for_degree(degree)?;
                let result = eliminator.eliminate(&equation, "x")?;
                println!(
                    "{} = 0  =>  {} = 0",
                    equation.to_formatted_string(format),
                    result.to_polynomial_string("x", format)
                );
            }
        }
        "coefficient_table" => {
            let depressed = TschirnhausTransformation::new(&general_cubic(), "x", "y")?;
            let mut builder = Builder::default();
            builder.push_record(["power of y", "coefficient"]);
            for (exponent, coefficient) in depressed.expression().factor("y").iter() {
                builder.push_record([
                    exponent.to_formatted_string(format),
                    coefficient.to_formatted_string(format),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::modern_rounded());
            println!("\n{}", table);
        }
        "coefficient_substitution" => {
            let depressed = TschirnhausTransformation::new(&general_cubic(), "x", "y")?;
            let named = CoefficientSubstitution::new(depressed.expression(), "y", "k")?;
            println!("{} = 0", named.expression().to_polynomial_string("y", format));
            for definition in named.definitions() {
                println!("  {}", definition.to_formatted_string(format));
            }
        }
        _ => {
            return Err(AlgebraError::InvariantViolation(format!(
                "unknown example {}, expected one of {}",
                name,
                EXAMPLE_NAMES.join(", ")
            )));
        }
    }
    Ok(())
}
