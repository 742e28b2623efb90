// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Substitution of named definitions into an expression.
//!
//! Two strategies:
//! - when every definition is a single term, each term is rewritten in place by raising
//!   the replacement term to the variable's exponent (fractional exponents allowed);
//! - otherwise a worklist expands one defined variable at a time, caching the powers of
//!   each right-hand side, and collects finished terms into a list kept sorted by
//!   variable signature so that merging is a binary search.
//!
//! Definitions may refer to each other, as long as they do not form a cycle.
use crate::symbolic::definition::Definition;
use crate::symbolic::expression::Expression;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::symbolic_errors::{AlgebraError, AlgebraResult};
use crate::symbolic::term::Term;
use crate::symbolic::variable_interner::VarId;
use itertools::Itertools;
use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};

type DefinitionTable<'a> = HashMap<VarId, &'a Definition>;

impl Expression {
    /// Replaces every defined variable by its right-hand side and re-consolidates.
    pub fn substitute(&self, definitions: &[Definition]) -> AlgebraResult<Expression> {
        if definitions.is_empty() || self.is_zero() {
            return Ok(self.clone());
        }
        let table = definition_table(definitions)?;
        check_acyclic(&table)?;

        if table.values().all(|d| d.expression().len() == 1) {
            debug!(
                "substituting {} single-term definitions into {} terms",
                table.len(),
                self.len()
            );
            let terms = self
                .terms()
                .iter()
                .map(|t| substitute_monomials(t, &table))
                .collect::<AlgebraResult<Vec<_>>>()?;
            return Ok(Expression::new(terms));
        }

        debug!(
            "expanding {} definitions into {} terms",
            table.len(),
            self.len()
        );
        let mut pending: Vec<Term> = self.terms().to_vec();
        let mut powers: HashMap<(VarId, u32), Expression> = HashMap::new();
        let mut result = SortedTerms::default();
        while let Some(term) = pending.pop() {
            let Some((id, exponent)) = first_defined(&term, &table) else {
                result.insert(term);
                continue;
            };
            let definition = table[&id];
            let remainder = term.remove_variable_id(id);
            if let Some(single) = definition.expression().single_term() {
                let powered = raise_replacement(single, &exponent, definition)?;
                push_or_finish(remainder.multiply(&powered), &table, &mut pending, &mut result);
                continue;
            }
            let power = exponent
                .long_value()
                .filter(|p| *p > 0)
                .and_then(|p| u32::try_from(p).ok())
                .ok_or_else(|| {
                    AlgebraError::illegal_substitution(format!(
                        "{}^{} cannot be expanded with {}",
                        definition.variable(),
                        exponent,
                        definition
                    ))
                })?;
            let expansion = powers
                .entry((id, power))
                .or_insert_with(|| definition.expression().raise_to(power));
            for part in expansion.terms() {
                push_or_finish(remainder.multiply(part), &table, &mut pending, &mut result);
            }
        }
        Ok(result.into_expression())
    }
}

fn definition_table(definitions: &[Definition]) -> AlgebraResult<DefinitionTable<'_>> {
    let mut table = HashMap::with_capacity(definitions.len());
    for definition in definitions {
        if table.insert(definition.id(), definition).is_some() {
            return Err(AlgebraError::InvariantViolation(format!(
                "{} is defined more than once",
                definition.variable()
            )));
        }
    }
    Ok(table)
}

fn check_acyclic(table: &DefinitionTable) -> AlgebraResult<()> {
    let mut finished = HashSet::new();
    let mut path = Vec::new();
    for id in table.keys() {
        visit(*id, table, &mut path, &mut finished)?;
    }
    Ok(())
}

fn visit(
    id: VarId,
    table: &DefinitionTable,
    path: &mut Vec<VarId>,
    finished: &mut HashSet<VarId>,
) -> AlgebraResult<()> {
    if finished.contains(&id) {
        return Ok(());
    }
    let Some(definition) = table.get(&id) else {
        return Ok(());
    };
    if path.contains(&id) {
        return Err(AlgebraError::illegal_substitution(format!(
            "cyclic definitions {}",
            path.iter().chain([&id]).map(|v| v.name()).join(" -> ")
        )));
    }
    path.push(id);
    let dependencies: BTreeSet<VarId> = definition
        .expression()
        .terms()
        .iter()
        .flat_map(|t| t.exponents().keys().copied())
        .collect();
    for dependency in dependencies {
        visit(dependency, table, path, finished)?;
    }
    path.pop();
    finished.insert(id);
    Ok(())
}

fn first_defined(term: &Term, table: &DefinitionTable) -> Option<(VarId, Fraction)> {
    term.exponents()
        .iter()
        .find(|(id, _)| table.contains_key(*id))
        .map(|(id, e)| (*id, e.clone()))
}

fn raise_replacement(replacement: &Term, exponent: &Fraction, definition: &Definition) -> AlgebraResult<Term> {
    replacement.raise_to_power(exponent).map_err(|cause| {
        AlgebraError::substitution_failed(
            format!("cannot raise {} to {}", definition, exponent),
            cause,
        )
    })
}

fn substitute_monomials(term: &Term, table: &DefinitionTable) -> AlgebraResult<Term> {
    let mut current = term.clone();
    while let Some((id, exponent)) = first_defined(&current, table) {
        let definition = table[&id];
        let Some(replacement) = definition.expression().single_term() else {
            return Err(AlgebraError::InvariantViolation(format!(
                "{} is not a single term",
                definition
            )));
        };
        let powered = raise_replacement(replacement, &exponent, definition)?;
        current = current.remove_variable_id(id).multiply(&powered);
    }
    Ok(current)
}

fn push_or_finish(term: Term, table: &DefinitionTable, pending: &mut Vec<Term>, result: &mut SortedTerms) {
    if term.is_zero() {
        return;
    }
    if term.exponents().keys().any(|id| table.contains_key(id)) {
        pending.push(term);
    } else {
        result.insert(term);
    }
}

/// Terms ordered by [`Term::signature_cmp`]; inserting a term with a known signature
/// adds the coefficients.
#[derive(Default)]
struct SortedTerms {
    terms: Vec<Term>,
}

impl SortedTerms {
    fn insert(&mut self, term: Term) {
        match self.terms.binary_search_by(|probe| probe.signature_cmp(&term)) {
            Ok(i) => self.terms[i] = self.terms[i].merge(&term),
            Err(i) => self.terms.insert(i, term),
        }
    }

    fn into_expression(self) -> Expression {
        Expression::from_consolidated(self.terms)
    }
}
