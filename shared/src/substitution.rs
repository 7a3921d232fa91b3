/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */
use crate::terms::{is_variable, Term};
use std::collections::HashMap;

/// A finite mapping from variable name to term.
///
/// The map represents a chain: looking up `X` may yield another variable `Y`
/// which itself may be bound. Nothing is normalised on insert; chains are
/// walked lazily on `resolve`. The occurs-check performed at bind time by the
/// unifier keeps chains acyclic, so resolution terminates and applying
/// `resolve` twice equals applying it once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    bindings: HashMap<String, Term>,
}

impl Substitution {
    pub fn new() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// The raw binding of a variable, without walking the chain.
    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    pub fn contains(&self, var: &str) -> bool {
        self.bindings.contains_key(var)
    }

    pub fn bind(&mut self, var: &str, value: &str) {
        self.bindings.insert(var.to_string(), value.to_string());
    }

    /// Walks the binding chain until a literal or an unbound variable is
    /// reached. Literals resolve to themselves.
    pub fn resolve(&self, term: &str) -> Term {
        if is_variable(term) {
            if let Some(value) = self.bindings.get(term) {
                return self.resolve(value);
            }
        }
        term.to_string()
    }

    /// A copy of `self` extended with every binding of `other`. On conflict
    /// the binding from `other` wins.
    pub fn merged(&self, other: &Substitution) -> Substitution {
        let mut merged = self.clone();
        for (var, value) in &other.bindings {
            merged.bindings.insert(var.clone(), value.clone());
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Term)> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_literal_is_identity() {
        let bindings = Substitution::new();
        assert_eq!(bindings.resolve("tomate"), "tomate");
    }

    #[test]
    fn test_resolve_unbound_variable_is_identity() {
        let bindings = Substitution::new();
        assert_eq!(bindings.resolve("X"), "X");
    }

    #[test]
    fn test_resolve_walks_chains() {
        let mut bindings = Substitution::new();
        bindings.bind("X", "Y");
        bindings.bind("Y", "tomate");
        assert_eq!(bindings.resolve("X"), "tomate");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut bindings = Substitution::new();
        bindings.bind("X", "Y");
        bindings.bind("Y", "Z");
        let once = bindings.resolve("X");
        assert_eq!(bindings.resolve(&once), once);
    }

    #[test]
    fn test_merged_later_bindings_win() {
        let mut left = Substitution::new();
        left.bind("X", "tomate");
        left.bind("Y", "rojo");
        let mut right = Substitution::new();
        right.bind("X", "pera");
        let merged = left.merged(&right);
        assert_eq!(merged.resolve("X"), "pera");
        assert_eq!(merged.resolve("Y"), "rojo");
    }
}
