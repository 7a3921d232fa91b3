/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// A term is an atomic string. Classification is purely syntactic.
pub type Term = String;

/// A term is a variable iff it is non-empty and its first character is
/// uppercase.
pub fn is_variable(term: &str) -> bool {
    term.chars().next().map_or(false, |c| c.is_uppercase())
}

/// Everything that is not a variable is a literal, including
/// numeric-leading identifiers.
pub fn is_literal(term: &str) -> bool {
    !is_variable(term)
}
