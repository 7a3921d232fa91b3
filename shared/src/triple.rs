/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */
use crate::substitution::Substitution;
use crate::terms::{is_variable, Term};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An RDF-like triple of three terms plus a confidence in [0, 1].
///
/// Equality and hashing are structural over the three terms only; the
/// confidence is metadata and does not participate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    pub confidence: f64,
}

impl Triple {
    /// A certain triple (confidence 1.0).
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Triple::with_confidence(subject, predicate, object, 1.0)
    }

    pub fn with_confidence(subject: &str, predicate: &str, object: &str, confidence: f64) -> Self {
        Triple {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// A triple is ground iff none of its terms is a variable.
    pub fn is_ground(&self) -> bool {
        self.terms().into_iter().all(|t| !is_variable(t))
    }

    /// Rewrites all three terms through the substitution, preserving the
    /// confidence.
    pub fn apply(&self, bindings: &Substitution) -> Triple {
        Triple {
            subject: bindings.resolve(&self.subject),
            predicate: bindings.resolve(&self.predicate),
            object: bindings.resolve(&self.object),
            confidence: self.confidence,
        }
    }
}

impl PartialEq for Triple {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject
            && self.predicate == other.predicate
            && self.object == other.object
    }
}

impl Eq for Triple {}

impl Hash for Triple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject.hash(state);
        self.predicate.hash(state);
        self.object.hash(state);
    }
}

impl fmt::Display for Triple {
    /// Renders `s p o`, with a trailing ` [c]` unless the triple is certain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if self.confidence < 1.0 {
            write!(f, " [{}]", self.confidence)?;
        }
        Ok(())
    }
}
