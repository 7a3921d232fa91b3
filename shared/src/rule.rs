/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::triple::Triple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Horn-style rule `conclusion <- premise_1, ..., premise_n` with a
/// confidence in [0, 1]. The premise is never empty. Variables are
/// rule-local; distinct rules do not share a variable scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub conclusion: Triple,
    pub premise: Vec<Triple>,
    pub confidence: f64,
}

impl Rule {
    pub fn new(conclusion: Triple, premise: Vec<Triple>) -> Self {
        Rule::with_confidence(conclusion, premise, 1.0)
    }

    pub fn with_confidence(conclusion: Triple, premise: Vec<Triple>, confidence: f64) -> Self {
        Rule {
            conclusion,
            premise,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- ", self.conclusion)?;
        let premise: Vec<String> = self.premise.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", premise.join(", "))?;
        if self.confidence < 1.0 {
            write!(f, " [{}]", self.confidence)?;
        }
        Ok(())
    }
}
