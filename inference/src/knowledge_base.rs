use shared::rule::Rule;
use shared::triple::Triple;

/// Ordered fact and rule store.
///
/// Facts and rules are kept in separate collections and insertion order is
/// preserved in both; it determines the order in which answers stream out of
/// the evaluator. Facts are ground triples; callers must not insert triples
/// containing variables (the loader and the REPL enforce this at the
/// boundary).
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub facts: Vec<Triple>,
    pub rules: Vec<Rule>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        KnowledgeBase {
            facts: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Adds a fact at most once. If a structurally equal fact is already
    /// stored, only the higher confidence survives.
    pub fn add_fact(&mut self, fact: Triple) {
        if let Some(existing) = self.facts.iter_mut().find(|f| **f == fact) {
            if fact.confidence > existing.confidence {
                existing.confidence = fact.confidence;
            }
            return;
        }
        self.facts.push(fact);
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn contains_fact(&self, fact: &Triple) -> bool {
        self.facts.contains(fact)
    }
}
