use crate::knowledge_base::KnowledgeBase;
use crate::query::solve_premises;
use log::debug;
use shared::substitution::Substitution;
use shared::triple::Triple;

/// Forward chaining: one derivation sweep over the rules in KB insertion
/// order, against the facts present when the sweep starts.
///
/// Every solved premise grounds the rule conclusion with confidence
/// `min(rule, premise)`. Derivations that still contain a variable are
/// dropped, as are triples already stored in the KB. When the sweep derives
/// the same triple twice, only the higher confidence survives. The accepted
/// facts are appended to the KB and returned.
///
/// A single call does not saturate: call repeatedly until the returned list
/// is empty to reach a fixed point.
pub fn discover(kb: &mut KnowledgeBase) -> Vec<Triple> {
    let mut discovered: Vec<Triple> = Vec::new();
    let rules = kb.rules.clone();

    for rule in &rules {
        for (bindings, premise_confidence) in
            solve_premises(rule.premise.clone(), kb, Substitution::new())
        {
            let mut derived = rule.conclusion.apply(&bindings);
            derived.confidence = rule.confidence.min(premise_confidence);

            // A premise that did not bind every conclusion variable leaves
            // the derivation non-ground; skip it.
            if !derived.is_ground() {
                continue;
            }
            if kb.facts.contains(&derived) {
                continue;
            }

            match discovered.iter_mut().find(|t| **t == derived) {
                Some(existing) => {
                    if derived.confidence > existing.confidence {
                        *existing = derived;
                    }
                }
                None => {
                    debug!("derived {}", derived);
                    discovered.push(derived);
                }
            }
        }
    }

    kb.facts.extend(discovered.iter().cloned());
    discovered
}
