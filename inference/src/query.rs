use crate::knowledge_base::KnowledgeBase;
use crate::unify::unify;
use log::trace;
use shared::substitution::Substitution;
use shared::triple::Triple;
use std::iter;

/// A lazily produced stream of `(substitution, confidence)` answers. Each
/// answer is computed on demand; dropping the iterator cancels the search.
pub type Answers<'a> = Box<dyn Iterator<Item = (Substitution, f64)> + 'a>;

/// Backward chaining: produces one answer for every distinct derivation of
/// `goal`, facts first, then rules, each in KB insertion order.
///
/// The confidence of an answer is the minimum of every confidence consumed
/// along its derivation. Alternative derivations stream as independent
/// answers; reducing them (e.g. by max) is up to the caller.
///
/// Two known limitations, kept intentionally: rule variables are not renamed
/// apart, so a goal whose variables textually collide with rule-local names
/// can leak bindings between the two scopes; and there is no cycle detection
/// on goals, so rules that reach themselves recursively can make the stream
/// diverge.
pub fn query<'a>(goal: &Triple, kb: &'a KnowledgeBase) -> Answers<'a> {
    let fact_goal = goal.clone();
    let fact_answers = kb.facts.iter().filter_map(move |fact| {
        unify(&fact_goal, fact, &Substitution::new()).map(|bindings| (bindings, fact.confidence))
    });

    let rule_goal = goal.clone();
    let rule_answers = kb.rules.iter().flat_map(move |rule| -> Answers<'a> {
        match unify(&rule_goal, &rule.conclusion, &Substitution::new()) {
            Some(head_bindings) => {
                trace!("goal {} matches rule {}", rule_goal, rule);
                let rule_confidence = rule.confidence;
                Box::new(
                    solve_premises(rule.premise.clone(), kb, head_bindings).map(
                        move |(bindings, confidence)| (bindings, rule_confidence.min(confidence)),
                    ),
                )
            }
            None => Box::new(iter::empty()),
        }
    });

    Box::new(fact_answers.chain(rule_answers))
}

/// Satisfies every premise atom left to right, growing the substitution
/// monotonically along the way. Yields the final substitution together with
/// the minimum confidence over all solved atoms.
pub fn solve_premises<'a>(
    premise: Vec<Triple>,
    kb: &'a KnowledgeBase,
    bindings: Substitution,
) -> Answers<'a> {
    // An exhausted premise is satisfied with full confidence.
    if premise.is_empty() {
        return Box::new(iter::once((bindings, 1.0)));
    }

    let first = premise[0].apply(&bindings);
    let rest: Vec<Triple> = premise[1..].to_vec();

    Box::new(
        query(&first, kb).flat_map(move |(first_bindings, first_confidence)| {
            // Naive overwrite merge; bindings from the solved atom win.
            let merged = bindings.merged(&first_bindings);
            solve_premises(rest.clone(), kb, merged).map(
                move |(rest_bindings, rest_confidence)| {
                    (rest_bindings, first_confidence.min(rest_confidence))
                },
            )
        }),
    )
}

/// True iff at least one derivation of `goal` exists. Short-circuits as soon
/// as the first answer is produced; confidences are not inspected.
pub fn proves(goal: &Triple, kb: &KnowledgeBase) -> bool {
    query(goal, kb).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::rule::Rule;

    fn kb_with_fact(fact: Triple) -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        kb.add_fact(fact);
        kb
    }

    #[test]
    fn test_ground_goal_matches_fact() {
        let kb = kb_with_fact(Triple::new("tomate", "color", "rojo"));
        let answers: Vec<_> = query(&Triple::new("tomate", "color", "rojo"), &kb).collect();
        assert_eq!(answers.len(), 1);
        assert!(answers[0].0.is_empty());
        assert_eq!(answers[0].1, 1.0);
    }

    #[test]
    fn test_variable_goal_binds_subject() {
        let kb = kb_with_fact(Triple::new("tomate", "color", "rojo"));
        let answers: Vec<_> = query(&Triple::new("X", "color", "rojo"), &kb).collect();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].0.resolve("X"), "tomate");
    }

    #[test]
    fn test_unsatisfiable_goal_yields_nothing() {
        let kb = kb_with_fact(Triple::new("tomate", "color", "rojo"));
        assert_eq!(query(&Triple::new("tomate", "color", "azul"), &kb).count(), 0);
    }

    #[test]
    fn test_rule_derivation() {
        let mut kb = kb_with_fact(Triple::new("tomate", "ingrediente", "pescado"));
        kb.add_rule(Rule::new(
            Triple::new("Plato", "marida", "vino_blanco"),
            vec![Triple::new("Plato", "ingrediente", "pescado")],
        ));
        let answers: Vec<_> = query(&Triple::new("tomate", "marida", "vino_blanco"), &kb).collect();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].1, 1.0);
    }

    #[test]
    fn test_confidence_is_minimum_along_derivation() {
        let mut kb = kb_with_fact(Triple::with_confidence("tomate", "ingrediente", "marisco", 0.8));
        kb.add_rule(Rule::with_confidence(
            Triple::new("Plato", "marida", "vino_blanco"),
            vec![Triple::new("Plato", "ingrediente", "marisco")],
            0.9,
        ));
        let answers: Vec<_> = query(&Triple::new("tomate", "marida", "vino_blanco"), &kb).collect();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].1, 0.8);
    }

    #[test]
    fn test_facts_stream_before_rules() {
        let mut kb = kb_with_fact(Triple::with_confidence("tomate", "es", "fruta", 0.5));
        kb.add_fact(Triple::new("tomate", "familia", "solanacea"));
        kb.add_rule(Rule::new(
            Triple::new("X", "es", "fruta"),
            vec![Triple::new("X", "familia", "solanacea")],
        ));
        let answers: Vec<_> = query(&Triple::new("tomate", "es", "fruta"), &kb).collect();
        // One answer from the facts pass, one from the rules pass, in that order.
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].1, 0.5);
        assert_eq!(answers[1].1, 1.0);
    }

    #[test]
    fn test_multi_premise_join() {
        let mut kb = KnowledgeBase::new();
        kb.add_fact(Triple::new("a", "p", "b"));
        kb.add_fact(Triple::new("b", "p", "c"));
        kb.add_rule(Rule::new(
            Triple::new("X", "q", "Z"),
            vec![Triple::new("X", "p", "Y"), Triple::new("Y", "p", "Z")],
        ));
        let answers: Vec<_> = query(&Triple::new("a", "q", "Z"), &kb).collect();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].0.resolve("Z"), "c");
    }

    #[test]
    fn test_answers_are_produced_lazily() {
        let mut kb = KnowledgeBase::new();
        for i in 0..100 {
            kb.add_fact(Triple::new(&format!("s{}", i), "p", "o"));
        }
        // Taking one answer must not require materialising the rest.
        let first = query(&Triple::new("X", "p", "o"), &kb).next().unwrap();
        assert_eq!(first.0.resolve("X"), "s0");
    }

    #[test]
    fn test_proves_short_circuits() {
        let mut kb = kb_with_fact(Triple::new("tomate", "color", "rojo"));
        kb.add_rule(Rule::new(
            // A rule that would recurse forever if the rules pass were reached.
            Triple::new("X", "color", "Y"),
            vec![Triple::new("X", "color", "Y")],
        ));
        assert!(proves(&Triple::new("tomate", "color", "rojo"), &kb));
    }

    #[test]
    fn test_proves_false_on_empty_kb() {
        let kb = KnowledgeBase::new();
        assert!(!proves(&Triple::new("tomate", "color", "rojo"), &kb));
    }
}
