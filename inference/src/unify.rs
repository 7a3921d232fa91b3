use shared::substitution::Substitution;
use shared::terms::{is_literal, is_variable};
use shared::triple::Triple;

/// Returns true iff `var` appears anywhere along the binding chain starting
/// at `term`, including `term` itself. Used before binding to keep the
/// substitution acyclic.
pub fn occurs(var: &str, term: &str, bindings: &Substitution) -> bool {
    if term == var {
        return true;
    }
    if is_variable(term) {
        if let Some(next) = bindings.get(term) {
            return occurs(var, next, bindings);
        }
    }
    false
}

/// Unifies two terms, extending `bindings` in place. Returns false on
/// failure; `bindings` may then hold partial entries and must be discarded
/// by the caller.
pub fn unify_terms(t1: &str, t2: &str, bindings: &mut Substitution) -> bool {
    match (is_literal(t1), is_literal(t2)) {
        // Literal with literal: equal or nothing.
        (true, true) => t1 == t2,

        // Literal with variable.
        (true, false) => {
            if let Some(value) = bindings.get(t2).cloned() {
                return unify_terms(t1, &value, bindings);
            }
            // A literal can never contain t2, so no occurs-check here.
            bindings.bind(t2, t1);
            true
        }

        // Variable with literal.
        (false, true) => {
            if let Some(value) = bindings.get(t1).cloned() {
                return unify_terms(&value, t2, bindings);
            }
            bindings.bind(t1, t2);
            true
        }

        // Variable with variable.
        (false, false) => {
            if let Some(value) = bindings.get(t1).cloned() {
                return unify_terms(&value, t2, bindings);
            }
            if let Some(value) = bindings.get(t2).cloned() {
                return unify_terms(t1, &value, bindings);
            }
            // Same unbound variable on both sides: nothing to do.
            if t1 == t2 {
                return true;
            }
            if occurs(t1, t2, bindings) || occurs(t2, t1, bindings) {
                return false;
            }
            bindings.bind(t1, t2);
            true
        }
    }
}

/// Unifies two triples under an existing substitution, term by term in
/// subject, predicate, object order. The input substitution is cloned, so
/// callers can retry alternatives with the original.
pub fn unify(x: &Triple, y: &Triple, bindings: &Substitution) -> Option<Substitution> {
    let mut unified = bindings.clone();
    if !unify_terms(&x.subject, &y.subject, &mut unified) {
        return None;
    }
    if !unify_terms(&x.predicate, &y.predicate, &mut unified) {
        return None;
    }
    if !unify_terms(&x.object, &y.object, &mut unified) {
        return None;
    }
    Some(unified)
}
