use crate::error::Error;
use crate::knowledge_base::KnowledgeBase;
use crate::parser::{parse_fact, parse_rule};
use log::debug;
use std::fs;
use std::path::Path;

/// Builds a knowledge base from two UTF-8 text files, one entry per line.
/// `#`-prefixed lines and blank lines are ignored, and a missing file is
/// treated as an empty one. Fact lines must be ground.
pub fn load_kb(facts_path: &Path, rules_path: &Path) -> Result<KnowledgeBase, Error> {
    let mut kb = KnowledgeBase::new();

    for (number, line) in read_lines(facts_path)? {
        let fact = parse_fact(&line).map_err(|err| locate(facts_path, number, err))?;
        if !fact.is_ground() {
            return Err(Error::Load {
                file: facts_path.to_path_buf(),
                line: number,
                message: "un hecho no puede contener variables".to_string(),
            });
        }
        kb.add_fact(fact);
    }

    for (number, line) in read_lines(rules_path)? {
        let rule = parse_rule(&line).map_err(|err| locate(rules_path, number, err))?;
        kb.add_rule(rule);
    }

    debug!(
        "loaded {} facts and {} rules",
        kb.facts.len(),
        kb.rules.len()
    );
    Ok(kb)
}

// Numbered, trimmed, non-comment lines of a file; empty if the file does
// not exist.
fn read_lines(path: &Path) -> Result<Vec<(usize, String)>, Error> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim().to_string()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

fn locate(path: &Path, line: usize, err: Error) -> Error {
    Error::Load {
        file: path.to_path_buf(),
        line,
        message: err.to_string(),
    }
}
