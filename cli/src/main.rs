/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::Parser;
use inference::discover::discover;
use inference::knowledge_base::KnowledgeBase;
use inference::loader::load_kb;
use inference::parser::{parse_command, Command};
use inference::query::{proves, query};
use shared::terms::is_variable;
use shared::triple::Triple;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mirlo-cli",
    version = "0.1.0",
    about = "A CLI tool for Mirlo",
    long_about = "Mirlo CLI - An interactive shell over a knowledge base of fuzzy triples and Horn rules, with backward and forward chaining. Built with Rust using the mirlo inference library."
)]
struct Args {
    #[arg(long, help = "Facts file", value_name = "FILE", default_value = "kb/hechos.txt")]
    hechos: PathBuf,

    #[arg(long, help = "Rules file", value_name = "FILE", default_value = "kb/reglas.txt")]
    reglas: PathBuf,
}

const EXIT_COMMANDS: [&str; 5] = ["exit", "quit", "q", "cerrar", "e"];

fn main() {
    let args = Args::parse();

    let mut kb = match load_kb(&args.hechos, &args.reglas) {
        Ok(kb) => kb,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    println!(
        "Cargados {} hechos y {} reglas.",
        kb.facts.len(),
        kb.rules.len()
    );

    let stdin = io::stdin();
    loop {
        print!("mirlo> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.contains(&line) {
            break;
        }

        // A bad line is reported and the loop continues.
        match parse_command(line) {
            Ok(command) => dispatch(command, &mut kb),
            Err(err) => println!("{}", err),
        }
    }
}

fn dispatch(command: Command, kb: &mut KnowledgeBase) {
    match command {
        Command::Assert(fact) => {
            if !fact.is_ground() {
                println!("Un hecho no puede contener variables.");
                return;
            }
            kb.add_fact(fact);
            println!("Hecho agregado.");
        }
        Command::Query(goal) => print_answers(&goal, kb),
        Command::Reason(goal) => {
            if proves(&goal, kb) {
                println!("Sí.");
            } else {
                println!("No.");
            }
        }
        Command::Discover => {
            let discovered = discover(kb);
            if discovered.is_empty() {
                println!("No se descubrieron hechos nuevos.");
            } else {
                for fact in &discovered {
                    println!("{}", fact);
                }
                println!("{} hechos nuevos.", discovered.len());
            }
        }
    }
}

// The distinct variables of a goal, in subject/predicate/object order.
fn goal_variables(goal: &Triple) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();
    for term in goal.terms() {
        if is_variable(term) && !variables.iter().any(|v| v == term) {
            variables.push(term.to_string());
        }
    }
    variables
}

fn print_answers(goal: &Triple, kb: &KnowledgeBase) {
    let variables = goal_variables(goal);

    // Alternative derivations of the same bindings collapse to the highest
    // confidence.
    let mut answers: Vec<(Vec<String>, f64)> = Vec::new();
    for (bindings, confidence) in query(goal, kb) {
        let values: Vec<String> = variables.iter().map(|v| bindings.resolve(v)).collect();
        match answers.iter_mut().find(|entry| entry.0 == values) {
            Some(entry) => {
                if confidence > entry.1 {
                    entry.1 = confidence;
                }
            }
            None => answers.push((values, confidence)),
        }
    }

    if answers.is_empty() {
        println!("No.");
        return;
    }

    if variables.is_empty() {
        println!("{}", tagged("Sí.", answers[0].1));
        return;
    }

    for (values, confidence) in &answers {
        let pairs: Vec<String> = variables
            .iter()
            .zip(values)
            .map(|(variable, value)| format!("{} = {}", variable, value))
            .collect();
        println!("{}", tagged(&pairs.join(", "), *confidence));
    }
}

// Confidence 1.0 is certain and never rendered.
fn tagged(text: &str, confidence: f64) -> String {
    if confidence < 1.0 {
        format!("{} [{}]", text, confidence)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_variables_are_distinct_and_ordered() {
        assert_eq!(goal_variables(&Triple::new("X", "p", "X")), vec!["X"]);
        assert_eq!(
            goal_variables(&Triple::new("X", "p", "Z")),
            vec!["X", "Z"]
        );
        assert!(goal_variables(&Triple::new("a", "p", "b")).is_empty());
    }

    #[test]
    fn test_tagged_hides_certainty() {
        assert_eq!(tagged("Sí.", 1.0), "Sí.");
        assert_eq!(tagged("Sí.", 0.8), "Sí. [0.8]");
    }
}
