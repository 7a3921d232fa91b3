use crate::error::{format_parse_error, Error};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{all_consuming, map, opt};
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{delimited, preceded, tuple};
use nom::IResult;
use shared::rule::Rule;
use shared::terms::is_literal;
use shared::triple::Triple;

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `s p o .`
    Assert(Triple),
    /// `s p o ?`
    Query(Triple),
    /// `razona si s p o ?`
    Reason(Triple),
    /// `descubrir!`
    Discover,
}

fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// A bare term. Variables and literals share the same shape and are told
// apart by their first character.
fn term(input: &str) -> IResult<&str, &str> {
    take_while1(is_term_char)(input)
}

// `[c]` confidence tag.
fn confidence(input: &str) -> IResult<&str, f64> {
    delimited(char('['), double, char(']'))(input)
}

// Three whitespace-separated terms.
fn triple_terms(input: &str) -> IResult<&str, (&str, &str, &str)> {
    tuple((term, preceded(multispace1, term), preceded(multispace1, term)))(input)
}

fn fact_line(input: &str) -> IResult<&str, Triple> {
    map(
        tuple((triple_terms, opt(preceded(multispace0, confidence)))),
        |((s, p, o), c)| Triple::with_confidence(s, p, o, c.unwrap_or(1.0)),
    )(input)
}

fn rule_line(input: &str) -> IResult<&str, Rule> {
    map(
        tuple((
            triple_terms,
            delimited(multispace0, tag("<-"), multispace0),
            separated_list1(
                delimited(multispace0, char(','), multispace0),
                map(triple_terms, |(s, p, o)| Triple::new(s, p, o)),
            ),
            opt(preceded(multispace0, confidence)),
        )),
        |((s, p, o), _, premise, c)| {
            Rule::with_confidence(Triple::new(s, p, o), premise, c.unwrap_or(1.0))
        },
    )(input)
}

/// Parses one fact line: `s p o` with an optional trailing `[c]`.
pub fn parse_fact(input: &str) -> Result<Triple, Error> {
    let line = input.trim();
    match all_consuming(fact_line)(line) {
        Ok((_, triple)) => Ok(triple),
        Err(err) => Err(Error::Parse(format_parse_error(line, err))),
    }
}

/// Parses one rule line: `s p o <- s1 p1 o1, s2 p2 o2 [c]`. The trailing
/// confidence tag belongs to the rule as a whole.
pub fn parse_rule(input: &str) -> Result<Rule, Error> {
    let line = input.trim();
    match all_consuming(rule_line)(line) {
        Ok((_, rule)) => Ok(rule),
        Err(err) => Err(Error::Parse(format_parse_error(line, err))),
    }
}

// Query positions also admit `?` as an anonymous variable.
fn query_term(input: &str) -> IResult<&str, &str> {
    alt((tag("?"), term))(input)
}

// Three query terms plus the `?` or `.` terminator.
fn command_goal(input: &str) -> IResult<&str, ((&str, &str, &str), char)> {
    all_consuming(tuple((
        tuple((
            query_term,
            preceded(multispace1, query_term),
            preceded(multispace1, query_term),
        )),
        delimited(multispace1, alt((char('?'), char('.'))), multispace0),
    )))(input)
}

// The tail of `razona si ...`, if the line starts with those two words.
fn reason_arguments(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("razona")?;
    let rest = rest.strip_prefix(char::is_whitespace)?.trim_start();
    let rest = rest.strip_prefix("si")?;
    rest.strip_prefix(char::is_whitespace)
}

// Renames anonymous `?` terms to fresh uppercase variables. An anonymous
// predicate between two known literals has no useful answer shape and is
// refused.
fn build_goal((subject, predicate, object): (&str, &str, &str)) -> Result<Triple, Error> {
    if predicate == "?"
        && subject != "?"
        && object != "?"
        && is_literal(subject)
        && is_literal(object)
    {
        return Err(Error::Command("no consultar por predicado".to_string()));
    }
    let subject = if subject == "?" { "X" } else { subject };
    let predicate = if predicate == "?" { "Y" } else { predicate };
    let object = if object == "?" { "Z" } else { object };
    Ok(Triple::new(subject, predicate, object))
}

/// Parses one REPL line into a command.
pub fn parse_command(input: &str) -> Result<Command, Error> {
    let line = input.trim();

    if let Some(rest) = line.strip_prefix("descubrir!") {
        if !rest.trim().is_empty() {
            return Err(Error::Command(
                "el comando \"descubrir!\" no lleva argumentos".to_string(),
            ));
        }
        return Ok(Command::Discover);
    }

    if let Some(rest) = reason_arguments(line) {
        return match command_goal(rest.trim()) {
            Ok((_, (terms, '?'))) => Ok(Command::Reason(build_goal(terms)?)),
            _ => Err(Error::Command(
                "la consulta de razonamiento debe ser: razona si S P O ?".to_string(),
            )),
        };
    }

    match command_goal(line) {
        Ok((_, (terms, '?'))) => Ok(Command::Query(build_goal(terms)?)),
        Ok((_, ((s, p, o), _))) => {
            if s == "?" || p == "?" || o == "?" {
                return Err(Error::Command(
                    "un hecho no puede contener el término anónimo '?'".to_string(),
                ));
            }
            Ok(Command::Assert(Triple::new(s, p, o)))
        }
        Err(_) => Err(Error::Command(
            "formato inválido: debe ser S P O ? (consulta) o S P O . (hecho)".to_string(),
        )),
    }
}
