use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by the textual boundary (parser and loader). The engine
/// itself never fails: unification failure and unprovable goals are encoded
/// as empty answer streams.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// Malformed fact, rule or query text, with a position marker.
    Parse(String),
    /// A well-formed line that violates the REPL command grammar.
    Command(String),
    /// A bad line in a KB file.
    Load {
        file: PathBuf,
        line: usize,
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::Parse(message) => write!(f, "{}", message),
            Error::Command(message) => write!(f, "{}", message),
            Error::Load {
                file,
                line,
                message,
            } => write!(f, "{}:{}: {}", file.display(), line, message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Renders a nom error as a one-line message with a column pointer into the
/// offending input.
pub fn format_parse_error(input: &str, err: nom::Err<nom::error::Error<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let offset = input.len() - e.input.len();
            let column = input[..offset].chars().count() + 1;
            format!(
                "error de sintaxis en la columna {}:\n{}\n{}^",
                column,
                input,
                " ".repeat(column - 1)
            )
        }
        nom::Err::Incomplete(_) => "entrada incompleta".to_string(),
    }
}
