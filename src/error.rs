use std::fmt;

/// A position within OBJ text, as a 1-based line number and 1-based byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The directives understood by the [Parser](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `o <name>`
    Object,
    /// `v <x> <y> <z> [w]`
    Vertex,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Object => f.write_str("o"),
            Directive::Vertex => f.write_str("v"),
        }
    }
}

/// What was wrong with a [malformed directive](Error::MalformedDirective).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformation {
    #[error("expected an object name")]
    MissingName,
    #[error("unexpected `{0}` after object name")]
    TrailingWords(String),
    #[error("expected 3 or 4 components, found {found}")]
    MissingComponents { found: usize },
    #[error("expected at most 4 components")]
    TooManyComponents,
    #[error("`{0}` is not a decimal number of the form `digits.digits`")]
    InvalidComponent(String),
}

/// Errors encountered while parsing OBJ text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{location}: malformed `{directive}` directive: {problem}")]
    MalformedDirective {
        directive: Directive,
        location: Location,
        problem: Malformation,
    },
    #[error("{location}: vertex appears before any `o` directive")]
    VertexWithoutMesh { location: Location },
    #[error("{location}: unsupported directive `{directive}`")]
    UnsupportedDirective { directive: String, location: Location },
}

impl Error {
    /// Where in the source text parsing stopped.
    pub fn location(&self) -> Location {
        match self {
            Error::MalformedDirective { location, .. }
            | Error::VertexWithoutMesh { location }
            | Error::UnsupportedDirective { location, .. } => *location,
        }
    }
}
