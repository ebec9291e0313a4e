//! Deserialization of [Meshes](Mesh) from OBJ text.
//!
//! # Notes
//!
//! * Only `o` and `v` directives are understood. Everything else is rejected, unless
//!   [Options::unknown_directives] says to skip it.
//! * Directives which could be mistaken for `o` or `v` (`vn`, `vt`, `off`, ...) are always rejected.
//! * Lines end at `\n`, `\r\n`, or a lone `\r`. Each directive and its arguments occupy
//!   exactly one line; `o Cube v 1.0 2.0 3.0` is malformed.
//! * Vertex components must be decimals with a fractional part: `1.0` is a component, `1` and
//!   `1e3` aren't.
//!
//! # See Also
//!
//! * [Wavefront OBJ](https://paulbourke.net/dataformats/obj/)

mod comment;
pub use comment::*;

pub(crate) mod token;

use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::error::{Directive, Error, Location, Malformation};
use crate::{Component, Mesh, Vertex};
use token::{is_decimal, split_line, Token, Tokens};

/// How the [Parser] treats directives other than `o` and `v`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnknownDirectives {
    /// Fail with [Error::UnsupportedDirective].
    #[default]
    Reject,
    /// Ignore the rest of the line, unless the directive starts with `o` or `v`.
    Skip,
}

/// Parser configuration.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Options {
    pub unknown_directives: UnknownDirectives,
}

/// Lazily parse `text` into [Meshes](Mesh), with default [Options].
///
/// Equivalent to [Parser::new].
#[inline]
pub fn parse(text: &str) -> Parser<'_> {
    Parser::new(text)
}

/// Iterator over the meshes within OBJ text.
///
/// Each call to [Iterator::next] reads only as far as the end of the next mesh, i.e. up to the
/// following `o` directive or the end of the text. After yielding an error, the parser yields
/// nothing more.
#[derive(Debug, Clone)]
pub struct Parser<'src, Real: Component = f64> {
    text: Cow<'src, str>,
    /// Byte offset of the start of the next unread line
    pos: usize,
    /// Number of lines read so far
    line: usize,
    options: Options,
    current: Option<Mesh<Real>>,
    finished: bool,
}

impl<'src, Real: Component> Parser<'src, Real> {
    pub fn new(text: &'src str) -> Self {
        Self::with_options(text, Options::default())
    }

    pub fn with_options(text: &'src str, options: Options) -> Self {
        Self {
            text: strip_comments(text),
            pos: 0,
            line: 0,
            options,
            current: None,
            finished: false,
        }
    }

    /// Read lines until a mesh is complete.
    ///
    /// Returns `Ok(None)` once the text is exhausted and no mesh is pending.
    fn advance(&mut self) -> Result<Option<Mesh<Real>>, Error> {
        while self.pos < self.text.len() {
            let (line, consumed) = split_line(&self.text[self.pos..]);
            self.pos += consumed;
            self.line += 1;

            let mut tokens = Tokens::new(line);
            let Some(keyword) = tokens.next() else {
                continue;
            };
            let location = Location {
                line: self.line,
                column: keyword.column,
            };
            match keyword.text {
                "o" => {
                    let mesh = object(&mut tokens, location)?;
                    tracing::trace!(line = self.line, name = mesh.name(), "object");
                    if let Some(done) = self.current.replace(mesh) {
                        tracing::debug!(name = done.name(), vertices = done.len(), "parsed mesh");
                        return Ok(Some(done));
                    }
                }
                "v" => {
                    let Some(mesh) = self.current.as_mut() else {
                        return Err(Error::VertexWithoutMesh { location });
                    };
                    let vertex = vertex(&mut tokens, location)?;
                    tracing::trace!(line = self.line, components = vertex.len(), "vertex");
                    mesh.push_vertex(vertex);
                }
                other
                    if self.options.unknown_directives == UnknownDirectives::Skip
                        && !other.starts_with(|c: char| c == 'o' || c == 'v') =>
                {
                    tracing::debug!(line = self.line, directive = other, "skipping directive");
                }
                other => {
                    return Err(Error::UnsupportedDirective {
                        directive: other.to_owned(),
                        location,
                    })
                }
            }
        }
        let last = self.current.take();
        if let Some(mesh) = &last {
            tracing::debug!(name = mesh.name(), vertices = mesh.len(), "parsed mesh");
        }
        Ok(last)
    }
}

impl<'src, Real: Component> FusedIterator for Parser<'src, Real> {}

impl<'src, Real: Component> Iterator for Parser<'src, Real> {
    type Item = Result<Mesh<Real>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(Some(mesh)) => Some(Ok(mesh)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "parse failed");
                self.finished = true;
                self.current = None;
                Some(Err(e))
            }
        }
    }
}

/// Parse the arguments of an `o` directive.
fn object<Real: Component>(
    tokens: &mut Tokens<'_>,
    location: Location,
) -> Result<Mesh<Real>, Error> {
    let name = tokens.next().ok_or(Error::MalformedDirective {
        directive: Directive::Object,
        location,
        problem: Malformation::MissingName,
    })?;
    if let Some(extra) = tokens.next() {
        return Err(Error::MalformedDirective {
            directive: Directive::Object,
            location: Location {
                line: location.line,
                column: extra.column,
            },
            problem: Malformation::TrailingWords(extra.text.to_owned()),
        });
    }
    Ok(Mesh::from_token(name.text))
}

/// Parse the arguments of a `v` directive located at `directive`.
fn vertex<Real: Component>(
    tokens: &mut Tokens<'_>,
    directive: Location,
) -> Result<Vertex<Real>, Error> {
    let mut components = [Real::zero(); 4];
    let mut found = 0;
    for token in tokens {
        let location = Location {
            line: directive.line,
            column: token.column,
        };
        if found == components.len() {
            return Err(malformed_vertex(location, Malformation::TooManyComponents));
        }
        components[found] = decimal(token, location)?;
        found += 1;
    }
    let [x, y, z, w] = components;
    match found {
        3 => Ok(Vertex::new(x, y, z)),
        4 => Ok(Vertex::homogeneous(x, y, z, w)),
        _ => Err(malformed_vertex(
            directive,
            Malformation::MissingComponents { found },
        )),
    }
}

fn decimal<Real: Component>(token: Token<'_>, location: Location) -> Result<Real, Error> {
    let invalid = || {
        malformed_vertex(
            location,
            Malformation::InvalidComponent(token.text.to_owned()),
        )
    };
    if !is_decimal(token.text) {
        return Err(invalid());
    }
    token.text.parse().map_err(|_| invalid())
}

#[inline]
fn malformed_vertex(location: Location, problem: Malformation) -> Error {
    Error::MalformedDirective {
        directive: Directive::Vertex,
        location,
        problem,
    }
}
