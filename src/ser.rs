//! Serialization of [Meshes](Mesh) to OBJ text.
//!
//! Output contains one `o` line per mesh followed by one `v` line per vertex, joined by `\n`,
//! with no trailing line terminator and no comments. Components are written with the shortest
//! decimal representation which reads back as the same value, so `parse(serialize(m))` yields
//! `m` again as long as every component [is finite](Vertex::is_finite).

use std::fmt;
use std::io;

use crate::{Component, Mesh, Vertex};

/// Write `meshes` as OBJ text.
#[tracing::instrument(level = "debug", skip_all, fields(meshes = meshes.len()))]
pub fn serialize<Real: Component>(meshes: &[Mesh<Real>]) -> String {
    Document(meshes).to_string()
}

/// Write `meshes` as OBJ text to `writer`.
///
/// # Errors
/// * Any error returned by `writer`
#[tracing::instrument(level = "debug", skip_all, fields(meshes = meshes.len()))]
pub fn write_to<Real: Component>(
    mut writer: impl io::Write,
    meshes: &[Mesh<Real>],
) -> io::Result<()> {
    write!(writer, "{}", Document(meshes))
}

/// [Display](fmt::Display) adapter for a complete OBJ document.
#[derive(Debug, Clone, Copy)]
pub struct Document<'m, Real: Component = f64>(pub &'m [Mesh<Real>]);

impl<'m, Real: Component> fmt::Display for Document<'m, Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mesh) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{mesh}")?;
        }
        Ok(())
    }
}

/// Formats as `o <name>`, followed by a `v` line for each vertex.
impl<Real: Component> fmt::Display for Mesh<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o {}", self.name())?;
        for vertex in self.vertices() {
            write!(f, "\n{vertex}")?;
        }
        Ok(())
    }
}

/// Formats as `v <x> <y> <z>[ <w>]`.
impl<Real: Component> fmt::Display for Vertex<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("v")?;
        for c in self.components() {
            write!(f, " {}", Decimal(c))?;
        }
        Ok(())
    }
}

/// A component written so that it always has a fractional part.
struct Decimal<Real>(Real);

impl<Real: Component> fmt::Display for Decimal<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // float `Display` never uses exponents, and omits the point only for integral values
        if self.0.is_finite() && self.0.fract() == Real::zero() {
            write!(f, "{}.0", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
