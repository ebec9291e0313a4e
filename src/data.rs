//! In-memory geometry: named [Meshes](Mesh) made of [Vertices](Vertex).

use std::fmt::Display;
use std::str::FromStr;

use nalgebra::{Point3, Point4, Scalar};
use num_traits::Float;

/// Trait for numeric types which can act as vertex components.
///
/// Components must be readable from and writable to decimal text; `f32` and `f64` both qualify.
pub trait Component: Scalar + Float + Display + FromStr {}
impl<R> Component for R where R: Scalar + Float + Display + FromStr {}

/// A vertex position, with an optional homogeneous weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<Real: Component = f64> {
    /// The `x`, `y`, and `z` components.
    pub position: Point3<Real>,
    /// The `w` component, if one was given.
    pub w: Option<Real>,
}

impl<Real: Component> Vertex<Real> {
    #[inline]
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Self {
            position: Point3::new(x, y, z),
            w: None,
        }
    }

    #[inline]
    pub fn homogeneous(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self {
            position: Point3::new(x, y, z),
            w: Some(w),
        }
    }

    /// The number of components in this vertex; either 3 or 4.
    #[inline]
    pub fn len(&self) -> usize {
        if self.w.is_some() {
            4
        } else {
            3
        }
    }

    /// Iterate through this vertex's components in `x, y, z[, w]` order.
    pub fn components(&self) -> impl Iterator<Item = Real> + '_ {
        self.position.iter().copied().chain(self.w)
    }

    /// This vertex as a homogeneous point. A missing `w` is read as `1.0`.
    pub fn to_homogeneous(&self) -> Point4<Real> {
        let w = self.w.unwrap_or_else(Real::one);
        Point4::new(self.position.x, self.position.y, self.position.z, w)
    }

    /// Whether every component is neither infinite nor NaN.
    ///
    /// Non-finite components have no decimal form, so they can't be written out and read back.
    pub fn is_finite(&self) -> bool {
        self.components().all(Float::is_finite)
    }
}

/// Reasons a string can't be used as a [Mesh] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("mesh names must not be empty")]
    Empty,
    #[error("mesh names must be a single word")]
    Whitespace,
    #[error("mesh names must not contain '#'")]
    Comment,
}

/// A named, ordered set of vertices.
///
/// Vertex order is significant: a vertex's position in [Mesh::vertices] is its index.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<Real: Component = f64> {
    name: String,
    vertices: Vec<Vertex<Real>>,
}

impl<Real: Component> Mesh<Real> {
    /// Construct an empty mesh.
    ///
    /// # Errors
    /// * `name` is empty, contains whitespace, or contains a comment marker
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        Self::with_vertices(name, Vec::new())
    }

    /// Construct a mesh from a list of vertices.
    ///
    /// # Errors
    /// See [Mesh::new].
    pub fn with_vertices(
        name: impl Into<String>,
        vertices: Vec<Vertex<Real>>,
    ) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.contains(char::is_whitespace) {
            return Err(NameError::Whitespace);
        }
        if name.contains('#') {
            return Err(NameError::Comment);
        }
        Ok(Self { name, vertices })
    }

    /// Construct a mesh from a name token which the tokenizer has already validated.
    pub(crate) fn from_token(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex<Real>] {
        &self.vertices
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, vertex: Vertex<Real>) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// The number of vertices in this mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vertices(self) -> Vec<Vertex<Real>> {
        self.vertices
    }
}
