//! # Shape Model
//!
//! Positioned primitives and their OpenSCAD statement rendering.
//!
//! The primitive set is closed: the five supported kinds form a sum type and
//! statement rendering is one exhaustive match over it. Geometric parameters
//! are fixed at construction; only the position may change afterwards, and
//! always as a whole triple.

use crate::format::{format_real, format_vec3};
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Geometric parameters of one primitive.
///
/// All values are accepted verbatim; zero or negative dimensions are encoded
/// into the generated source unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Box with three extents.
    ///
    /// ## Generated Statement
    ///
    /// ```text
    /// box([w, h, d]);
    /// ```
    Cube {
        /// Extent along x.
        width: f64,
        /// Extent along y.
        height: f64,
        /// Extent along z.
        depth: f64,
    },

    /// Sphere defined by its radius.
    ///
    /// ## Generated Statement
    ///
    /// ```text
    /// sphere(r=5);
    /// ```
    Sphere {
        /// Radius.
        radius: f64,
    },

    /// Cylinder with equal top and bottom radii.
    ///
    /// ## Generated Statement
    ///
    /// ```text
    /// cylinder(h=10, r=5);
    /// ```
    Cylinder {
        /// Radius.
        radius: f64,
        /// Height.
        height: f64,
    },

    /// Truncated cone with distinct top and bottom radii.
    ///
    /// ## Generated Statement
    ///
    /// ```text
    /// cylinder(h=10, r1=5, r2=3);
    /// ```
    Frustum {
        /// Bottom radius.
        bottom_radius: f64,
        /// Top radius.
        top_radius: f64,
        /// Height.
        height: f64,
    },

    /// Torus, encoded as a full revolution of a circle profile.
    ///
    /// ## Generated Statement
    ///
    /// ```text
    /// rotate_extrude(angle=360) translate([10, 0, 0]) circle(r=2);
    /// ```
    Torus {
        /// Ring radius, the distance from the axis to the tube center.
        major_radius: f64,
        /// Tube radius.
        minor_radius: f64,
    },
}

// =============================================================================
// SHAPE
// =============================================================================

/// A primitive placed in space.
///
/// Construction fixes the geometric parameters; the position defaults to the
/// origin and may be replaced any number of times with [`Shape::set_position`]
/// (last write wins).
///
/// ## Example
///
/// ```rust
/// use scadforge_shapes::Shape;
///
/// let mut sphere = Shape::sphere(5.0);
/// sphere.set_position(1.0, 2.0, 3.0);
/// assert_eq!(
///     sphere.render_statement(),
///     "translate([1.000000, 2.000000, 3.000000]) sphere(r=5.000000);"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    primitive: Primitive,
    position: DVec3,
}

impl Shape {
    /// Create a shape at the origin.
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            position: DVec3::ZERO,
        }
    }

    /// Box with the given width, height, and depth.
    pub fn cube(width: f64, height: f64, depth: f64) -> Self {
        Self::new(Primitive::Cube {
            width,
            height,
            depth,
        })
    }

    /// Sphere with the given radius.
    pub fn sphere(radius: f64) -> Self {
        Self::new(Primitive::Sphere { radius })
    }

    /// Cylinder with the given radius and height.
    pub fn cylinder(radius: f64, height: f64) -> Self {
        Self::new(Primitive::Cylinder { radius, height })
    }

    /// Truncated cone with the given bottom radius, top radius, and height.
    pub fn frustum(bottom_radius: f64, top_radius: f64, height: f64) -> Self {
        Self::new(Primitive::Frustum {
            bottom_radius,
            top_radius,
            height,
        })
    }

    /// Torus with the given ring radius and tube radius.
    pub fn torus(major_radius: f64, minor_radius: f64) -> Self {
        Self::new(Primitive::Torus {
            major_radius,
            minor_radius,
        })
    }

    /// The geometric parameters, fixed at construction.
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// The current position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Replace the position with the given coordinates.
    ///
    /// All three coordinates are stored together; there is no partial update
    /// and no bounds checking. Calling this again overwrites the previous
    /// position entirely.
    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = DVec3::new(x, y, z);
    }

    /// Render the translation wrapper for the current position.
    ///
    /// The wrapper is always emitted, including at the default origin, and
    /// carries a trailing space so the primitive call can be appended
    /// directly.
    pub fn render_position(&self) -> String {
        format!("translate({}) ", format_vec3(self.position))
    }

    /// Render the full OpenSCAD statement for this shape.
    ///
    /// The statement is the translation wrapper followed by the primitive
    /// call and the `;` terminator. Rendering is a pure function of the
    /// shape's current state.
    pub fn render_statement(&self) -> String {
        let body = match &self.primitive {
            Primitive::Cube {
                width,
                height,
                depth,
            } => format!(
                "box([{}, {}, {}]);",
                format_real(*width),
                format_real(*height),
                format_real(*depth)
            ),
            Primitive::Sphere { radius } => {
                format!("sphere(r={});", format_real(*radius))
            }
            Primitive::Cylinder { radius, height } => format!(
                "cylinder(h={}, r={});",
                format_real(*height),
                format_real(*radius)
            ),
            Primitive::Frustum {
                bottom_radius,
                top_radius,
                height,
            } => format!(
                "cylinder(h={}, r1={}, r2={});",
                format_real(*height),
                format_real(*bottom_radius),
                format_real(*top_radius)
            ),
            // The profile circle is offset along x only; the y/z components of
            // the inner translate are the literal zeros of the encoding, not
            // rendered reals.
            Primitive::Torus {
                major_radius,
                minor_radius,
            } => format!(
                "rotate_extrude(angle=360) translate([{}, 0, 0]) circle(r={});",
                format_real(*major_radius),
                format_real(*minor_radius)
            ),
        };
        format!("{}{}", self.render_position(), body)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_defaults_to_origin() {
        let shape = Shape::sphere(5.0);
        assert_eq!(shape.position(), DVec3::ZERO);
        assert_eq!(
            shape.render_position(),
            "translate([0.000000, 0.000000, 0.000000]) "
        );
    }

    #[test]
    fn test_set_position_replaces_all_coordinates() {
        let mut shape = Shape::cube(1.0, 1.0, 1.0);
        shape.set_position(4.0, 5.0, 6.0);
        assert_eq!(shape.position(), DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_set_position_last_write_wins() {
        let mut shape = Shape::cylinder(2.0, 8.0);
        shape.set_position(1.0, 1.0, 1.0);
        shape.set_position(-7.0, 0.0, 3.5);
        assert_eq!(
            shape.render_statement(),
            "translate([-7.000000, 0.000000, 3.500000]) cylinder(h=8.000000, r=2.000000);"
        );
    }

    #[test]
    fn test_render_statement_is_idempotent() {
        let mut shape = Shape::frustum(4.0, 2.0, 9.0);
        shape.set_position(1.0, 2.0, 3.0);
        assert_eq!(shape.render_statement(), shape.render_statement());
    }

    #[test]
    fn test_negative_dimensions_are_encoded_verbatim() {
        let shape = Shape::sphere(-1.0);
        assert_eq!(
            shape.render_statement(),
            "translate([0.000000, 0.000000, 0.000000]) sphere(r=-1.000000);"
        );
    }
}
