//! # Statement Emitter
//!
//! Renders a shape collection into an ordered sequence of OpenSCAD statement
//! lines, one per shape. A pure transform with no I/O and no failure modes;
//! persistence belongs to the session layer.

use crate::collection::ShapeCollection;

/// Emit one statement line per shape, in insertion order.
///
/// No reordering, no deduplication, no merging: the output sequence maps
/// one-to-one onto the collection.
///
/// ## Example
///
/// ```rust
/// use scadforge_shapes::{emit_statements, Shape, ShapeCollection};
///
/// let mut shapes = ShapeCollection::new();
/// shapes.push(Shape::sphere(5.0));
///
/// let lines = emit_statements(&shapes);
/// assert_eq!(
///     lines,
///     vec!["translate([0.000000, 0.000000, 0.000000]) sphere(r=5.000000);"]
/// );
/// ```
pub fn emit_statements(shapes: &ShapeCollection) -> Vec<String> {
    shapes.iter().map(|shape| shape.render_statement()).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_empty_collection_emits_nothing() {
        let shapes = ShapeCollection::new();
        assert!(emit_statements(&shapes).is_empty());
    }

    #[test]
    fn test_one_line_per_shape() {
        let mut shapes = ShapeCollection::new();
        shapes.push(Shape::cube(1.0, 1.0, 1.0));
        shapes.push(Shape::cube(1.0, 1.0, 1.0));
        let lines = emit_statements(&shapes);
        assert_eq!(lines.len(), 2);
        // Identical shapes stay separate statements.
        assert_eq!(lines[0], lines[1]);
    }
}
