//! # Interactive Shape Collector
//!
//! Menu-driven construction of a shape collection from a prompt stream.
//!
//! The collector is generic over its input and output so whole dialogues run
//! against in-memory buffers in tests. Invalid entries never construct a
//! shape: an unknown menu selection or a malformed number tuple is reported
//! on the output stream and the prompt repeats, so only validated tuples
//! reach the shape model.

use crate::error::SessionError;
use log::debug;
use scadforge_shapes::{Shape, ShapeCollection};
use std::io::{BufRead, Write};

const MENU_PROMPT: &str =
    "Select a shape to add (1: cube, 2: sphere, 3: cylinder, 4: frustum, 5: torus, 0: finish): ";

/// One selectable entry of the shape menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Cube,
    Sphere,
    Cylinder,
    Frustum,
    Torus,
}

impl Selection {
    fn label(self) -> &'static str {
        match self {
            Selection::Cube => "cube",
            Selection::Sphere => "sphere",
            Selection::Cylinder => "cylinder",
            Selection::Frustum => "frustum",
            Selection::Torus => "torus",
        }
    }
}

/// Prompt-driven collector producing a [`ShapeCollection`].
///
/// ## Example
///
/// ```rust
/// use scadforge_session::ShapeCollector;
///
/// let script = "2\n5\n1 2 3\n0\n";
/// let mut prompts = Vec::new();
/// let mut collector = ShapeCollector::new(script.as_bytes(), &mut prompts);
/// let shapes = collector.collect().unwrap();
/// assert_eq!(shapes.len(), 1);
/// ```
pub struct ShapeCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ShapeCollector<R, W> {
    /// Wrap an input and a prompt output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu loop until the finish sentinel (or end of input at the
    /// menu) and return the shapes in the order the user entered them.
    pub fn collect(&mut self) -> Result<ShapeCollection, SessionError> {
        let mut shapes = ShapeCollection::new();
        while let Some(selection) = self.prompt_selection()? {
            shapes.push(self.prompt_shape(selection)?);
        }
        debug!("collected {} shapes", shapes.len());
        Ok(shapes)
    }

    /// Show the menu until a valid selection arrives.
    ///
    /// Returns `None` for the finish sentinel and for end of input, which is
    /// treated the same way.
    fn prompt_selection(&mut self) -> Result<Option<Selection>, SessionError> {
        loop {
            let Some(line) = self.prompt_line(MENU_PROMPT)? else {
                return Ok(None);
            };
            match line.trim() {
                "0" => return Ok(None),
                "1" => return Ok(Some(Selection::Cube)),
                "2" => return Ok(Some(Selection::Sphere)),
                "3" => return Ok(Some(Selection::Cylinder)),
                "4" => return Ok(Some(Selection::Frustum)),
                "5" => return Ok(Some(Selection::Torus)),
                _ => writeln!(self.output, "Invalid selection. Please try again.")?,
            }
        }
    }

    /// Prompt for the dimensions and position of the selected shape.
    fn prompt_shape(&mut self, selection: Selection) -> Result<Shape, SessionError> {
        let mut shape = match selection {
            Selection::Cube => {
                let dims =
                    self.read_reals("Enter the cube's width, height, and depth: ", 3)?;
                Shape::cube(dims[0], dims[1], dims[2])
            }
            Selection::Sphere => {
                let dims = self.read_reals("Enter the sphere's radius: ", 1)?;
                Shape::sphere(dims[0])
            }
            Selection::Cylinder => {
                let dims = self.read_reals("Enter the cylinder's radius and height: ", 2)?;
                Shape::cylinder(dims[0], dims[1])
            }
            Selection::Frustum => {
                let dims = self.read_reals(
                    "Enter the frustum's bottom radius, top radius, and height: ",
                    3,
                )?;
                Shape::frustum(dims[0], dims[1], dims[2])
            }
            Selection::Torus => {
                let dims =
                    self.read_reals("Enter the torus's ring radius and tube radius: ", 2)?;
                Shape::torus(dims[0], dims[1])
            }
        };

        let prompt = format!("Enter the {}'s x, y, z position: ", selection.label());
        let position = self.read_reals(&prompt, 3)?;
        shape.set_position(position[0], position[1], position[2]);
        Ok(shape)
    }

    /// Read a whitespace-separated tuple of `count` reals, re-prompting until
    /// the whole tuple parses. End of input mid-tuple is an error.
    fn read_reals(&mut self, prompt: &str, count: usize) -> Result<Vec<f64>, SessionError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Err(SessionError::UnexpectedEof);
            };
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() == count {
                let parsed: Result<Vec<f64>, _> =
                    tokens.iter().map(|token| token.parse()).collect();
                if let Ok(values) = parsed {
                    return Ok(values);
                }
            }
            writeln!(
                self.output,
                "Please enter {count} numbers separated by spaces."
            )?;
        }
    }

    /// Write a prompt, flush, and read one line. Returns `None` at end of
    /// input.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scadforge_shapes::Primitive;

    fn collect(script: &str) -> ShapeCollection {
        let mut prompts = Vec::new();
        ShapeCollector::new(script.as_bytes(), &mut prompts)
            .collect()
            .unwrap()
    }

    #[test]
    fn test_collects_a_positioned_cube() {
        let shapes = collect("1\n10 20 30\n1 2 3\n0\n");
        assert_eq!(shapes.len(), 1);
        let shape = shapes.iter().next().unwrap();
        assert_eq!(
            *shape.primitive(),
            Primitive::Cube {
                width: 10.0,
                height: 20.0,
                depth: 30.0
            }
        );
        assert_eq!(
            shape.render_statement(),
            "translate([1.000000, 2.000000, 3.000000]) box([10.000000, 20.000000, 30.000000]);"
        );
    }

    #[test]
    fn test_collects_shapes_in_entry_order() {
        let shapes = collect("2\n5\n0 0 0\n5\n10 2\n0 0 0\n0\n");
        let kinds: Vec<_> = shapes.iter().map(|s| s.primitive().clone()).collect();
        assert!(matches!(kinds[0], Primitive::Sphere { .. }));
        assert!(matches!(kinds[1], Primitive::Torus { .. }));
    }

    #[test]
    fn test_invalid_selection_reprompts() {
        let script = "9\nx\n2\n5\n0 0 0\n0\n";
        let mut prompts = Vec::new();
        let shapes = ShapeCollector::new(script.as_bytes(), &mut prompts)
            .collect()
            .unwrap();
        assert_eq!(shapes.len(), 1);
        let text = String::from_utf8(prompts).unwrap();
        assert_eq!(text.matches("Invalid selection").count(), 2);
    }

    #[test]
    fn test_malformed_tuple_reprompts() {
        let script = "1\n10 twenty 30\n10 20\n10 20 30\n0 0 0\n0\n";
        let mut prompts = Vec::new();
        let shapes = ShapeCollector::new(script.as_bytes(), &mut prompts)
            .collect()
            .unwrap();
        assert_eq!(shapes.len(), 1);
        let text = String::from_utf8(prompts).unwrap();
        assert_eq!(text.matches("Please enter 3 numbers").count(), 2);
    }

    #[test]
    fn test_end_of_input_at_menu_finalizes() {
        let shapes = collect("");
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_end_of_input_mid_shape_errors() {
        let script = "1\n10 20 30\n";
        let mut prompts = Vec::new();
        let err = ShapeCollector::new(script.as_bytes(), &mut prompts)
            .collect()
            .unwrap_err();
        assert!(matches!(err, SessionError::UnexpectedEof));
    }

    #[test]
    fn test_negative_dimensions_are_accepted() {
        let shapes = collect("2\n-5\n0 0 0\n0\n");
        let shape = shapes.iter().next().unwrap();
        assert_eq!(*shape.primitive(), Primitive::Sphere { radius: -5.0 });
    }
}
