//! Diagnostic field paths.
//!
//! Decoders name the field they are reading so that an error can say
//! exactly where decoding stopped, e.g. `Shape::ShapeRecord[3]::MoveDeltaX`.
//! A path is a borrowed chain of segments on the stack; it is only rendered
//! to a `String` when an error is built.

use crate::error::{Result, SwfError};
use std::fmt;

/// A `::`-separated chain of field names.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath<'a> {
    parent: Option<&'a FieldPath<'a>>,
    name: &'a str,
    index: Option<usize>,
}

impl<'a> FieldPath<'a> {
    /// Create the root of a path.
    ///
    /// An empty name is a caller bug and is rejected.
    pub fn root(name: &'a str) -> Result<Self> {
        if name.is_empty() {
            return Err(SwfError::invalid_argument(
                "field_name",
                "field name must not be empty",
            ));
        }

        Ok(Self {
            parent: None,
            name,
            index: None,
        })
    }

    /// Create a child segment below this path.
    pub fn child<'b>(&'b self, name: &'b str) -> FieldPath<'b> {
        FieldPath {
            parent: Some(self),
            name,
            index: None,
        }
    }

    /// Create an indexed child segment, rendered as `name[index]`.
    pub fn indexed<'b>(&'b self, name: &'b str, index: usize) -> FieldPath<'b> {
        FieldPath {
            parent: Some(self),
            name,
            index: Some(index),
        }
    }

    /// Name of the last segment.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Number of segments in the path.
    pub fn depth(&self) -> usize {
        1 + self.parent.map_or(0, FieldPath::depth)
    }
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            write!(f, "{}::", parent)?;
        }
        f.write_str(self.name)?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let root = FieldPath::root("Shape").unwrap();
        let record = root.indexed("ShapeRecord", 3);
        let field = record.child("MoveDeltaX");

        assert_eq!(field.to_string(), "Shape::ShapeRecord[3]::MoveDeltaX");
        assert_eq!(field.name(), "MoveDeltaX");
        assert_eq!(field.depth(), 3);
    }

    #[test]
    fn test_empty_root_rejected() {
        let err = FieldPath::root("").unwrap_err();
        assert!(matches!(
            err,
            SwfError::InvalidArgument {
                argument: "field_name",
                ..
            }
        ));
    }
}
