//! Decode limits.

/// Bounds applied while decoding untrusted input.
///
/// Decoding already stops when the buffer runs out; the limits bound the
/// amount of work a well-formed but hostile structure can cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum number of records in one shape outline, sentinel included.
    pub max_shape_records: usize,
}

impl DecodeLimits {
    /// Default limits, generous enough for any real-world shape.
    pub const DEFAULT: Self = Self {
        max_shape_records: 1 << 20,
    };

    /// Tight limits for quick structural checks.
    pub const STRICT: Self = Self {
        max_shape_records: 1 << 14,
    };

    /// No limits beyond the size of the input.
    pub const UNLIMITED: Self = Self {
        max_shape_records: usize::MAX,
    };

    /// Create limits with the given shape record bound.
    pub fn new(max_shape_records: usize) -> Self {
        Self { max_shape_records }
    }

    /// Set the shape record bound.
    pub fn with_max_shape_records(mut self, max_shape_records: usize) -> Self {
        self.max_shape_records = max_shape_records;
        self
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let limits = DecodeLimits::STRICT.with_max_shape_records(8);
        assert_eq!(limits.max_shape_records, 8);
        assert_eq!(DecodeLimits::default(), DecodeLimits::DEFAULT);
    }
}
