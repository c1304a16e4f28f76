//! The file element contract shared by every decoded value.
//!
//! Primitive values and composite structures alike remember where they
//! started and how many bits they consumed. For a composite, the bit length
//! is the sum of its present children; absent optional children contribute
//! nothing, and padding skipped by byte alignment belongs to no element.

/// A decoded value that knows its place in the input.
pub trait FileElement {
    /// Absolute bit offset from the start of the buffer where the element began.
    fn bit_position(&self) -> u64;

    /// Total number of bits consumed, including all nested elements.
    fn bit_length(&self) -> u64;

    /// Absolute bit offset just past the element's last bit.
    fn bit_end(&self) -> u64 {
        self.bit_position() + self.bit_length()
    }
}

/// A child slot of a composite element: a present element, an optional one,
/// or a list of elements.
///
/// This lets [`add_bit_lengths`] sum heterogeneous children uniformly.
pub trait ElementSlot {
    /// Bits occupied by this slot (0 for an absent optional).
    fn occupied_bits(&self) -> u64;
}

impl<T: FileElement> ElementSlot for T {
    fn occupied_bits(&self) -> u64 {
        self.bit_length()
    }
}

impl<T: FileElement> ElementSlot for Option<T> {
    fn occupied_bits(&self) -> u64 {
        self.as_ref().map_or(0, FileElement::bit_length)
    }
}

impl<T: FileElement> ElementSlot for Vec<T> {
    fn occupied_bits(&self) -> u64 {
        self.iter().map(FileElement::bit_length).sum()
    }
}

/// Sum the bit lengths of the given child slots.
///
/// # Example
///
/// ```
/// use oxiswf_core::element::add_bit_lengths;
/// use oxiswf_core::types::{Flag, UBits};
///
/// let flag = Flag::new(true, 0);
/// let width = UBits::new(5, 5, 1);
/// let absent: Option<UBits> = None;
///
/// assert_eq!(add_bit_lengths(&[&flag, &width, &absent]), 6);
/// ```
pub fn add_bit_lengths(slots: &[&dyn ElementSlot]) -> u64 {
    slots.iter().map(|slot| slot.occupied_bits()).sum()
}
