//! Helpers for building bit-packed test input.

/// Packs bit fields MSB-first into bytes.
#[derive(Default)]
pub struct BitPacker {
    bytes: Vec<u8>,
    used: u8,
}

#[allow(dead_code)]
impl BitPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`.
    pub fn bits(&mut self, value: u32, width: u8) -> &mut Self {
        for i in (0..width).rev() {
            if self.used == 0 {
                self.bytes.push(0);
            }
            let bit = ((value as u64 >> i) & 1) as u8;
            if let Some(last) = self.bytes.last_mut() {
                *last |= bit << (7 - self.used);
            }
            self.used = (self.used + 1) % 8;
        }
        self
    }

    /// Append a signed value as a `width`-bit two's-complement field.
    pub fn sbits(&mut self, value: i32, width: u8) -> &mut Self {
        self.bits(value as u32, width)
    }

    /// Append a single flag bit.
    pub fn flag(&mut self, value: bool) -> &mut Self {
        self.bits(value as u32, 1)
    }

    /// Pad to the next byte boundary.
    pub fn align(&mut self) -> &mut Self {
        self.used = 0;
        self
    }

    /// Append whole bytes (aligning first).
    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.align();
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn finish(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}
