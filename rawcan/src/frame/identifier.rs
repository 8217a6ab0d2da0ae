use bitflags::bitflags;
use crate::constants::{EFF_MASK, SFF_MASK};

bitflags! {
    /// Flag bits packed into the high bits of a 32-bit CAN identifier.
    ///
    /// The values correspond to the format used by the Linux
    /// [SocketCAN][socketcan] API, so a packed identifier can be handed to
    /// the kernel as-is.
    ///
    /// [socketcan]: https://www.kernel.org/doc/Documentation/networking/can.txt
    #[repr(transparent)]
    pub struct IdentifierFlags: u32 {
        /// The frame is using the extended format i.e. 29-bit extended identifiers.
        const EXTENDED = 0x8000_0000;
        /// The frame is a remote transmission request.
        const REMOTE = 0x4000_0000;
        /// The frame is an error frame.
        const ERROR = 0x2000_0000;
    }
}

/// A CAN identifier, tagged by frame format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Id {
    Standard(u16),
    Extended(u32),
}

impl From<u32> for Id {
    fn from(id: u32) -> Self {
        Self::from_bits(id)
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> u32 {
        id.into_bits()
    }
}

impl Id {
    /// Classifies a packed identifier.  A set extended flag wins;
    /// otherwise any value above the 11-bit standard range is extended.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        if bits & IdentifierFlags::EXTENDED.bits() != 0 || (bits & EFF_MASK) > SFF_MASK {
            Self::Extended(bits & EFF_MASK)
        } else {
            Self::Standard((bits & SFF_MASK) as u16)
        }
    }

    /// The bare identifier value, flag bits stripped.
    #[inline]
    pub fn into_bits(self) -> u32 {
        match self {
            Self::Standard(id) => id as u32,
            Self::Extended(id) => id,
        }
    }

    /// The packed wire representation, extended flag included.
    #[inline]
    pub fn wire_bits(self) -> u32 {
        match self {
            Self::Standard(id) => id as u32,
            Self::Extended(id) => id | IdentifierFlags::EXTENDED.bits(),
        }
    }

    #[inline]
    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }
}

/// Parses a hexadecimal identifier, tolerating a `0x` prefix.  Malformed
/// text falls back to id 0 rather than failing.
pub fn id_from_hex(text: &str) -> u32 {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).unwrap_or(0)
}

/// Parses a hexadecimal identifier into its packed wire form: values above
/// the 11-bit standard range get the extended flag set.
pub fn wire_id_from_hex(text: &str) -> u32 {
    let mut id = id_from_hex(text);
    if (id & EFF_MASK) > SFF_MASK {
        id |= IdentifierFlags::EXTENDED.bits();
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_splits_at_the_11_bit_boundary() {
        assert_eq!(Id::from_bits(0x123), Id::Standard(0x123));
        assert_eq!(Id::from_bits(0x7FF), Id::Standard(0x7FF));
        assert_eq!(Id::from_bits(0x800), Id::Extended(0x800));
        assert_eq!(Id::from_bits(0x1ABC_DEF), Id::Extended(0x1ABC_DEF));
    }

    #[test]
    fn a_set_extended_flag_wins() {
        assert_eq!(Id::from_bits(0x8000_0123), Id::Extended(0x123));
    }

    #[test]
    fn wire_bits_round_trip() {
        assert_eq!(Id::Standard(0x123).wire_bits(), 0x123);
        assert_eq!(Id::Extended(0x800).wire_bits(), 0x8000_0800);
        assert_eq!(Id::from_bits(Id::Extended(0x800).wire_bits()), Id::Extended(0x800));
    }

    #[test]
    fn hex_parsing_tolerates_prefix_and_garbage() {
        assert_eq!(id_from_hex("123"), 0x123);
        assert_eq!(id_from_hex("0x123"), 0x123);
        assert_eq!(id_from_hex("0X1abcdef"), 0x1ABC_DEF);
        assert_eq!(id_from_hex("not-hex"), 0);
        assert_eq!(id_from_hex(""), 0);
    }

    #[test]
    fn wire_id_parsing_flags_extended_values() {
        assert_eq!(wire_id_from_hex("123"), 0x123);
        assert_eq!(
            wire_id_from_hex("1abcdef"),
            0x1ABC_DEF | IdentifierFlags::EXTENDED.bits()
        );
    }
}
