mod identifier;
pub use identifier::*;

use std::fmt::{self, Display, Formatter, Write as _};
use crate::constants::MAX_FRAME_SIZE;

/// A classic CAN data frame: packed identifier, payload length and up to
/// eight payload bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CanFrame {
    can_id: u32,
    length: usize,
    data: [u8; MAX_FRAME_SIZE],
}

impl CanFrame {
    /// Builds a frame from an identifier and payload.  Returns `None` when
    /// the payload does not fit a classic frame.
    pub fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        Self::from_wire(id.into().wire_bits(), data)
    }

    /// Builds a frame around an already-packed identifier, flag bits and
    /// all.
    pub fn from_wire(can_id: u32, data: &[u8]) -> Option<Self> {
        if data.len() > MAX_FRAME_SIZE {
            log::warn!("payload of {} bytes does not fit a classic frame", data.len());
            return None;
        }
        let mut buf = [0u8; MAX_FRAME_SIZE];
        buf[..data.len()].copy_from_slice(data);
        Some(Self {
            can_id,
            length: data.len(),
            data: buf,
        })
    }

    #[inline]
    pub fn id(&self) -> Id {
        Id::from_bits(self.can_id)
    }

    /// The packed wire identifier, flag bits included.
    #[inline]
    pub fn wire_id(&self) -> u32 {
        self.can_id
    }

    #[inline]
    pub fn is_extended(&self) -> bool {
        self.id().is_extended()
    }

    /// Only the first `length` bytes of the buffer are meaningful.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data[..self.length]
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Display for CanFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let data_str = self.data().iter().fold(String::new(), |mut out, &b| {
            let _ = write!(out, " {b:02x}");
            out
        });
        write!(
            f,
            "{:08x}{} [{}]{}",
            self.can_id,
            if self.is_extended() { "x" } else { "" },
            self.length,
            data_str,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversize_payloads() {
        assert!(CanFrame::new(0x123u32, &[0u8; MAX_FRAME_SIZE]).is_some());
        assert!(CanFrame::new(0x123u32, &[0u8; MAX_FRAME_SIZE + 1]).is_none());
    }

    #[test]
    fn exposes_only_the_meaningful_bytes() {
        let frame = CanFrame::new(0x123u32, &[1, 2, 3]).unwrap();
        assert_eq!(frame.length(), 3);
        assert_eq!(frame.data(), &[1, 2, 3]);
    }

    #[test]
    fn extended_ids_are_packed_with_the_flag() {
        let frame = CanFrame::new(0x1ABC_DEFu32, &[]).unwrap();
        assert_eq!(frame.wire_id(), 0x81AB_CDEF);
        assert!(frame.is_extended());
        assert_eq!(frame.id(), Id::Extended(0x1ABC_DEF));
    }
}
