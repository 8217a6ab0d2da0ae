use crate::constants::{EFF_MASK, EXTENDED_FILTER_MASK, SFF_MASK};
use crate::frame::{id_from_hex, IdentifierFlags};

/// A receive filter over packed CAN identifiers.
///
/// A frame passes when its masked identifier equals the masked target.
/// The layout matches the kernel's `can_filter`, so the same value drives
/// in-process matching and the raw socket's filter option bit-for-bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CanFilter {
    pub can_id: u32,
    pub can_mask: u32,
    pub extended: bool,
}

impl CanFilter {
    /// Parses a filter spec of the form `id[,mask]`, both hexadecimal.
    ///
    /// Targets above the 11-bit standard range are stored with the
    /// extended flag set.  Without an explicit mask, a standard target
    /// matches on all 11 id bits and an extended one on all 29 id bits
    /// plus the format flags.
    pub fn from_spec(spec: &str) -> Self {
        let (id_part, mask_part) = match spec.split_once(',') {
            Some((id, mask)) => (id, Some(mask)),
            None => (spec, None),
        };

        let mut can_id = id_from_hex(id_part);
        let extended = (can_id & EFF_MASK) > SFF_MASK;
        if extended {
            can_id |= IdentifierFlags::EXTENDED.bits();
        }

        let can_mask = match mask_part {
            Some(mask) => id_from_hex(mask),
            None if extended => EXTENDED_FILTER_MASK,
            None => SFF_MASK,
        };

        Self {
            can_id,
            can_mask,
            extended,
        }
    }

    /// Whether a packed identifier passes this filter.
    #[inline]
    pub fn matches(&self, can_id: u32) -> bool {
        (can_id & self.can_mask) == (self.can_id & self.can_mask)
    }
}
