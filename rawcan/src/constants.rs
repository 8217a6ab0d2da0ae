/// Mask for standard identifiers.
pub const SFF_MASK: u32 = 0x0000_07FF;

/// Mask for extended identifiers.
pub const EFF_MASK: u32 = 0x1FFF_FFFF;
/// The max sizeof can-frame's data.
pub const MAX_FRAME_SIZE: usize = 8;
/// Wire value standing in for an identifier that was never configured.
pub const NO_CAN_ID: u32 = 0xFFFF_FFFF;
/// Derived filter mask for extended targets: all 29 id bits plus the
/// extended and remote flags, the error bit left out.
pub const EXTENDED_FILTER_MASK: u32 = 0xDFFF_FFFF;
/// Floor applied to any non-zero inter-frame interval, in microseconds.
pub const MIN_INTERVAL_US: u64 = 100;
