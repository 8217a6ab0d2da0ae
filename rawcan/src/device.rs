use crate::error::CanError;
use crate::frame::CanFrame;

/// Blocking frame transport seam between the send/receive loops and the
/// socket layer (or a test double).
pub trait CanDevice {
    /// Transmits one frame; a short write is an error.
    fn transmit(&mut self, frame: &CanFrame) -> Result<(), CanError>;

    /// Blocks until one frame arrives.
    fn receive(&mut self) -> Result<CanFrame, CanError>;
}
