use std::io::Write;
use rawcan::{CanDevice, CanError};

/// Tracks the identifier of the previously reported frame, so diagnostic
/// output only appears when the id actually changes.
#[derive(Debug, Default)]
pub struct IdChangeReporter {
    last_id: u32,
}

impl IdChangeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new identifier when it differs from the last reported
    /// one, updating the baseline.  The initial baseline is id 0.
    pub fn observe(&mut self, can_id: u32) -> Option<u32> {
        if can_id == self.last_id {
            return None;
        }
        self.last_id = can_id;
        Some(can_id)
    }
}

/// Receives frames and forwards their payload bytes, and nothing else, to
/// `out`.
///
/// A `count` of zero runs until a read fails; otherwise exactly `count`
/// frames are consumed.  Identifier changes are reported on stderr when a
/// reporter is supplied.
pub fn receive_frames<D: CanDevice, W: Write>(
    device: &mut D,
    count: u32,
    out: &mut W,
    mut reporter: Option<&mut IdChangeReporter>,
) -> Result<u64, CanError> {
    let mut received = 0u64;

    while count == 0 || received < count as u64 {
        let frame = device.receive()?;

        out.write_all(frame.data())
            .and_then(|_| out.flush())
            .map_err(|e| CanError::OperationError(e.to_string()))?;
        received += 1;

        if let Some(reporter) = reporter.as_mut() {
            if let Some(id) = reporter.observe(frame.wire_id()) {
                eprintln!("Id: {:08x}", id);
            }
        }
    }

    Ok(received)
}
