use std::io::Read;
use rawcan::{chunk_frames, CanDevice, CanError, CounterFrames, Pacer, MAX_FRAME_SIZE};

/// How many frames worth of input one stream read may pull in.
const FRAMES_PER_READ: usize = 10;

/// Sends a fixed-count burst of counter frames, pausing between writes.
///
/// The first transmit failure aborts the burst; later frames are never
/// sent.  Returns the number of frames that went out.
pub fn send_counter_burst<D: CanDevice>(
    device: &mut D,
    can_id: u32,
    count: u32,
    pacer: &Pacer,
) -> Result<u64, CanError> {
    let mut sent = 0u64;
    for frame in CounterFrames::new(can_id, count) {
        device.transmit(&frame)?;
        pacer.pause();
        sent += 1;
    }
    Ok(sent)
}

/// Repackages a byte stream into frames and sends them until end of input.
///
/// Each read is fully drained into frames before the next read is issued,
/// so frame boundaries never span two reads.  A zero-byte read ends the
/// stream normally; a read error aborts it.
pub fn send_stream<D: CanDevice, R: Read>(
    device: &mut D,
    can_id: u32,
    pacer: &Pacer,
    mut input: R,
) -> Result<u64, CanError> {
    let mut buf = [0u8; FRAMES_PER_READ * MAX_FRAME_SIZE];
    let mut sent = 0u64;

    loop {
        let n = input
            .read(&mut buf)
            .map_err(|e| CanError::OperationError(e.to_string()))?;
        if n == 0 {
            break;
        }
        log::debug!("read {} bytes", n);

        for frame in chunk_frames(&buf[..n], can_id) {
            device.transmit(&frame)?;
            pacer.pause();
            sent += 1;
            log::debug!("frame written");
        }
    }

    Ok(sent)
}
