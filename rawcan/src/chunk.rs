use crate::constants::MAX_FRAME_SIZE;
use crate::frame::CanFrame;

/// Splits a byte buffer into data frames of at most eight bytes each,
/// preserving byte order.
///
/// Every frame carries the given packed identifier; the final frame holds
/// the remainder.  An empty buffer yields no frames at all.
pub fn chunk_frames(buf: &[u8], can_id: u32) -> Vec<CanFrame> {
    buf.chunks(MAX_FRAME_SIZE)
        .filter_map(|chunk| CanFrame::from_wire(can_id, chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NO_CAN_ID;

    #[test]
    fn twenty_bytes_make_three_frames() {
        let buf: Vec<u8> = (0u8..20).collect();
        let frames = chunk_frames(&buf, 0x100);

        let lengths: Vec<usize> = frames.iter().map(CanFrame::length).collect();
        assert_eq!(lengths, vec![8, 8, 4]);
        assert!(frames.iter().all(|f| f.wire_id() == 0x100));
    }

    #[test]
    fn concatenated_payloads_reproduce_the_buffer() {
        let buf: Vec<u8> = (0u8..=41).collect();
        let rejoined: Vec<u8> = chunk_frames(&buf, 0x100)
            .iter()
            .flat_map(|f| f.data().to_vec())
            .collect();
        assert_eq!(rejoined, buf);
    }

    #[test]
    fn empty_input_yields_no_frames() {
        assert!(chunk_frames(&[], 0x100).is_empty());
    }

    #[test]
    fn exact_multiples_have_no_short_tail() {
        let frames = chunk_frames(&[0u8; 16], NO_CAN_ID);
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|f| f.length() == MAX_FRAME_SIZE));
        assert!(frames.iter().all(|f| f.wire_id() == NO_CAN_ID));
    }
}
