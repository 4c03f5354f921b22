//! Byte to bit serialization with a fixed terminator.
//!
//! A framed payload is the big endian bit expansion of every payload byte,
//! in input order, followed by the bit pattern of [`END_MARKER`]. The marker
//! is how extraction discovers the payload end, there is no length prefix.

use crate::error::PixelhideError;
use crate::result::Result;

/// Terminator appended behind the payload bits. Interoperating
/// implementations must agree on this constant.
pub const END_MARKER: &[u8; 6] = b"MSGEND";

/// Number of carrier bits the terminator occupies.
pub const END_MARKER_BITS: usize = END_MARKER.len() * 8;

/// Serializes a payload into a bit sequence and appends the end marker.
///
/// Every byte becomes exactly 8 bits, most significant bit first, so leading
/// zero bytes survive the round trip. An empty payload yields just the
/// marker bits.
pub fn frame(payload: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(payload.len() * 8 + END_MARKER_BITS);
    push_bits(&mut bits, payload);
    push_bits(&mut bits, END_MARKER);
    bits
}

/// Cuts the bit sequence at the first end marker and reassembles the
/// payload bytes in front of it.
pub fn unframe(bits: &[u8]) -> Result<Vec<u8>> {
    let marker = marker_bits();
    let at = bits
        .windows(marker.len())
        .position(|window| window == marker)
        .ok_or(PixelhideError::MarkerNotFound)?;

    if at % 8 != 0 {
        return Err(PixelhideError::MisalignedPayload(at));
    }

    Ok(bits[..at]
        .chunks_exact(8)
        .map(|byte_bits| byte_bits.iter().fold(0u8, |byte, bit| (byte << 1) | bit))
        .collect())
}

fn push_bits(bits: &mut Vec<u8>, bytes: &[u8]) {
    for byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
}

fn marker_bits() -> Vec<u8> {
    let mut bits = Vec::with_capacity(END_MARKER_BITS);
    push_bits(&mut bits, END_MARKER);
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_frame_an_empty_payload_as_just_the_marker() {
        let bits = frame(&[]);
        assert_eq!(bits.len(), END_MARKER_BITS);
        assert_eq!(bits, marker_bits());
    }

    #[test]
    fn should_frame_every_byte_as_8_bits() {
        let bits = frame(b"He");
        assert_eq!(bits.len(), 2 * 8 + END_MARKER_BITS);
        // 'H' is 0x48
        assert_eq!(&bits[..8], &[0, 1, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn should_preserve_leading_zero_bytes() {
        let payload = [0x00, 0x01];
        let recovered = unframe(&frame(&payload)).unwrap();
        assert_eq!(
            recovered, payload,
            "a leading zero byte must not collapse into the next byte"
        );
    }

    #[test]
    fn should_round_trip_arbitrary_payloads() {
        let payload = [0x00, 0xff, 0x42, 0x80, 0x01, 0x00];
        assert_eq!(unframe(&frame(&payload)).unwrap(), payload);
    }

    #[test]
    fn should_round_trip_the_empty_payload() {
        assert_eq!(unframe(&frame(&[])).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn should_fail_when_no_marker_is_present() {
        let bits = vec![0u8; 512];
        match unframe(&bits) {
            Err(PixelhideError::MarkerNotFound) => (),
            other => panic!("expected MarkerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_when_the_bit_stream_is_shorter_than_the_marker() {
        match unframe(&[1, 0, 1]) {
            Err(PixelhideError::MarkerNotFound) => (),
            other => panic!("expected MarkerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_on_a_misaligned_marker() {
        let mut bits = vec![0u8; 4];
        bits.extend_from_slice(&marker_bits());

        match unframe(&bits) {
            Err(PixelhideError::MisalignedPayload(4)) => (),
            other => panic!("expected MisalignedPayload(4), got {other:?}"),
        }
    }

    #[test]
    fn should_truncate_at_the_first_marker_occurrence() {
        let mut bits = frame(b"first");
        bits.extend_from_slice(&frame(b"second"));

        assert_eq!(unframe(&bits).unwrap(), b"first");
    }
}
