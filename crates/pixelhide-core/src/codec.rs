//! LSB encoder and decoder over an [`RgbaImage`] carrier.
//!
//! Both directions walk the pixels in raster order (row by row, left to
//! right) and cycle through the selected color channels within each pixel.
//! The encoder overwrites only bit 0 of each visited channel, the decoder
//! reads bit 0 of every visited channel across the whole image.

use image::RgbaImage;

use crate::channels::ChannelSelection;
use crate::error::PixelhideError;
use crate::framing::END_MARKER;
use crate::iterators::{ChannelIter, ChannelIterMut};
use crate::result::Result;

/// Number of bits the carrier can hold with the given selection.
pub fn capacity_bits(image: &RgbaImage, selection: &ChannelSelection) -> usize {
    image.width() as usize * image.height() as usize * selection.len()
}

/// Largest payload, in bytes, that fits the carrier next to the end marker.
pub fn max_payload_bytes(image: &RgbaImage, selection: &ChannelSelection) -> usize {
    (capacity_bits(image, selection) / 8).saturating_sub(END_MARKER.len())
}

/// Writes the framed bit sequence into the least significant bits of the
/// selected channels.
///
/// The capacity is verified up front, on failure the image is left
/// untouched. Channels and pixels beyond the last payload bit are never
/// modified.
pub fn inject(image: &mut RgbaImage, bits: &[u8], selection: &ChannelSelection) -> Result<()> {
    if bits.len() > capacity_bits(image, selection) {
        return Err(PixelhideError::PayloadTooLarge {
            capacity_bytes: max_payload_bytes(image, selection),
        });
    }

    for (channel, bit) in ChannelIterMut::new(image, selection).zip(bits.iter().copied()) {
        *channel = (*channel & 0xfe) | bit;
    }

    Ok(())
}

/// Reads the least significant bit of every selected channel across the
/// entire image.
///
/// The decoder does not know the payload length, the end is discovered
/// later by the marker search in [`crate::framing::unframe`].
pub fn extract(image: &RgbaImage, selection: &ChannelSelection) -> Vec<u8> {
    ChannelIter::new(image, selection)
        .map(|channel| channel & 0x01)
        .collect()
}
