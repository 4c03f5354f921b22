use image::buffer::{Pixels, PixelsMut};
use image::{Rgba, RgbaImage};

use crate::channels::ChannelSelection;

/// Walks the selected channels of every pixel in raster order, within a
/// pixel the channels come out in selection order.
pub(crate) struct ChannelIter<'a> {
    pixels: Pixels<'a, Rgba<u8>>,
    selection: &'a ChannelSelection,
    current: Option<&'a Rgba<u8>>,
    channel_idx: usize,
}

impl<'a> ChannelIter<'a> {
    pub fn new(image: &'a RgbaImage, selection: &'a ChannelSelection) -> Self {
        Self {
            pixels: image.pixels(),
            selection,
            current: None,
            channel_idx: 0,
        }
    }
}

impl<'a> Iterator for ChannelIter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.channel_idx == self.selection.len() {
            self.current = None;
            self.channel_idx = 0;
        }
        let pixel = match self.current {
            Some(pixel) => pixel,
            None => {
                let pixel = self.pixels.next()?;
                self.current = Some(pixel);
                pixel
            }
        };

        let channel = self.selection.channels()[self.channel_idx];
        self.channel_idx += 1;

        Some(pixel.0[channel.index()])
    }
}

/// Mutable counterpart of [`ChannelIter`], yields `&mut u8` per selected
/// channel so callers can overwrite single channel values in place.
pub(crate) struct ChannelIterMut<'a> {
    pixels: PixelsMut<'a, Rgba<u8>>,
    selection: &'a ChannelSelection,
    buffered: std::vec::IntoIter<&'a mut u8>,
}

impl<'a> ChannelIterMut<'a> {
    pub fn new(image: &'a mut RgbaImage, selection: &'a ChannelSelection) -> Self {
        Self {
            pixels: image.pixels_mut(),
            selection,
            buffered: Vec::new().into_iter(),
        }
    }
}

impl<'a> Iterator for ChannelIterMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffered.next().or_else(|| {
            let pixel = self.pixels.next()?;
            // the selection holds no duplicate indices, so every slot is
            // taken at most once
            let mut slots: Vec<Option<&'a mut u8>> = pixel.0.iter_mut().map(Some).collect();
            let selected: Vec<&'a mut u8> = self
                .selection
                .channels()
                .iter()
                .filter_map(|channel| slots[channel.index()].take())
                .collect();

            self.buffered = selected.into_iter();
            self.buffered.next()
        })
    }
}
