use std::str::FromStr;

use crate::error::PixelhideError;
use crate::result::Result;

/// One color component of an RGB(A) pixel, by its index within the pixel tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ColorChannel {
    pub fn index(self) -> usize {
        self as usize
    }

    fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Ok(Self::Red),
            'G' => Ok(Self::Green),
            'B' => Ok(Self::Blue),
            other => Err(PixelhideError::UnrecognizedChannel(other)),
        }
    }
}

/// An ordered, duplicate free, non empty set of color channels.
///
/// The order of the channels decides the per pixel cycling order when
/// bits are written to or read from a carrier image.
///
/// ## Example of usage
/// ```rust
/// use pixelhide_core::channels::{ChannelSelection, ColorChannel};
///
/// let selection = ChannelSelection::parse("rg").expect("valid channel spec");
/// assert_eq!(
///     selection.channels(),
///     &[ColorChannel::Red, ColorChannel::Green]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSelection(Vec<ColorChannel>);

impl ChannelSelection {
    /// parses a case insensitive specifier like `"RG"` into an ordered selection
    pub fn parse(spec: &str) -> Result<Self> {
        let mut channels: Vec<ColorChannel> = Vec::with_capacity(spec.len());
        for letter in spec.chars() {
            let channel = ColorChannel::from_letter(letter)?;
            if channels.contains(&channel) {
                return Err(PixelhideError::DuplicateChannel(
                    letter.to_ascii_uppercase(),
                ));
            }
            channels.push(channel);
        }
        if channels.is_empty() {
            return Err(PixelhideError::EmptySelection);
        }

        Ok(Self(channels))
    }

    pub fn channels(&self) -> &[ColorChannel] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ChannelSelection {
    /// the blue channel only, matching the CLI default of `-c B`
    fn default() -> Self {
        Self(vec![ColorChannel::Blue])
    }
}

impl FromStr for ChannelSelection {
    type Err = PixelhideError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_single_channel() {
        let selection = ChannelSelection::parse("B").unwrap();
        assert_eq!(selection.channels(), &[ColorChannel::Blue]);
    }

    #[test]
    fn should_parse_case_insensitive_and_keep_the_input_order() {
        let lower = ChannelSelection::parse("rg").unwrap();
        let upper = ChannelSelection::parse("RG").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.channels(), &[ColorChannel::Red, ColorChannel::Green]);
    }

    #[test]
    fn should_parse_all_three_channels_in_any_order() {
        let selection = ChannelSelection::parse("bgr").unwrap();
        assert_eq!(
            selection.channels(),
            &[ColorChannel::Blue, ColorChannel::Green, ColorChannel::Red]
        );
    }

    #[test]
    fn should_reject_duplicate_channels() {
        match ChannelSelection::parse("rr") {
            Err(PixelhideError::DuplicateChannel('R')) => (),
            other => panic!("expected DuplicateChannel, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_duplicates_across_mixed_case() {
        match ChannelSelection::parse("Gg") {
            Err(PixelhideError::DuplicateChannel('G')) => (),
            other => panic!("expected DuplicateChannel, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_unrecognised_letters() {
        match ChannelSelection::parse("X") {
            Err(PixelhideError::UnrecognizedChannel('X')) => (),
            other => panic!("expected UnrecognizedChannel, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_an_empty_spec() {
        match ChannelSelection::parse("") {
            Err(PixelhideError::EmptySelection) => (),
            other => panic!("expected EmptySelection, got {other:?}"),
        }
    }

    #[test]
    fn should_default_to_the_blue_channel() {
        assert_eq!(
            ChannelSelection::default().channels(),
            &[ColorChannel::Blue]
        );
    }
}
