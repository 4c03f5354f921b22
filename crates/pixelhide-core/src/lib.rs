//! # Pixelhide Core
//!
//! Hides an arbitrary binary payload inside the least significant bits of
//! selected color channels of an image, and recovers it later. A payload is
//! framed with a fixed end marker, serialized to single bits and written
//! into the pixel grid in raster order, cycling through the selected
//! channels within each pixel.
//!
//! Lossless formats such as PNG preserve the hidden data, lossy formats
//! such as JPEG will most likely destroy it.
//!
//! # Usage Examples
//!
//! ## Hide data inside an image in memory
//!
//! ```rust
//! use image::RgbaImage;
//! use pixelhide_core::{codec, framing, ChannelSelection};
//!
//! let mut carrier = RgbaImage::new(64, 64);
//! let selection = ChannelSelection::parse("RGB").expect("valid channel spec");
//!
//! let bits = framing::frame(b"Hello, World!");
//! codec::inject(&mut carrier, &bits, &selection).expect("payload fits the carrier");
//!
//! let recovered = framing::unframe(&codec::extract(&carrier, &selection))
//!     .expect("carrier holds a framed payload");
//! assert_eq!(recovered, b"Hello, World!");
//! ```
//!
//! ## Hide a file inside an image file
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pixelhide_core::{commands, ChannelSelection};
//!
//! commands::inject(
//!     Path::new("carrier.png"),
//!     Path::new("carrier-with-secret.png"),
//!     Path::new("secret.bin"),
//!     &ChannelSelection::default(),
//! )
//! .expect("Failed to hide file in image");
//! ```

#![warn(clippy::redundant_else)]

pub mod carrier;
pub mod channels;
pub mod codec;
pub mod commands;
pub mod error;
pub mod framing;
mod iterators;
pub mod result;

pub use crate::carrier::{Carrier, Persist};
pub use crate::channels::{ChannelSelection, ColorChannel};
pub use crate::error::PixelhideError;
pub use crate::result::Result;
