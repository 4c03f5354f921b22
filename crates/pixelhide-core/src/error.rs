use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelhideError {
    /// Represents a missing carrier image file
    #[error("File not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    /// Represents an invalid carrier image, for example a broken or non-image file
    #[error("{} is likely not an image", .0.display())]
    InvalidImageMedia(PathBuf),

    /// Represents a missing payload data file on the inject path
    #[error("File not found: {}", .0.display())]
    DataNotFound(PathBuf),

    /// Represents a channel letter outside of R, G and B
    #[error("Unrecognised channel: {0}")]
    UnrecognizedChannel(char),

    /// Represents a channel letter that was given more than once
    #[error("Duplicate channel: {0}")]
    DuplicateChannel(char),

    /// Represents an empty channel specifier
    #[error("No channels selected")]
    EmptySelection,

    /// Represents a payload that does not fit into the carrier image
    #[error("Payload is too large to be stored inside the image. Max payload size is {capacity_bytes} bytes")]
    PayloadTooLarge { capacity_bytes: usize },

    /// Represents an extraction that found no end marker in the carrier
    #[error("No end marker found, the image most likely carries no hidden data")]
    MarkerNotFound,

    /// Represents an end marker at a non byte aligned bit offset
    #[error("End marker found after {0} bits which is not a whole number of bytes, hidden data is corrupt")]
    MisalignedPayload(usize),

    /// Represents an output path without a usable image file extension
    #[error("Could not determine an image format for '{}'. Please include a valid image file extension", .0.display())]
    UnsupportedOutputFormat(PathBuf),

    /// Represents a failure to read from input.
    #[error("Read error: {source}")]
    ReadError { source: io::Error },

    /// Represents a failure to write the target file. A partial file may have been created.
    #[error("Write error: {source}. A partial file may have been created")]
    WriteError { source: io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] io::Error),
}
