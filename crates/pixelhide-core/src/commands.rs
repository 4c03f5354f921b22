//! File level operations behind the CLI subcommands.

use std::fs;
use std::path::Path;

use log::info;

use crate::carrier::{Carrier, Persist};
use crate::channels::ChannelSelection;
use crate::codec;
use crate::error::PixelhideError;
use crate::framing;
use crate::result::Result;

/// Hides the content of `data_file` inside `image_file` and writes the
/// resulting image to `output_file`.
pub fn inject(
    image_file: &Path,
    output_file: &Path,
    data_file: &Path,
    selection: &ChannelSelection,
) -> Result<()> {
    let mut carrier = Carrier::from_file(image_file)?;
    let payload = fs::read(data_file).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => PixelhideError::DataNotFound(data_file.to_path_buf()),
        _ => PixelhideError::ReadError { source },
    })?;

    let bits = framing::frame(&payload);
    codec::inject(carrier.image_mut(), &bits, selection)?;

    info!("injected {} bytes of data", bits.len() / 8);
    info!("writing to file: {}", output_file.display());
    carrier.save_as(output_file)
}

/// Recovers a payload hidden inside `image_file` and writes it to
/// `output_file`.
pub fn extract(image_file: &Path, output_file: &Path, selection: &ChannelSelection) -> Result<()> {
    let carrier = Carrier::from_file(image_file)?;

    let bits = codec::extract(carrier.image(), selection);
    let payload = framing::unframe(&bits)?;

    info!("read {} bytes of data", payload.len());
    info!("writing to file: {}", output_file.display());
    fs::write(output_file, &payload).map_err(|source| PixelhideError::WriteError { source })
}
