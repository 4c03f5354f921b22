use std::path::PathBuf;

use clap::Args;
use pixelhide_core::ChannelSelection;

use crate::CliResult;

/// Hides a data file inside the pixels of an image
#[derive(Args, Debug)]
pub struct InjectArgs {
    /// The image file to be used, read only
    #[arg(short = 'i', long = "image", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// The filename to write the final image to
    #[arg(
        short = 'o',
        long = "output",
        value_name = "output image file",
        required = true
    )]
    pub output: PathBuf,

    /// The data file to be hidden
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data: PathBuf,

    /// The colour channel(s) to inject the data into (e.g. -c RG)
    #[arg(
        short = 'c',
        long = "channel",
        value_name = "channels",
        default_value = "B"
    )]
    pub channel: ChannelSelection,
}

impl InjectArgs {
    pub fn run(self) -> CliResult<()> {
        pixelhide_core::commands::inject(&self.image, &self.output, &self.data, &self.channel)
    }
}
