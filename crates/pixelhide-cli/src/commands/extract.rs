use std::path::PathBuf;

use clap::Args;
use pixelhide_core::ChannelSelection;

use crate::CliResult;

/// Recovers a hidden data file from the pixels of an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// The image file to be used, read only
    #[arg(short = 'i', long = "image", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// The filename to write the extracted file under
    #[arg(
        short = 'o',
        long = "output",
        value_name = "output file",
        required = true
    )]
    pub output: PathBuf,

    /// The colour channel(s) to extract the data from (e.g. -c RG)
    #[arg(
        short = 'c',
        long = "channel",
        value_name = "channels",
        default_value = "B"
    )]
    pub channel: ChannelSelection,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        pixelhide_core::commands::extract(&self.image, &self.output, &self.channel)
    }
}
