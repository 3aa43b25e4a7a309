use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tatami")]
#[command(version, about = "Sprite sheet generator", long_about = None)]
pub struct CliArgs {
    /// Directory containing the images to assemble
    #[arg(short, long, value_name = "DIR")]
    pub input_path: PathBuf,

    /// Destination file for the sprite sheet [default: <input-path>.png]
    #[arg(short, long, value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Trim transparent borders from each image before layout
    #[arg(long)]
    pub trim: bool,

    /// Crop every image to one region: 'smallest', 'biggest',
    /// 'left,top,width,height', or the index of an image to copy the size of
    #[arg(long, value_name = "SPEC")]
    pub crop: Option<String>,

    /// Rescale the finished sheet by this factor (values above 1 are read
    /// as tenths, so 3 means 0.3)
    #[arg(long, value_name = "FACTOR")]
    pub scale: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Immutable run configuration, resolved once from the parsed arguments
/// and passed by reference into every pipeline stage.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub trim: bool,
    pub crop: Option<String>,
    pub scale: Option<String>,
    pub verbose: bool,
}

impl Options {
    pub fn from_args(args: CliArgs) -> Self {
        let output = args
            .output_path
            .unwrap_or_else(|| args.input_path.with_extension("png"));

        Self {
            input: args.input_path,
            output,
            trim: args.trim,
            crop: args.crop,
            scale: args.scale,
            verbose: args.verbose,
        }
    }
}
