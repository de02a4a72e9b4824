// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cubefolio")]
#[command(about = "Interactive cube portfolio", long_about = None)]
pub struct Cli {
    /// Disable the text overlay layer
    #[arg(long = "no-overlay", default_value = "false")]
    pub no_overlay: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}
