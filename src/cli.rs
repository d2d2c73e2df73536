use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "dof-viewer")]
#[command(about = "Interactive depth-of-field viewer", long_about = None)]
pub struct Cli {
    /// Hide the slider panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// JSON slider panel configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Sync presentation to the display refresh
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub vsync: bool,
}
