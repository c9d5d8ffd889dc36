use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jeonse-guard",
    version,
    about = "Jeonse ratio calculator with risk bands and a listing-search link"
)]
pub(crate) struct Args {
    #[arg(long, default_value = "config/jeonse-guard.toml")]
    pub(crate) config: PathBuf,
    #[arg(long, default_value = "logs")]
    pub(crate) log_dir: PathBuf,
    /// Mirror logs to stderr. The terminal UI owns the screen, so this is
    /// only accepted together with `--once`.
    #[arg(long, requires = "once")]
    pub(crate) log_to_stderr: bool,
    /// Print one assessment as JSON instead of starting the terminal UI.
    #[arg(long)]
    pub(crate) once: bool,
    #[arg(long, default_value_t = 0, requires = "once")]
    pub(crate) sale_price: u64,
    #[arg(long, default_value_t = 0, requires = "once")]
    pub(crate) deposit: u64,
    #[arg(long, requires = "once")]
    pub(crate) address: Option<String>,
}
