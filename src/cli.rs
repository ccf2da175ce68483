use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input Tiled .json map (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,
    /// Print progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// `None` means the map comes from standard input.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
