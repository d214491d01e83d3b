pub mod verbose;
pub mod version;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}
