pub mod init;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version)]
#[command(about = "Product catalog API with brand-aware slugs", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "stockroom.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    Serve {
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    Migrate,
    Seed,
}
