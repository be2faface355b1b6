use crate::Config;
use anyhow::{bail, Result};
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&path)?;

    let config_path = path.join("stockroom.toml");
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    std::fs::write(&config_path, Config::starter_toml())?;
    println!("Created {}", config_path.display());
    println!("Run `stockroom serve` to start the server.");

    Ok(())
}
