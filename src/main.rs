use anyhow::Result;
use picopaper::build::build_site;
use picopaper::config::Config;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_directory(Path::new("."))?;
    build_site(&config)?;
    Ok(())
}
