use anyhow::{Context, Result};
use ideavault_store::Vault;
use std::env;

pub fn run() -> Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    let vault = Vault::init(&cwd).context("failed to initialize vault")?;
    println!("Initialized empty idea vault in {}", vault.dir().display());
    Ok(())
}
