pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod submit;
pub mod vote;

use anyhow::{Context, Result};
use ideavault_core::Author;
use ideavault_store::Vault;
use std::env;
use tracing::debug;

/// Voter id used when `IDEAVAULT_USER` is unset.
const DEFAULT_USER: &str = "local-storage-user";

/// The acting user, taken from `IDEAVAULT_USER` and `IDEAVAULT_EMAIL`.
pub fn current_user() -> Author {
    let id = env::var("IDEAVAULT_USER")
        .ok()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let email = env::var("IDEAVAULT_EMAIL").ok();
    Author::from_email(id, email.as_deref())
}

pub fn open_vault() -> Result<Vault> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    let vault = Vault::discover(&cwd)
        .context("not an idea vault (or any parent); run `ideavault init`")?;
    debug!(root = %vault.root().display(), "using vault");
    Ok(vault)
}
