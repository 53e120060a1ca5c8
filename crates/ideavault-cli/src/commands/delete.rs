use super::{current_user, open_vault};
use anyhow::{Context, Result};

pub fn run(id: String) -> Result<()> {
    let vault = open_vault()?;
    let mut store = vault.store().context("failed to load ideas")?;

    let idea_id = store.resolve(&id)?;
    store
        .delete(&idea_id, &current_user().id)
        .context(format!("failed to delete {}", idea_id))?;

    println!("Deleted {}", idea_id.short());
    Ok(())
}
