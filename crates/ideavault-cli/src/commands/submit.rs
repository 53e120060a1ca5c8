use super::{current_user, open_vault};
use anyhow::{Context, Result};

pub fn run(title: String, description: String, category: Option<String>, json: bool) -> Result<()> {
    let vault = open_vault()?;
    let mut store = vault.store().context("failed to load ideas")?;

    let idea = store
        .submit(&title, &description, category.as_deref(), current_user())
        .context("failed to submit idea")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&idea)?);
    } else {
        println!("Submitted {} [{}] {}", idea.id.short(), idea.category, idea.title);
    }
    Ok(())
}
