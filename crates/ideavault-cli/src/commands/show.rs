use super::open_vault;
use anyhow::{Context, Result};

pub fn run(id: String, json: bool) -> Result<()> {
    let vault = open_vault()?;
    let store = vault.store().context("failed to load ideas")?;

    let idea_id = store.resolve(&id)?;
    let idea = store
        .get(&idea_id)
        .context(format!("idea '{}' not found", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(idea)?);
        return Ok(());
    }

    println!("idea {}", idea.id.hex());
    println!("Author:   {} ({})", idea.author.display_name, idea.author.id);
    println!("Date:     {}", idea.created_at.format("%Y-%m-%d %H:%M:%S %Z"));
    println!("Category: {}", idea.category);
    println!("Votes:    {}", idea.vote_count);
    println!();
    println!("    {}", idea.title);
    println!();
    println!("    {}", idea.description);

    if !idea.voters.is_empty() {
        println!();
        println!("Voters:");
        for (voter, direction) in &idea.voters {
            println!("  {:<4} {}", direction, voter);
        }
    }
    Ok(())
}
