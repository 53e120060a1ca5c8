use super::{current_user, open_vault};
use anyhow::{Context, Result};
use ideavault_core::VoteDirection;

pub fn run(id: String, direction: VoteDirection, json: bool) -> Result<()> {
    let vault = open_vault()?;
    let mut store = vault.store().context("failed to load ideas")?;
    let voter = current_user();

    let idea_id = store.resolve(&id)?;
    let idea = store
        .vote(&idea_id, &voter.id, direction)
        .context(format!("failed to vote on {}", idea_id))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": idea.id.hex(),
                "vote_count": idea.vote_count,
                "your_vote": idea.vote_of(&voter.id),
            }))?
        );
        return Ok(());
    }

    match idea.vote_of(&voter.id) {
        Some(current) => println!(
            "{} {}: voted {} ({} votes)",
            idea.id.short(),
            idea.title,
            current,
            idea.vote_count
        ),
        None => println!(
            "{} {}: vote withdrawn ({} votes)",
            idea.id.short(),
            idea.title,
            idea.vote_count
        ),
    }
    Ok(())
}
