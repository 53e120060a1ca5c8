use super::{current_user, open_vault};
use anyhow::{Context, Result};
use ideavault_core::{RankingMode, VoteDirection};

pub fn run(mode: Option<RankingMode>, max_count: Option<usize>, json: bool) -> Result<()> {
    let vault = open_vault()?;
    let store = vault.store().context("failed to load ideas")?;
    let mode = mode.unwrap_or(vault.config().default_ranking);
    let limit = max_count.unwrap_or(usize::MAX);
    let ranked: Vec<_> = store.list(mode).into_iter().take(limit).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No ideas yet. Submit one with `ideavault submit`.");
        return Ok(());
    }

    let me = current_user();
    for idea in ranked {
        let marker = match idea.vote_of(&me.id) {
            Some(VoteDirection::Up) => "+",
            Some(VoteDirection::Down) => "-",
            None => " ",
        };
        println!(
            "{}{:>5}  {}  {}  [{}] by {}",
            marker,
            idea.vote_count,
            idea.id.short(),
            idea.title,
            idea.category,
            idea.author.display_name
        );
    }
    Ok(())
}
