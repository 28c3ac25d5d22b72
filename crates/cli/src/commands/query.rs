use anyhow::Result;
use reachlog_core::{FollowingStatus, InteractedUser};
use reachlog_service::InteractionStore;
use serde::Serialize;

#[derive(Serialize)]
struct UserStatus<'a> {
    username: &'a str,
    interacted: bool,
    following_status: FollowingStatus,
    scraped: bool,
    filtered: bool,
    whitelisted: bool,
    blacklisted: bool,
    interaction: Option<InteractedUser>,
}

pub(crate) fn run_status(store: &InteractionStore, username: &str) -> Result<()> {
    let status = UserStatus {
        username,
        interacted: store.was_interacted(username)?,
        following_status: store.following_status(username)?,
        scraped: store.was_scraped(username)?,
        filtered: store.was_filtered(username)?,
        whitelisted: store.in_whitelist(username),
        blacklisted: store.in_blacklist(username),
        interaction: store.interacted_user(username)?,
    };
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

pub(crate) fn run_stats(store: &InteractionStore) -> Result<()> {
    let stats = store.stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
