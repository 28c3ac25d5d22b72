use anyhow::Result;
use reachlog_core::Provider;
use reachlog_service::{InteractionOutcome, InteractionStore};

pub(crate) fn outcome(
    followed: bool,
    unfollowed: bool,
    source: Option<String>,
    interaction_type: Option<String>,
    provider: Provider,
) -> InteractionOutcome {
    let mut outcome = InteractionOutcome::new().provider(provider);
    if followed {
        outcome = outcome.followed();
    }
    if unfollowed {
        outcome = outcome.unfollowed();
    }
    if let Some(source) = source {
        outcome = outcome.source(source);
    }
    if let Some(interaction_type) = interaction_type {
        outcome = outcome.interaction_type(interaction_type);
    }
    outcome
}

pub(crate) fn run_interaction(
    store: &InteractionStore,
    username: &str,
    outcome: &InteractionOutcome,
) -> Result<()> {
    store.record_interaction(username, outcome)?;
    print_user(store, username)
}

pub(crate) fn run_scrape(store: &InteractionStore, username: &str, success: bool) -> Result<()> {
    store.record_scrape(username, None, success)?;
    match store.scraped_user(username)? {
        Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
        None => println!("null"),
    }
    Ok(())
}

pub(crate) fn run_filtered(store: &InteractionStore, username: &str) -> Result<()> {
    store.record_filtered(username, None)?;
    match store.filtered_user(username)? {
        Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
        None => println!("null"),
    }
    Ok(())
}

fn print_user(store: &InteractionStore, username: &str) -> Result<()> {
    match store.interacted_user(username)? {
        Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
        // stateless run
        None => println!("null"),
    }
    Ok(())
}
