use anyhow::Result;
use reachlog_service::InteractionStore;

pub(crate) fn run_enqueue(
    store: &InteractionStore,
    username: &str,
    source: Option<&str>,
    interaction_type: Option<&str>,
) -> Result<()> {
    store.enqueue_target(username, source, interaction_type)?;
    println!("{}", serde_json::json!({ "enqueued": username }));
    Ok(())
}

pub(crate) fn run_next_target(store: &InteractionStore) -> Result<()> {
    let target = store.dequeue_target()?;
    println!("{}", serde_json::to_string_pretty(&target)?);
    Ok(())
}

pub(crate) fn run_targets(store: &InteractionStore, limit: usize) -> Result<()> {
    let targets = store.pending_targets(limit)?;
    println!("{}", serde_json::to_string_pretty(&targets)?);
    Ok(())
}
