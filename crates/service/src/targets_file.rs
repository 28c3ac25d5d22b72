//! Drain `targets.txt` into the record store.
//!
//! Order matters: enqueue, then append to `targets_loaded.txt` and sync, then
//! truncate `targets.txt`. A crash before the truncate leaves the input in
//! place, so the next run enqueues it again (a no-op for already queued
//! usernames) and may archive the same lines twice. Targets are never lost.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write as _};
use std::path::Path;

use reachlog_core::Provider;
use reachlog_core::constants::{FILENAME_LOADED_TARGETS, FILENAME_TARGETS};
use reachlog_storage::RecordStore;

use crate::ServiceError;

/// Move every line of `targets.txt` into the queue and archive it.
///
/// Returns the number of lines drained. A missing or empty input file is a no-op;
/// a file holding only blank lines is truncated without touching the queue.
///
/// # Errors
/// Returns the first store or file error. The input file is only truncated
/// after the queue insert and the archive write both succeeded.
pub fn drain_targets_file(account_dir: &Path, store: &dyn RecordStore) -> Result<usize, ServiceError> {
    let targets_path = account_dir.join(FILENAME_TARGETS);
    let content = match std::fs::read_to_string(&targets_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    if content.is_empty() {
        return Ok(0);
    }

    let targets: Vec<&str> =
        content.lines().map(str::trim_end).filter(|line| !line.is_empty()).collect();
    if targets.is_empty() {
        File::create(&targets_path)?;
        return Ok(0);
    }

    let queued = store.enqueue_targets(&targets, Provider::TargetsList, None, None)?;

    let mut archive = OpenOptions::new()
        .create(true)
        .append(true)
        .open(account_dir.join(FILENAME_LOADED_TARGETS))?;
    for target in &targets {
        writeln!(archive, "{target}")?;
    }
    archive.sync_all()?;

    File::create(&targets_path)?;

    tracing::info!(
        drained = targets.len(),
        queued,
        path = %targets_path.display(),
        "Loaded targets into queue"
    );
    Ok(targets.len())
}
