//! Query/update surface used by the outreach driver loop.
//!
//! The record store is the source of truth; nothing here caches user state.
//! Only the whitelist, blacklist and cooldown are held in memory, and they are
//! fixed for the lifetime of the instance.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use reachlog_core::{
    FilteredUser, FollowingStatus, InteractedUser, Provider, ScrapedUser, ScrapingStatus, Target, now_local,
    resolve_reinteract_after,
};
use reachlog_storage::{RecordStore, SqliteStore, StorageError, StoreStats, TargetFilter};

use crate::ServiceError;
use crate::config::StoreConfig;
use crate::lists::UserLists;
use crate::targets_file::drain_targets_file;

/// Outcome of one contact attempt, passed to [`InteractionStore::record_interaction`].
///
/// `at` left unset means "now", evaluated when the interaction is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub at: Option<NaiveDateTime>,
    pub followed: bool,
    pub unfollowed: bool,
    pub source: Option<String>,
    pub interaction_type: Option<String>,
    pub provider: Provider,
}

impl InteractionOutcome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at(mut self, at: NaiveDateTime) -> Self {
        self.at = Some(at);
        self
    }

    #[must_use]
    pub fn followed(mut self) -> Self {
        self.followed = true;
        self
    }

    #[must_use]
    pub fn unfollowed(mut self) -> Self {
        self.unfollowed = true;
        self
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn interaction_type(mut self, interaction_type: impl Into<String>) -> Self {
        self.interaction_type = Some(interaction_type.into());
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    #[must_use]
    pub const fn following_status(&self) -> FollowingStatus {
        FollowingStatus::from_flags(self.followed, self.unfollowed)
    }
}

/// Per-account interaction state.
pub struct InteractionStore {
    database: Option<Arc<dyn RecordStore>>,
    scraping_databases: Vec<Arc<dyn RecordStore>>,
    reinteract_after: Option<u32>,
    whitelist: HashSet<String>,
    blacklist: HashSet<String>,
}

impl InteractionStore {
    /// Open the store described by `config`.
    ///
    /// With an account: opens its database, loads the user lists and drains
    /// `targets.txt`. Without one: returns a stateless store and logs a warning.
    ///
    /// # Errors
    /// Returns error if a database cannot be opened, a list file cannot be
    /// read, or the target drain fails.
    pub fn open(config: &StoreConfig) -> Result<Self, ServiceError> {
        let reinteract_after = config.reinteract_after.as_deref().map(resolve_reinteract_after);

        let account = config.account.as_deref().map(str::trim).filter(|a| !a.is_empty());
        let Some(account) = account else {
            tracing::warn!(
                "No account given, interacted users and targets will not be read or persisted"
            );
            return Ok(Self::stateless(reinteract_after));
        };

        let account_dir = config.account_dir(account);
        let database: Arc<dyn RecordStore> =
            Arc::new(SqliteStore::open_account(&config.data_dir, account)?);

        let UserLists { whitelist, blacklist } = UserLists::load(&account_dir)?;
        drain_targets_file(&account_dir, database.as_ref())?;

        let scraping_databases = config
            .scrape_for_accounts
            .iter()
            .map(|acc| {
                SqliteStore::open_account(&config.data_dir, acc)
                    .map(|store| Arc::new(store) as Arc<dyn RecordStore>)
            })
            .collect::<Result<Vec<_>, StorageError>>()?;

        tracing::info!(
            account,
            reinteract_after = ?reinteract_after,
            scrape_for = scraping_databases.len(),
            "Interaction store ready"
        );

        Ok(Self {
            database: Some(database),
            scraping_databases,
            reinteract_after,
            whitelist,
            blacklist,
        })
    }

    /// Assemble a store from already opened parts. Does not touch the filesystem.
    #[must_use]
    pub fn from_parts(
        database: Option<Arc<dyn RecordStore>>,
        scraping_databases: Vec<Arc<dyn RecordStore>>,
        reinteract_after: Option<u32>,
        lists: UserLists,
    ) -> Self {
        Self {
            database,
            scraping_databases,
            reinteract_after,
            whitelist: lists.whitelist,
            blacklist: lists.blacklist,
        }
    }

    fn stateless(reinteract_after: Option<u32>) -> Self {
        Self::from_parts(None, Vec::new(), reinteract_after, UserLists::default())
    }

    /// Whether state is read from and written to a database.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.database.is_some()
    }

    /// Resolved cooldown in hours; `None` means never re-interact.
    #[must_use]
    pub const fn reinteract_after(&self) -> Option<u32> {
        self.reinteract_after
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────────

    /// Whether `username` must be skipped as already contacted.
    ///
    /// Without a cooldown any successful interaction counts forever. With one,
    /// only interactions inside the window count.
    ///
    /// # Errors
    /// Store failures, or a malformed timestamp when a cooldown is configured.
    pub fn was_interacted(&self, username: &str) -> Result<bool, ServiceError> {
        match self.reinteract_after {
            Some(hours) => self.was_interacted_recently(username, hours),
            None => Ok(self.interacted_user(username)?.is_some_and(|u| u.was_successful())),
        }
    }

    /// Whether the last successful interaction is at most `hours` old.
    ///
    /// # Errors
    /// Store failures, or [`ServiceError::Core`] if the stored timestamp is malformed.
    pub fn was_interacted_recently(&self, username: &str, hours: u32) -> Result<bool, ServiceError> {
        let Some(user) = self.interacted_user(username)? else {
            return Ok(false);
        };
        if !user.was_successful() {
            return Ok(false);
        }
        let last_interaction = user.last_interaction_at()?;
        Ok(now_local() - last_interaction <= Duration::hours(i64::from(hours)))
    }

    /// # Errors
    /// Store failures.
    pub fn was_scraped(&self, username: &str) -> Result<bool, ServiceError> {
        Ok(self.scraped_user(username)?.is_some())
    }

    /// # Errors
    /// Store failures.
    pub fn was_filtered(&self, username: &str) -> Result<bool, ServiceError> {
        Ok(self.filtered_user(username)?.is_some())
    }

    /// # Errors
    /// Store failures.
    pub fn following_status(&self, username: &str) -> Result<FollowingStatus, ServiceError> {
        Ok(self.interacted_user(username)?.map(|u| u.following_status).unwrap_or_default())
    }

    #[must_use]
    pub fn in_whitelist(&self, username: &str) -> bool {
        self.whitelist.contains(username)
    }

    #[must_use]
    pub fn in_blacklist(&self, username: &str) -> bool {
        self.blacklist.contains(username)
    }

    /// Raw interacted record, `None` when absent or stateless.
    ///
    /// # Errors
    /// Store failures.
    pub fn interacted_user(&self, username: &str) -> Result<Option<InteractedUser>, ServiceError> {
        match &self.database {
            Some(db) => Ok(db.lookup_interacted(username)?),
            None => Ok(None),
        }
    }

    /// # Errors
    /// Store failures.
    pub fn scraped_user(&self, username: &str) -> Result<Option<ScrapedUser>, ServiceError> {
        match &self.database {
            Some(db) => Ok(db.lookup_scraped(username)?),
            None => Ok(None),
        }
    }

    /// # Errors
    /// Store failures.
    pub fn filtered_user(&self, username: &str) -> Result<Option<FilteredUser>, ServiceError> {
        match &self.database {
            Some(db) => Ok(db.lookup_filtered(username)?),
            None => Ok(None),
        }
    }

    /// Record counts of our own account; all zero when stateless.
    ///
    /// # Errors
    /// Store failures.
    pub fn stats(&self) -> Result<StoreStats, ServiceError> {
        match &self.database {
            Some(db) => Ok(db.stats()?),
            None => Ok(StoreStats::default()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Updates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Record one contact attempt, incrementing the user's interaction count.
    ///
    /// # Errors
    /// Store failures.
    pub fn record_interaction(
        &self,
        username: &str,
        outcome: &InteractionOutcome,
    ) -> Result<(), ServiceError> {
        let Some(db) = &self.database else {
            return Ok(());
        };
        let at = outcome.at.unwrap_or_else(now_local);
        db.upsert_interacted(
            username,
            &at,
            outcome.following_status(),
            outcome.source.as_deref(),
            outcome.interaction_type.as_deref(),
            outcome.provider,
        )?;
        Ok(())
    }

    /// # Errors
    /// Store failures.
    pub fn record_scrape(
        &self,
        username: &str,
        at: Option<NaiveDateTime>,
        success: bool,
    ) -> Result<(), ServiceError> {
        let Some(db) = &self.database else {
            return Ok(());
        };
        let at = at.unwrap_or_else(now_local);
        db.upsert_scraped(username, &at, ScrapingStatus::from_success(success))?;
        Ok(())
    }

    /// # Errors
    /// Store failures.
    pub fn record_filtered(&self, username: &str, at: Option<NaiveDateTime>) -> Result<(), ServiceError> {
        let Some(db) = &self.database else {
            return Ok(());
        };
        let at = at.unwrap_or_else(now_local);
        db.upsert_filtered(username, &at)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Target queue
    // ─────────────────────────────────────────────────────────────────────────────

    /// Hand a scraped username to every account we scrape for.
    ///
    /// # Errors
    /// The first store failure; destinations before it keep the target.
    pub fn enqueue_target(
        &self,
        username: &str,
        source: Option<&str>,
        interaction_type: Option<&str>,
    ) -> Result<(), ServiceError> {
        for db in &self.scraping_databases {
            db.enqueue_targets(&[username], Provider::Scraping, source, interaction_type)?;
        }
        Ok(())
    }

    /// Queued targets of our own account without consuming them.
    ///
    /// # Errors
    /// Store failures.
    pub fn pending_targets(&self, limit: usize) -> Result<Vec<Target>, ServiceError> {
        match &self.database {
            Some(db) => Ok(db.peek_targets(limit)?),
            None => Ok(Vec::new()),
        }
    }

    /// Pop the next target that is neither blacklisted nor already filtered.
    ///
    /// Skipped candidates are consumed, not re-queued.
    ///
    /// # Errors
    /// Store failures.
    pub fn dequeue_target(&self) -> Result<Option<String>, ServiceError> {
        let Some(db) = &self.database else {
            return Ok(None);
        };
        let blacklisted = |username: &str| -> Result<bool, StorageError> {
            Ok(self.in_blacklist(username))
        };
        let filtered = |username: &str| -> Result<bool, StorageError> {
            Ok(db.lookup_filtered(username)?.is_some())
        };
        let exclude: [TargetFilter<'_>; 2] = [&blacklisted, &filtered];
        Ok(db.dequeue_next_target(&exclude)?.map(|target| target.username))
    }
}
