use std::path::PathBuf;

/// Everything [`crate::InteractionStore::open`] needs to know.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Root directory holding one sub-directory per account.
    pub data_dir: PathBuf,
    /// Our own account. `None` runs without persistence.
    pub account: Option<String>,
    /// Raw `reinteract_after` value: hours as `N` or `MIN-MAX`.
    pub reinteract_after: Option<String>,
    /// Accounts whose target queues receive usernames we scrape.
    pub scrape_for_accounts: Vec<String>,
}

impl StoreConfig {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Self::default() }
    }

    #[must_use]
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn reinteract_after(mut self, value: impl Into<String>) -> Self {
        self.reinteract_after = Some(value.into());
        self
    }

    #[must_use]
    pub fn scrape_for(mut self, account: impl Into<String>) -> Self {
        self.scrape_for_accounts.push(account.into());
        self
    }

    /// Directory of `account` under the data root.
    #[must_use]
    pub fn account_dir(&self, account: &str) -> PathBuf {
        self.data_dir.join(account)
    }
}
