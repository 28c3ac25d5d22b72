pub(crate) mod query;
pub(crate) mod queue;
pub(crate) mod record;
