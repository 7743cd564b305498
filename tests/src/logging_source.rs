use crate::FetchLog;

use forcemap::{RawSchema, Result, SchemaSource};
use std::time::Duration;

/// A schema source wrapper that records every fetch, for asserting how often
/// the remote API would be called.
#[derive(Debug)]
pub struct LoggingSource<S> {
    inner: S,

    log: FetchLog,

    /// Delay before each fetch completes, to widen race windows
    delay: Option<Duration>,
}

impl<S: SchemaSource> LoggingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            log: FetchLog::default(),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get a handle to the fetch log
    pub fn fetch_log(&self) -> FetchLog {
        self.log.clone()
    }
}

#[async_trait::async_trait]
impl<S: SchemaSource> SchemaSource for LoggingSource<S> {
    async fn fetch_schema(&self, object_name: &str) -> Result<RawSchema> {
        self.log.push(object_name);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.inner.fetch_schema(object_name).await
    }
}
