//! Host integrations: the meeting application quizbot runs inside.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use quizbot_core::traits::{HostIntegration, MeetingContext};

use crate::config::QuizbotConfig;

/// Meeting id reported by [`MockHost`].
pub const MOCK_MEETING_ID: &str = "MOCK_MEETING_ID";

/// Stand-in for a missing host.
///
/// Becomes ready after a short delay and reports [`MOCK_MEETING_ID`].
pub struct MockHost {
    delay: Duration,
    ready: OnceCell<()>,
    init_count: AtomicU32,
}

impl MockHost {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ready: OnceCell::new(),
            init_count: AtomicU32::new(0),
        }
    }

    /// Number of times the readiness step actually ran.
    pub fn init_count(&self) -> u32 {
        self.init_count.load(Ordering::Relaxed)
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_MOCK_DELAY_MS))
    }
}

#[async_trait]
impl HostIntegration for MockHost {
    fn name(&self) -> &str {
        "mock"
    }

    async fn init(&self) -> anyhow::Result<()> {
        self.ready
            .get_or_init(|| async {
                self.init_count.fetch_add(1, Ordering::Relaxed);
                tokio::time::sleep(self.delay).await;
                debug!("mock host ready");
            })
            .await;
        Ok(())
    }

    async fn get_context(&self) -> anyhow::Result<MeetingContext> {
        if !self.ready.initialized() {
            anyhow::bail!("mock host not initialized");
        }
        Ok(MeetingContext {
            meeting_id: Some(MOCK_MEETING_ID.to_string()),
        })
    }
}

/// A host that handed us the meeting id up front.
pub struct ConfiguredHost {
    meeting_id: String,
    ready: OnceCell<()>,
}

impl ConfiguredHost {
    pub fn new(meeting_id: impl Into<String>) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            ready: OnceCell::new(),
        }
    }
}

#[async_trait]
impl HostIntegration for ConfiguredHost {
    fn name(&self) -> &str {
        "configured"
    }

    async fn init(&self) -> anyhow::Result<()> {
        self.ready.get_or_init(|| async {}).await;
        Ok(())
    }

    async fn get_context(&self) -> anyhow::Result<MeetingContext> {
        if !self.ready.initialized() {
            anyhow::bail!("host not initialized");
        }
        Ok(MeetingContext {
            meeting_id: Some(self.meeting_id.clone()),
        })
    }
}

/// Pick the host integration for this run.
pub fn create_host(config: &QuizbotConfig) -> Box<dyn HostIntegration> {
    match config.meeting_id.as_deref() {
        Some(id) if !id.is_empty() => Box::new(ConfiguredHost::new(id)),
        _ => {
            warn!("no meeting host configured, using mock host");
            Box::new(MockHost::new(Duration::from_millis(config.mock_delay_ms)))
        }
    }
}
