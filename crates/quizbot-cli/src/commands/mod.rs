pub mod generate;
pub mod init;
pub mod play;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use quizbot_core::session::QuizFlow;
use quizbot_core::traits::{GenerateQuizRequest, QuizSource};
use quizbot_providers::{create_host, create_source, load_config_from, SourceKind};

/// Everything a command needs once the host is ready.
pub struct Session {
    pub flow: QuizFlow,
    pub source: Box<dyn QuizSource>,
    pub request: GenerateQuizRequest,
}

/// Load config, apply CLI overrides, and wait for the meeting host.
pub async fn connect(
    source: &str,
    num_questions: Option<u32>,
    text: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<Session> {
    let kind = source.parse::<SourceKind>().map_err(anyhow::Error::msg)?;

    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(n) = num_questions {
        config.num_questions = n;
    }
    if let Some(t) = text {
        config.source_text = t;
    }

    debug!(source = %kind, endpoint = %config.endpoint, "config loaded");

    let host = create_host(&config);
    let flow = QuizFlow::start(host.as_ref()).await;
    if let Some(message) = flow.error() {
        anyhow::bail!("{message}");
    }

    Ok(Session {
        flow,
        source: create_source(kind, &config)?,
        request: config.request(),
    })
}
