//! The `quizbot generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub async fn execute(
    source: String,
    num_questions: Option<u32>,
    text: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut session = super::connect(&source, num_questions, text, config_path).await?;

    session
        .flow
        .generate(session.source.as_ref(), &session.request)
        .await?;

    let walker = session.flow.walker().context("no quiz was generated")?;
    println!("{}", serde_json::to_string_pretty(walker.quiz().as_ref())?);

    Ok(())
}
