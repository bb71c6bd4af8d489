//! The `quizbot init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizbot.toml").exists() {
        println!("quizbot.toml already exists, skipping.");
    } else {
        std::fs::write("quizbot.toml", SAMPLE_CONFIG)?;
        println!("Created quizbot.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point `endpoint` at your quiz-generation service");
    println!("  2. Run: quizbot play --source builtin");
    println!("  3. Run: quizbot play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbot configuration

endpoint = "http://localhost:8000/generate_mcq"
num_questions = 2
timeout_secs = 120

# Milliseconds the mock host waits before reporting ready.
mock_delay_ms = 100

# Meeting id handed over by the meeting host. Leave unset to use the mock host.
# meeting_id = "${QUIZBOT_MEETING_ID}"

source_text = """
Photosynthesis is the process by which green plants and some other organisms \
use sunlight to synthesize foods with the help of chlorophyll.
"""
"#;
