//! quizbot configuration and source factory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizbot_core::traits::{GenerateQuizRequest, QuizSource};

use crate::builtin::{BuiltinQuizSource, DEFAULT_SOURCE_TEXT};
use crate::http::{HttpQuizSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

pub const DEFAULT_MOCK_DELAY_MS: u64 = 100;

/// Top-level quizbot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizbotConfig {
    /// Quiz-generation endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Number of questions to request.
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
    /// Source material sent to the generation service.
    #[serde(default = "default_source_text")]
    pub source_text: String,
    /// HTTP client timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// How long the mock host takes to become ready.
    #[serde(default = "default_mock_delay")]
    pub mock_delay_ms: u64,
    /// Meeting id handed over by the host; when unset the mock host is used.
    #[serde(default)]
    pub meeting_id: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_num_questions() -> u32 {
    2
}
fn default_source_text() -> String {
    DEFAULT_SOURCE_TEXT.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_mock_delay() -> u64 {
    DEFAULT_MOCK_DELAY_MS
}

impl Default for QuizbotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            num_questions: default_num_questions(),
            source_text: default_source_text(),
            timeout_secs: default_timeout(),
            mock_delay_ms: default_mock_delay(),
            meeting_id: None,
        }
    }
}

impl QuizbotConfig {
    /// The generation request described by this config.
    pub fn request(&self) -> GenerateQuizRequest {
        GenerateQuizRequest {
            text: self.source_text.clone(),
            num_questions: self.num_questions,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizbot.toml` in the current directory
/// 2. `~/.config/quizbot/config.toml`
///
/// Environment variable overrides: `QUIZBOT_ENDPOINT`, `QUIZBOT_MEETING_ID`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbotConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbot.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loading config");
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbotConfig::default(),
    };

    if let Ok(endpoint) = std::env::var("QUIZBOT_ENDPOINT") {
        config.endpoint = endpoint;
    }
    if let Ok(id) = std::env::var("QUIZBOT_MEETING_ID") {
        config.meeting_id = Some(id);
    }

    Ok(config)
}

/// Parse a TOML config string, resolving `${VAR}` references in the endpoint
/// and meeting id. Source text is sent as written.
pub fn parse_config(content: &str) -> Result<QuizbotConfig> {
    let mut config: QuizbotConfig = toml::from_str(content)?;
    config.endpoint = resolve_env_vars(&config.endpoint);
    config.meeting_id = config.meeting_id.as_deref().map(resolve_env_vars);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbot"))
}

/// Which quiz source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Http,
    Builtin,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Http => write!(f, "http"),
            SourceKind::Builtin => write!(f, "builtin"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" | "remote" => Ok(SourceKind::Http),
            "builtin" | "mock" => Ok(SourceKind::Builtin),
            other => Err(format!("unknown quiz source: {other}")),
        }
    }
}

/// Create a quiz source from its kind and the loaded config.
pub fn create_source(kind: SourceKind, config: &QuizbotConfig) -> Result<Box<dyn QuizSource>> {
    match kind {
        SourceKind::Http => Ok(Box::new(HttpQuizSource::new(
            &config.endpoint,
            config.timeout_secs,
        )?)),
        SourceKind::Builtin => Ok(Box::new(BuiltinQuizSource::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZBOT_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_QUIZBOT_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_QUIZBOT_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no_close_${brace"), "no_close_${brace");
        std::env::remove_var("_QUIZBOT_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_QUIZBOT_TEST_SELF", "${_QUIZBOT_TEST_SELF}");
        assert_eq!(
            resolve_env_vars("x${_QUIZBOT_TEST_SELF}y"),
            "x${_QUIZBOT_TEST_SELF}y"
        );
        std::env::remove_var("_QUIZBOT_TEST_SELF");

        assert_eq!(resolve_env_vars("a${_QUIZBOT_UNSET_A}b${_QUIZBOT_UNSET_B}c"), "abc");
    }

    #[test]
    fn source_text_is_kept_verbatim() {
        std::env::set_var("_QUIZBOT_TEST_SHELL", "expanded");
        let config = parse_config(
            r#"
source_text = "Shell vars look like ${_QUIZBOT_TEST_SHELL} or ${HOME_DIR} in bash."
meeting_id = "m-${_QUIZBOT_TEST_SHELL}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.source_text,
            "Shell vars look like ${_QUIZBOT_TEST_SHELL} or ${HOME_DIR} in bash."
        );
        assert_eq!(config.meeting_id.as_deref(), Some("m-expanded"));
        assert_eq!(config.request().text, config.source_text);
        std::env::remove_var("_QUIZBOT_TEST_SHELL");
    }

    #[test]
    fn default_config() {
        let config = QuizbotConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/generate_mcq");
        assert_eq!(config.num_questions, 2);
        assert_eq!(config.mock_delay_ms, 100);
        assert!(config.meeting_id.is_none());
        assert!(config.source_text.starts_with("Photosynthesis"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config = parse_config(
            r#"
endpoint = "http://quiz.internal/generate_mcq"
num_questions = 5
meeting_id = "123456789"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://quiz.internal/generate_mcq");
        assert_eq!(config.num_questions, 5);
        assert_eq!(config.meeting_id.as_deref(), Some("123456789"));
        assert_eq!(config.timeout_secs, 120);

        let request = config.request();
        assert_eq!(request.num_questions, 5);
        assert_eq!(request.text, config.source_text);
    }

    #[test]
    fn config_resolves_env_references() {
        std::env::set_var("_QUIZBOT_TEST_HOST", "quiz.example");
        let config = parse_config(r#"endpoint = "http://${_QUIZBOT_TEST_HOST}/generate_mcq""#)
            .unwrap();
        assert_eq!(config.endpoint, "http://quiz.example/generate_mcq");
        std::env::remove_var("_QUIZBOT_TEST_HOST");
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("quizbot.toml");
        std::fs::write(&path, "num_questions = 4\nmock_delay_ms = 0\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.num_questions, 4);
        assert_eq!(config.mock_delay_ms, 0);
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/quizbot.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_toml_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("quizbot.toml");
        std::fs::write(&path, "num_questions = \"two\"\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn source_kind_parsing() {
        assert_eq!("http".parse::<SourceKind>().unwrap(), SourceKind::Http);
        assert_eq!("Builtin".parse::<SourceKind>().unwrap(), SourceKind::Builtin);
        assert!("ftp".parse::<SourceKind>().is_err());
        assert_eq!(SourceKind::Builtin.to_string(), "builtin");
    }

    #[test]
    fn create_each_source() {
        let config = QuizbotConfig::default();
        assert_eq!(create_source(SourceKind::Http, &config).unwrap().name(), "http");
        assert_eq!(
            create_source(SourceKind::Builtin, &config).unwrap().name(),
            "builtin"
        );
    }
}
