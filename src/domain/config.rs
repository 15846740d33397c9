use serde::{Deserialize, Serialize};

/// Sentinel language value meaning "let the model detect the language".
pub const LANGUAGE_AUTO: &str = "auto";

/// Model ids with this suffix are English-only variants. They accept
/// neither a task nor a language parameter at inference time.
pub const ENGLISH_ONLY_SUFFIX: &str = ".en";

/// Worker-side configuration for a recognition model.
///
/// `model`, `dtype` and `gpu` are load-time parameters: changing any of
/// them invalidates a previously loaded worker instance. `subtask` and
/// `language` are inference-time parameters and do not affect readiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier (e.g. "onnx-community/whisper-base").
    pub model: String,
    /// Numeric precision identifier (e.g. "fp32", "q8").
    pub dtype: String,
    /// Run inference on the accelerator instead of the CPU.
    pub gpu: bool,
    /// Task identifier: "transcribe" or "translate".
    pub subtask: String,
    /// Language code (ISO 639-1) or the "auto" sentinel.
    pub language: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "onnx-community/whisper-base".to_string(),
            dtype: "q8".to_string(),
            gpu: false,
            subtask: "transcribe".to_string(),
            language: LANGUAGE_AUTO.to_string(),
        }
    }
}

impl ModelConfig {
    /// Whether the configured model is an English-only variant.
    pub fn is_english_only(&self) -> bool {
        self.model.ends_with(ENGLISH_ONLY_SUFFIX)
    }

    /// The subtask to send with a transcription request.
    /// English-only models accept no task parameter.
    pub fn effective_subtask(&self) -> Option<String> {
        if self.is_english_only() {
            None
        } else {
            Some(self.subtask.clone())
        }
    }

    /// The language to send with a transcription request.
    /// Omitted for English-only models and for the "auto" sentinel.
    pub fn effective_language(&self) -> Option<String> {
        if self.is_english_only() || self.language == LANGUAGE_AUTO {
            None
        } else {
            Some(self.language.clone())
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Enable file logging with rotation.
    pub file_logging: bool,
    /// Maximum number of log files to keep.
    pub max_files: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: true,
            max_files: 7,
        }
    }
}

/// Main application configuration, persisted as TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Default model configuration for new sessions.
    pub session: ModelConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert_eq!(config.language, LANGUAGE_AUTO);
        assert_eq!(config.subtask, "transcribe");
        assert!(!config.gpu);
    }

    #[test]
    fn test_english_only_suffix() {
        let mut config = ModelConfig::default();
        assert!(!config.is_english_only());

        config.model = "onnx-community/whisper-base.en".to_string();
        assert!(config.is_english_only());
        assert_eq!(config.effective_subtask(), None);
        assert_eq!(config.effective_language(), None);
    }

    #[test]
    fn test_auto_language_omitted() {
        let config = ModelConfig::default();
        assert_eq!(config.effective_subtask(), Some("transcribe".to_string()));
        assert_eq!(config.effective_language(), None);
    }

    #[test]
    fn test_explicit_language_sent() {
        let config = ModelConfig {
            language: "fr".to_string(),
            ..ModelConfig::default()
        };
        assert_eq!(config.effective_language(), Some("fr".to_string()));
    }
}
