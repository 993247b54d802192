use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generator::corpus::CorpusKey;
use crate::generator::word_pool::DEFAULT_WORD_POOL;
use crate::session::settings::{TIME_OPTIONS, WORD_COUNT_OPTIONS, nearest_option};
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::wrap::DEFAULT_LINE_WIDTH_CAP;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_corpus")]
    pub corpus: CorpusKey,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_timer_word_pool")]
    pub timer_word_pool: usize,
    #[serde(default = "default_line_width_cap")]
    pub line_width_cap: usize,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_corpus() -> CorpusKey {
    CorpusKey::CommonWords
}
fn default_duration_secs() -> u64 {
    30
}
fn default_word_count() -> usize {
    50
}
fn default_timer_word_pool() -> usize {
    DEFAULT_WORD_POOL
}
fn default_line_width_cap() -> usize {
    DEFAULT_LINE_WIDTH_CAP
}
fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: default_corpus(),
            duration_secs: default_duration_secs(),
            word_count: default_word_count(),
            timer_word_pool: default_timer_word_pool(),
            line_width_cap: default_line_width_cap(),
            theme: default_theme(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typioca")
            .join("config.toml")
    }

    /// Snaps run lengths to the menu's options and keeps sizes positive.
    /// Call after deserialization or after applying CLI overrides.
    pub fn normalize(&mut self) {
        let duration = TIME_OPTIONS[nearest_option(TIME_OPTIONS, self.duration_secs)];
        if duration != self.duration_secs {
            warn!(from = self.duration_secs, to = duration, "duration snapped to nearest option");
            self.duration_secs = duration;
        }

        let words = WORD_COUNT_OPTIONS[nearest_option(
            WORD_COUNT_OPTIONS.map(|c| c as u64),
            self.word_count as u64,
        )];
        if words != self.word_count {
            warn!(from = self.word_count, to = words, "word count snapped to nearest option");
            self.word_count = words;
        }

        if self.timer_word_pool == 0 {
            self.timer_word_pool = default_timer_word_pool();
        }
        self.line_width_cap = self.line_width_cap.max(1);
        if self.theme.trim().is_empty() {
            self.theme = default_theme();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.corpus, CorpusKey::CommonWords);
        assert_eq!(config.duration_secs, 30);
        assert_eq!(config.word_count, 50);
        assert_eq!(config.timer_word_pool, 300);
        assert_eq!(config.line_width_cap, 40);
        assert_eq!(config.theme, "terminal-default");
    }

    #[test]
    fn test_config_partial_file() {
        let toml_str = r#"
corpus = "dorian-gray"
word_count = 25
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.corpus, CorpusKey::DorianGray);
        assert_eq!(config.word_count, 25);
        assert_eq!(config.duration_secs, 30);
    }

    #[test]
    fn test_unknown_corpus_is_an_error() {
        assert!(toml::from_str::<Config>("corpus = \"moby-dick\"").is_err());
    }

    #[test]
    fn test_normalize_snaps_and_clamps() {
        let mut config = Config {
            duration_secs: 50,
            word_count: 0,
            timer_word_pool: 0,
            line_width_cap: 0,
            theme: " ".to_string(),
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.duration_secs, 60);
        assert_eq!(config.word_count, 10);
        assert_eq!(config.timer_word_pool, 300);
        assert_eq!(config.line_width_cap, 1);
        assert_eq!(config.theme, "terminal-default");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let config = Config {
            corpus: CorpusKey::Frankenstein,
            duration_secs: 120,
            ..Config::default()
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        fs::write(&path, "duration_secs = \"soon\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
