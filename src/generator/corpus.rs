use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CorpusError;

#[derive(Embed)]
#[folder = "assets/words/"]
struct CorpusAssets;

/// Bundled word lists, keyed the way they appear in the menu and config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CorpusKey {
    CommonWords,
    DorianGray,
    Frankenstein,
    PrideAndPrejudice,
}

impl CorpusKey {
    /// Menu order.
    pub const ALL: [CorpusKey; 4] = [
        CorpusKey::DorianGray,
        CorpusKey::Frankenstein,
        CorpusKey::CommonWords,
        CorpusKey::PrideAndPrejudice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CorpusKey::CommonWords => "common-words",
            CorpusKey::DorianGray => "dorian-gray",
            CorpusKey::Frankenstein => "frankenstein",
            CorpusKey::PrideAndPrejudice => "pride-and-prejudice",
        }
    }

    fn index(self) -> usize {
        match self {
            CorpusKey::DorianGray => 0,
            CorpusKey::Frankenstein => 1,
            CorpusKey::CommonWords => 2,
            CorpusKey::PrideAndPrejudice => 3,
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            CorpusKey::CommonWords => "common-words.txt",
            CorpusKey::DorianGray => "dorian-gray.txt",
            CorpusKey::Frankenstein => "frankenstein.txt",
            CorpusKey::PrideAndPrejudice => "pride-and-prejudice.txt",
        }
    }
}

impl fmt::Display for CorpusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorpusKey {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CorpusKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CorpusError::Unknown(s.to_string()))
    }
}

/// A non-empty list of words parsed from one corpus.
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn load(key: CorpusKey) -> Result<Self, CorpusError> {
        let file =
            CorpusAssets::get(key.file_name()).ok_or(CorpusError::Missing(key.as_str()))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|_| CorpusError::Encoding(key.as_str()))?;
        let list = Self::parse(key, content)?;
        debug!(corpus = key.as_str(), words = list.words.len(), "loaded corpus");
        Ok(list)
    }

    /// One word per line; surrounding whitespace and blank lines are dropped.
    pub fn parse(key: CorpusKey, content: &str) -> Result<Self, CorpusError> {
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(CorpusError::Empty(key.as_str()));
        }

        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Every bundled corpus, loaded and validated up front.
#[derive(Clone, Debug)]
pub struct CorpusLibrary {
    lists: Vec<WordList>,
}

impl CorpusLibrary {
    pub fn load() -> Result<Self, CorpusError> {
        let lists = CorpusKey::ALL
            .into_iter()
            .map(WordList::load)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lists })
    }

    pub fn get(&self, key: CorpusKey) -> &WordList {
        // `load` fills the lists in `CorpusKey::ALL` order.
        &self.lists[key.index()]
    }
}
