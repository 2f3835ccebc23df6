// This file is part of english-tunic.
//
// english-tunic is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// english-tunic is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Pronunciation dictionaries in the CMU format used by amepd.
//!
//! ```text
//! ;;; comment
//! READ  R IY1 D
//! READ(1)  R EH1 D  # past tense
//! ```

use std::{
    collections::HashMap,
    env, fs,
    hash::BuildHasher,
    io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::utils::data_file;

/// One way to say a word: phonetic codes in order.
pub type Pronunciation = Vec<String>;

pub const DICTIONARY_FILE: &str = "amepd";

/// Environment variable naming a dictionary file or a directory holding one.
pub const DICTIONARY_PATH_VAR: &str = "TUNIC_DICT_PATH";

/// Looks up the pronunciations of a lowercase word.
pub trait Pronunciations {
    /// Every known pronunciation in the order the source lists them, or `None`
    /// if the word is unknown.
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]>;
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary: failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary: could not find amepd in any of the search paths:\n{searched}")]
    NotFound { searched: String },
}

#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: FxHashMap<String, Vec<Pronunciation>>,
}

impl Dictionary {
    /// Parses dictionary text.
    ///
    /// Lines starting with `;;;` and anything after `#` are comments. A
    /// `(n)` marker on the headword numbers an alternate pronunciation.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut dictionary = Self::default();

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.starts_with(";;;") {
                continue;
            }

            let entry = match line.split_once('#') {
                Some((entry, _comment)) => entry,
                None => line,
            };

            let mut fields = entry.split_whitespace();
            let Some(headword) = fields.next() else {
                continue;
            };

            let word = strip_variant(headword).to_lowercase();
            let pronunciation: Pronunciation = fields.map(str::to_string).collect();

            if pronunciation.is_empty() {
                warn!(
                    "dictionary: line {}: '{word}' has no pronunciation",
                    number + 1
                );
                continue;
            }

            dictionary.insert(word, pronunciation);
        }

        dictionary
    }

    /// # Errors
    ///
    /// If the file can't be read.
    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse(&text);
        info!(
            "loaded {} words from the dictionary {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Appends a pronunciation after any the word already has.
    pub fn insert(&mut self, word: String, pronunciation: Pronunciation) {
        self.words.entry(word).or_default().push(pronunciation);
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Pronunciations for Dictionary {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.words.get(word).map(Vec::as_slice)
    }
}

impl<S: BuildHasher> Pronunciations for HashMap<String, Vec<Pronunciation>, S> {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.get(word).map(Vec::as_slice)
    }
}

fn strip_variant(headword: &str) -> &str {
    match headword.find('(') {
        Some(open) if open > 0 && headword.ends_with(')') => &headword[..open],
        _ => headword,
    }
}

/// Finds the dictionary file.
///
/// Search order:
/// 1. `explicit` (from the command line)
/// 2. the `TUNIC_DICT_PATH` environment variable
/// 3. `configured` (from the configuration file)
/// 4. the user's data directory
/// 5. the current directory
///
/// A directory in the first three is searched for an `amepd` file.
///
/// # Errors
///
/// If no candidate is a file.
pub fn find_dictionary(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<PathBuf, DictionaryError> {
    let search_paths = search_paths(explicit, configured);

    for path in &search_paths {
        debug!("dictionary: trying {}", path.display());

        if path.is_file() {
            return Ok(path.clone());
        }
    }

    Err(DictionaryError::NotFound {
        searched: search_paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

fn search_paths(explicit: Option<&Path>, configured: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    let mut push_candidate = |path: PathBuf| {
        if path.is_dir() {
            paths.push(path.join(DICTIONARY_FILE));
        } else {
            paths.push(path);
        }
    };

    if let Some(path) = explicit {
        push_candidate(path.to_path_buf());
    }

    if let Ok(path) = env::var(DICTIONARY_PATH_VAR) {
        push_candidate(PathBuf::from(path));
    }

    if let Some(path) = configured {
        push_candidate(path.to_path_buf());
    }

    paths.push(data_file(DICTIONARY_FILE));

    if let Ok(cwd) = env::current_dir() {
        paths.push(cwd.join(DICTIONARY_FILE));
    }

    paths
}
