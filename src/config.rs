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

//! The configuration file, written in RON:
//!
//! ```text
//! (
//!     dictionary: Some("/usr/share/amepd/amepd"),
//!     special_cases: {
//!         "tunic": [["t", "oo", "n", "i", "k"]],
//!     },
//! )
//! ```

use std::{
    collections::BTreeMap,
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::{compound::GlyphSequence, special::SpecialCases, utils::config_file};

pub const CONFIG_FILE: &str = "config.ron";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The pronunciation dictionary to use when none is given on the command
    /// line.
    pub dictionary: Option<PathBuf>,
    /// Extra special cases. They replace built in ones of the same word.
    pub special_cases: BTreeMap<String, Vec<Vec<String>>>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config: failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config: failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("config: the special case \"{word}\" has an empty spelling")]
    EmptySpecialCase { word: String },
}

impl Config {
    /// Loads `path`, or the default configuration file if `path` is `None`.
    ///
    /// A missing default file gives the default configuration.
    ///
    /// # Errors
    ///
    /// If the file can't be read or parsed, or if an explicitly given file
    /// doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                let path = config_file(CONFIG_FILE);

                match Self::from_path(&path) {
                    Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                        debug!("config: {} doesn't exist, using defaults", path.display());
                        Ok(Self::default())
                    }
                    result => result,
                }
            }
        }
    }

    /// # Errors
    ///
    /// If the file can't be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let string = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = ron::from_str(&string).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("config: loaded {}", path.display());
        Ok(config)
    }

    /// The built in special cases with the configured ones applied.
    ///
    /// # Errors
    ///
    /// If a configured word has no spellings or an empty spelling.
    pub fn special_cases(&self) -> Result<SpecialCases, ConfigError> {
        let mut special_cases = SpecialCases::default();

        for (word, spellings) in &self.special_cases {
            if spellings.is_empty() || spellings.iter().any(Vec::is_empty) {
                return Err(ConfigError::EmptySpecialCase { word: word.clone() });
            }

            let sequences = spellings
                .iter()
                .map(|tokens| tokens.iter().map(String::as_str).collect::<GlyphSequence>())
                .collect();

            special_cases.insert(word, sequences);
        }

        Ok(special_cases)
    }
}
