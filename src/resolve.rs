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

use std::fmt;

use log::{error, warn};
use thiserror::Error;

use crate::{
    compound::{Compounded, GlyphSequence, compound},
    dictionary::Pronunciations,
    merge::merge,
    punctuation,
    special::SpecialCases,
};

/// Something that went wrong while resolving a word. None of them stop the
/// word from being written.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Diagnostic {
    #[error("no such phoneme defined '{code}' in the pronunciation of \"{word}\"")]
    UnknownPhoneme { word: String, code: String },
    #[error("could not find the word \"{word}\" in the dictionary")]
    NotFound { word: String },
    #[error("found {} matches for \"{word}\": {}", .alternatives.len(), .alternatives.join(", "))]
    Ambiguous {
        word: String,
        alternatives: Vec<String>,
    },
}

impl Diagnostic {
    fn log(&self) {
        match self {
            Self::UnknownPhoneme { .. } | Self::NotFound { .. } => error!("{self}"),
            Self::Ambiguous { .. } => warn!("{self}"),
        }
    }
}

/// How one word is written.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordResolution {
    /// The word without its trailing punctuation.
    pub word: String,
    /// Distinct spellings in the order they were derived.
    pub sequences: Vec<GlyphSequence>,
    pub diagnostics: Vec<Diagnostic>,
}

impl WordResolution {
    /// The spelling that gets written.
    #[must_use]
    pub fn chosen(&self) -> Option<&GlyphSequence> {
        self.sequences.first()
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.sequences.len() > 1
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }
}

impl fmt::Display for WordResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chosen() {
            Some(glyphs) => write!(f, "{glyphs}"),
            None => Ok(()),
        }
    }
}

/// Resolves single words against a dictionary and the special cases.
#[derive(Debug)]
pub struct Resolver<'a, D> {
    dictionary: &'a D,
    special_cases: &'a SpecialCases,
}

impl<'a, D: Pronunciations> Resolver<'a, D> {
    #[must_use]
    pub fn new(dictionary: &'a D, special_cases: &'a SpecialCases) -> Self {
        Self {
            dictionary,
            special_cases,
        }
    }

    /// Resolves a lowercase word that may end with punctuation.
    ///
    /// A special case wins over the dictionary. A word in neither is written
    /// as its own text.
    #[must_use]
    pub fn resolve(&self, word: &str) -> WordResolution {
        let (stem, punctuation) = punctuation::strip(word);
        let mut resolution = WordResolution {
            word: stem.to_string(),
            ..WordResolution::default()
        };

        if stem.is_empty() {
            resolution.sequences.push(GlyphSequence::default());
        } else if let Some(sequences) = self.special_cases.get(stem).filter(|s| !s.is_empty()) {
            // Punctuation is still reattached below.
            resolution.sequences = sequences.to_vec();
        } else if let Some(pronunciations) = self
            .dictionary
            .pronunciations(stem)
            .filter(|p| !p.is_empty())
        {
            for pronunciation in pronunciations {
                let Compounded { glyphs, unknown } = compound(&merge(pronunciation));

                for code in unknown {
                    resolution.report(Diagnostic::UnknownPhoneme {
                        word: stem.to_string(),
                        code,
                    });
                }

                if !glyphs.is_empty() && !resolution.sequences.contains(&glyphs) {
                    resolution.sequences.push(glyphs);
                }
            }

            // Every code was unknown.
            if resolution.sequences.is_empty() {
                resolution.sequences.push(GlyphSequence::literal(stem));
            }

            if resolution.is_ambiguous() {
                let alternatives = resolution
                    .sequences
                    .iter()
                    .map(ToString::to_string)
                    .collect();

                resolution.report(Diagnostic::Ambiguous {
                    word: stem.to_string(),
                    alternatives,
                });
            }
        } else {
            resolution.report(Diagnostic::NotFound {
                word: stem.to_string(),
            });
            resolution.sequences.push(GlyphSequence::literal(stem));
        }

        for glyphs in &mut resolution.sequences {
            punctuation::reattach(glyphs, punctuation);
        }

        resolution
    }
}
