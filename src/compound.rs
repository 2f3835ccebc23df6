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

//! Compounds a phoneme sequence into Tunic glyph tokens.
//!
//! A Tunic syllable is one consonant glyph and one vowel glyph drawn together.
//! Consonant then vowel is written in reading order. Vowel then consonant is
//! written consonant first and followed by [`INVERSION`]. A vowel that pairs
//! with nothing gets a [`CARRIER`] in place of its consonant.

use std::fmt;

use crate::phoneme::{CARRIER, INVERSION, Phoneme};

/// The glyph tokens of one pronunciation, in reading order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct GlyphSequence(Vec<String>);

impl GlyphSequence {
    /// A sequence of one token written exactly as given.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self(vec![text.to_string()])
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, token: &str) {
        self.0.push(token.to_string());
    }

    fn insert(&mut self, index: usize, token: &str) {
        self.0.insert(index, token.to_string());
    }
}

impl<S: Into<String>> FromIterator<S> for GlyphSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for GlyphSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            write!(f, "{token}")?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Compounded {
    pub glyphs: GlyphSequence,
    /// Codes found in neither glyph table, in the order they appeared.
    pub unknown: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Compound {
    Initial,
    OpenAfterConsonant,
    /// `vowel_at` is the index of the vowel glyph waiting for its consonant.
    OpenAfterVowel {
        vowel_at: usize,
    },
    Closed,
}

/// Compounds a pronunciation that has already been through [`crate::merge`].
///
/// Unknown codes are dropped before compounding, so they neither change the
/// state nor count as the unit after a vowel.
#[must_use]
pub fn compound<S: AsRef<str>>(units: &[S]) -> Compounded {
    let mut unknown = Vec::new();
    let phonemes: Vec<Phoneme> = units
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|unit| {
            let phoneme = Phoneme::classify(unit);
            if phoneme.is_none() {
                unknown.push(unit.to_string());
            }
            phoneme
        })
        .collect();

    let mut glyphs = GlyphSequence(Vec::with_capacity(phonemes.len() * 2));
    let mut state = Compound::Initial;

    for (i, phoneme) in phonemes.iter().enumerate() {
        state = match (*phoneme, state) {
            (Phoneme::Consonant(glyph), Compound::OpenAfterVowel { vowel_at }) => {
                glyphs.insert(vowel_at, glyph);
                glyphs.push(INVERSION);
                Compound::Closed
            }
            // Consonants never compound with each other.
            (Phoneme::Consonant(glyph), _) => {
                glyphs.push(glyph);
                Compound::OpenAfterConsonant
            }
            (Phoneme::Vowel(glyph), Compound::OpenAfterConsonant) => {
                glyphs.push(glyph);
                Compound::Closed
            }
            (Phoneme::Vowel(glyph), _) => {
                let next_is_consonant = phonemes
                    .get(i + 1)
                    .is_some_and(|next| next.is_consonant());

                if next_is_consonant {
                    let vowel_at = glyphs.len();
                    glyphs.push(glyph);
                    Compound::OpenAfterVowel { vowel_at }
                } else {
                    glyphs.push(CARRIER);
                    glyphs.push(glyph);
                    Compound::Closed
                }
            }
        };
    }

    Compounded { glyphs, unknown }
}
