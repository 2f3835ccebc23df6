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

use rustc_hash::FxHashMap;

use crate::compound::GlyphSequence;

/// Words the game spells differently from what the dictionary gives, or
/// words with several pronunciations where the game's choice is known.
pub const SPECIAL_CASES: [(&str, &[&str]); 20] = [
    // as written in the game
    ("a", &["-", "u"]),
    ("the", &["dh", "u"]),
    // missing from the dictionary
    ("annealed", &["n", "a", "_", "l", "ee", "_", "d", "e", "_"]),
    ("sarcophagi", &["s", "ar", "k", "ah", "f", "u", "g", "ie"]),
    (
        "uncountable",
        &["n", "u", "_", "k", "ow", "n", "t", "a", "b", "a", "l"],
    ),
    ("oubliette", &["b", "oo", "_", "l", "ee", "t", "e", "_"]),
    // more than one pronunciation
    ("or", &["-", "or"]),
    ("for", &["f", "or"]),
    ("to", &["t", "oo"]),
    ("of", &["v", "u", "_"]),
    ("them", &["dh", "e", "m"]),
    ("lever", &["l", "ee", "v", "ir"]),
    ("good", &["g", "ou", "d"]),
    ("enough", &["n", "i", "_", "f", "u", "_"]),
    ("nice", &["n", "ie", "s"]),
    ("was", &["w", "ah", "z"]),
    ("wasn't", &["w", "ah", "z", "u", "n", "t"]),
    ("get", &["g", "e", "t"]),
    ("use", &["y", "oo", "s"]),
    ("uses", &["y", "oo", "s", "i", "z"]),
];

/// Words resolved to fixed glyphs without consulting the dictionary.
#[derive(Clone, Debug)]
pub struct SpecialCases {
    words: FxHashMap<String, Vec<GlyphSequence>>,
}

impl SpecialCases {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[GlyphSequence]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Adds a word, replacing any glyphs it already had.
    pub fn insert(&mut self, word: &str, sequences: Vec<GlyphSequence>) {
        self.words.insert(word.to_lowercase(), sequences);
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

impl Default for SpecialCases {
    fn default() -> Self {
        let mut special_cases = Self::empty();

        for (word, glyphs) in SPECIAL_CASES {
            special_cases.insert(word, vec![glyphs.iter().copied().collect()]);
        }

        special_cases
    }
}

#[cfg(test)]
mod tests {
    use super::{SPECIAL_CASES, SpecialCases};
    use crate::compound::GlyphSequence;

    #[test]
    fn built_in_words() {
        let special_cases = SpecialCases::default();
        assert_eq!(special_cases.len(), SPECIAL_CASES.len());

        let a = special_cases.get("a").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].tokens(), ["-", "u"]);

        assert_eq!(special_cases.get("of").unwrap()[0].to_string(), "vu_");
        assert!(special_cases.get("xyzzy").is_none());
        assert!(special_cases.get("A").is_none());
    }

    #[test]
    fn insert_replaces() {
        let mut special_cases = SpecialCases::default();
        special_cases.insert("The", vec![GlyphSequence::literal("dhee")]);

        assert_eq!(special_cases.len(), SPECIAL_CASES.len());
        assert_eq!(special_cases.get("the").unwrap()[0].tokens(), ["dhee"]);
    }

    #[test]
    fn sequences_are_nonempty() {
        for (word, glyphs) in SPECIAL_CASES {
            assert!(!glyphs.is_empty(), "{word}");
        }
    }
}
