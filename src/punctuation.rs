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

//! Trailing punctuation is written as is and never transliterated.

use crate::compound::GlyphSequence;

pub const PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Splits a word into its stem and the punctuation that ends it.
///
/// Only punctuation after the last other character counts, so `w,.or!d`
/// keeps all of its characters in the stem.
#[must_use]
pub fn strip(word: &str) -> (&str, &str) {
    let stem = word.trim_end_matches(PUNCTUATION);
    (stem, &word[stem.len()..])
}

/// Appends each punctuation character as its own token.
pub fn reattach(glyphs: &mut GlyphSequence, punctuation: &str) {
    let mut buffer = [0; 4];

    for ch in punctuation.chars() {
        glyphs.push(ch.encode_utf8(&mut buffer));
    }
}

#[cfg(test)]
mod tests {
    use super::{reattach, strip};
    use crate::compound::GlyphSequence;

    #[test]
    fn strips_from_the_end() {
        assert_eq!(strip("word!"), ("word", "!"));
        assert_eq!(strip("word?!."), ("word", "?!."));
        assert_eq!(strip("w,.or!d"), ("w,.or!d", ""));
        assert_eq!(strip("word"), ("word", ""));
        assert_eq!(strip("!?"), ("", "!?"));
        assert_eq!(strip("wasn't,"), ("wasn't", ","));
    }

    #[test]
    fn reattach_keeps_order() {
        let mut glyphs: GlyphSequence = ["w", "ir", "d"].into_iter().collect();
        reattach(&mut glyphs, "?!");

        assert_eq!(glyphs.tokens(), ["w", "ir", "d", "?", "!"]);
        assert_eq!(glyphs.to_string(), "wird?!");
    }
}
