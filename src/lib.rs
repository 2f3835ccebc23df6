//! Transliterate English into the Tunic syllabary.
//!
//! Each word is looked up in a pronunciation dictionary ([amepd] or another
//! CMU format dictionary), its rhotic vowels are fused and the phonemes are
//! compounded into Tunic glyph tokens: a consonant glyph, a vowel glyph, the
//! vowel carrier `-` and the inversion marker `_`.
//!
//! ```text
//! $ english-tunic hello world!
//! hulo wirld!
//! ```
//!
//! ## Logging
//!
//! Set `RUST_LOG` to change the level, for example `RUST_LOG=debug`. Words
//! missing from the dictionary and unknown phonemes are logged as errors.
//! Words with several distinct spellings are logged as warnings.
//!
//! [amepd]: https://github.com/rhdunn/amepd

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

#![deny(clippy::panic)]

pub mod compound;
pub mod config;
pub mod dictionary;
pub mod merge;
pub mod phoneme;
pub mod punctuation;
pub mod resolve;
pub mod sentence;
pub mod special;
pub mod utils;

pub use crate::{
    compound::{GlyphSequence, compound},
    dictionary::{Dictionary, Pronunciation, Pronunciations},
    merge::merge,
    resolve::{Diagnostic, Resolver, WordResolution},
    sentence::Transliterator,
    special::SpecialCases,
};

pub const HOME: &str = "english-tunic";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 David Lawrence Campbell

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 David Lawrence Campbell
Licensed under the AGPLv3"
);

/// Compounds one pronunciation, written as space separated codes like
/// `AE1 T`, into Tunic glyphs.
#[must_use]
pub fn pronunciation_to_tunic(pronunciation: &str) -> String {
    let units: Vec<&str> = pronunciation.split_whitespace().collect();
    compound(&merge(&units)).glyphs.to_string()
}

#[cfg(test)]
mod tests {
    use super::pronunciation_to_tunic;

    #[test]
    fn pronunciations() {
        assert_eq!(pronunciation_to_tunic("B AE1 T"), "bat");
        assert_eq!(pronunciation_to_tunic("AE1 T"), "ta_");
        assert_eq!(pronunciation_to_tunic("F AE1 R"), "far");
        assert_eq!(pronunciation_to_tunic("AE1 R"), "-ar");
        assert_eq!(pronunciation_to_tunic("  "), "");
    }
}
