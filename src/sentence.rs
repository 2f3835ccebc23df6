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

use crate::{
    dictionary::{Dictionary, Pronunciations},
    resolve::{Resolver, WordResolution},
    special::SpecialCases,
};

/// Transliterates whole sentences.
#[derive(Clone, Debug, Default)]
pub struct Transliterator<D = Dictionary> {
    dictionary: D,
    special_cases: SpecialCases,
}

impl<D: Pronunciations> Transliterator<D> {
    #[must_use]
    pub fn new(dictionary: D, special_cases: SpecialCases) -> Self {
        Self {
            dictionary,
            special_cases,
        }
    }

    #[must_use]
    pub fn resolver(&self) -> Resolver<'_, D> {
        Resolver::new(&self.dictionary, &self.special_cases)
    }

    /// Resolves each whitespace separated word of a sentence.
    #[must_use]
    pub fn transliterate(&self, sentence: &str) -> Vec<WordResolution> {
        let sentence = sentence.to_lowercase();
        let resolver = self.resolver();

        sentence
            .split_whitespace()
            .map(|word| resolver.resolve(word))
            .collect()
    }

    /// The sentence written in Tunic glyph tokens.
    #[must_use]
    pub fn render(&self, sentence: &str) -> String {
        render(&self.transliterate(sentence))
    }
}

/// Writes the chosen spelling of each word, separated by single spaces.
#[must_use]
pub fn render(words: &[WordResolution]) -> String {
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`render`] but writes every spelling of a word, separated by `/`.
#[must_use]
pub fn render_all(words: &[WordResolution]) -> String {
    words
        .iter()
        .map(|word| {
            word.sequences
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{Transliterator, render_all};
    use crate::{dictionary::Dictionary, special::SpecialCases};

    fn transliterator() -> Transliterator {
        let dictionary = Dictionary::parse(
            "HELLO  HH AH0 L OW1
HELLO(1)  HH EH0 L OW1
WORLD  W ER1 L D
THE  DH AH0
THE(1)  DH IY0
GARBLED  QQ
",
        );

        Transliterator::new(dictionary, SpecialCases::default())
    }

    #[test]
    fn sentence() {
        let transliterator = transliterator();

        assert_eq!(
            transliterator.render("Hello,   World!"),
            "hulo, wirld!"
        );
        assert_eq!(transliterator.render("the world"), "dhu wirld");
        assert_eq!(transliterator.render(""), "");
        assert_eq!(transliterator.render("  \n"), "");
        assert_eq!(
            transliterator.render("the garbled world"),
            "dhu garbled wirld"
        );
    }

    #[test]
    fn every_spelling() {
        let transliterator = transliterator();
        let words = transliterator.transliterate("HELLO world.");

        assert_eq!(words.len(), 2);
        assert_eq!(render_all(&words), "hulo/helo wirld.");
    }

    #[test]
    fn words_are_independent() {
        let transliterator = transliterator();
        let words = transliterator.transliterate("xyzzy hello xyzzy");

        assert_eq!(words[0], words[2]);
        assert_eq!(words[0].diagnostics.len(), 1);
        assert_eq!(words[1].diagnostics.len(), 1);
    }
}
