use english_tunic::{
    Diagnostic, Dictionary, SpecialCases, Transliterator, compound, merge,
    sentence::render,
};

const AMEPD: &str = ";;; pronunciations used by the tests
A  AH0
A(1)  EY1
AT  AE1 T
BAT  B AE1 T
OF  AH1 V
OF(1)  AH0 V
THE  DH AH0
THE(1)  DH IY0
WORD  W ER1 D
TUNIC  T UW1 N IH0 K
OR  AO1 R
OR(1)  ER0
HEART  HH AA1 R T
CARE  K EH1 R
FOX  F AA1 K S
OPEN  OW1 P AH0 N
IDEA  AY0 D IY1 AH0
";

fn transliterator() -> Transliterator {
    Transliterator::new(Dictionary::parse(AMEPD), SpecialCases::default())
}

fn tokens(transliterator: &Transliterator, word: &str) -> Vec<String> {
    transliterator.resolver().resolve(word).chosen().unwrap().tokens().to_vec()
}

#[test]
fn end_to_end_scenarios() {
    let transliterator = transliterator();

    assert_eq!(tokens(&transliterator, "bat"), ["b", "a", "t"]);
    assert_eq!(tokens(&transliterator, "at"), ["t", "a", "_"]);
    assert_eq!(tokens(&transliterator, "a"), ["-", "u"]);

    let resolution = transliterator.resolver().resolve("xyzzy");
    assert_eq!(resolution.chosen().unwrap().tokens(), ["xyzzy"]);
    assert!(matches!(resolution.diagnostics[..], [Diagnostic::NotFound { .. }]));

    let word = tokens(&transliterator, "word!");
    assert_eq!(word.last().map(String::as_str), Some("!"));
    assert_eq!(word, ["w", "ir", "d", "!"]);
}

#[test]
fn special_cases_hide_dictionary_ambiguity() {
    let transliterator = transliterator();

    for word in ["a", "of", "the", "or"] {
        let resolution = transliterator.resolver().resolve(word);
        assert_eq!(resolution.sequences.len(), 1, "{word}");
        assert!(resolution.diagnostics.is_empty(), "{word}");
    }

    let plain = Transliterator::new(Dictionary::parse(AMEPD), SpecialCases::empty());
    let resolution = plain.resolver().resolve("or");
    assert_eq!(resolution.sequences.len(), 2);
    assert_eq!(resolution.to_string(), "-or");
    assert_eq!(resolution.sequences[1].to_string(), "-ir");
}

#[test]
fn sentences() {
    let transliterator = transliterator();

    assert_eq!(
        transliterator.render("The Tunic fox, at the open idea!"),
        "dhu toonik fahks, ta_ dhu po_nu_ die_-ee-u!"
    );
    assert_eq!(
        render(&transliterator.transliterate("heart care")),
        "hahrt ker"
    );
}

#[test]
fn merged_then_compounded() {
    let units = ["K", "EH1", "R", "AE1", "R", "T"];
    let merged = merge(&units);
    assert_eq!(merged, ["K", "EH1R", "AE1R", "T"]);
    assert_eq!(compound(&merged).glyphs.to_string(), "kertar_");
}
