#[cfg(feature = "bench")]
use std::hint::black_box;

#[cfg(feature = "bench")]
use criterion::{Criterion, criterion_group, criterion_main};

#[cfg(feature = "bench")]
use english_tunic::{Dictionary, SpecialCases, Transliterator, compound, merge};

#[cfg(feature = "bench")]
fn compound_words(c: &mut Criterion) {
    let pronunciations: Vec<Vec<&str>> = [
        "AE0 N IY1 L EH0 D",
        "S T R EH1 NG K TH S",
        "AH0 N K AW1 N T AH0 B AH0 L",
        "K EH1 R F AH0 L IY0",
    ]
    .iter()
    .map(|line| line.split_whitespace().collect())
    .collect();

    c.bench_function("compound_words", move |b| {
        b.iter(|| {
            for units in &pronunciations {
                black_box(compound(&merge(black_box(units))));
            }
        });
    });
}

#[cfg(feature = "bench")]
fn transliterate_sentence(c: &mut Criterion) {
    let dictionary = Dictionary::parse(
        "THE  DH AH0
QUICK  K W IH1 K
BROWN  B R AW1 N
FOX  F AA1 K S
JUMPS  JH AH1 M P S
OVER  OW1 V ER0
LAZY  L EY1 Z IY0
DOG  D AO1 G
",
    );
    let transliterator = Transliterator::new(dictionary, SpecialCases::default());

    c.bench_function("transliterate_sentence", move |b| {
        b.iter(|| transliterator.render(black_box("The quick brown fox jumps over the lazy dog.")));
    });
}

#[cfg(feature = "bench")]
criterion_group!(benches, compound_words, transliterate_sentence);

#[cfg(feature = "bench")]
criterion_main!(benches);

#[cfg(not(feature = "bench"))]
fn main() {
    eprintln!("You must pass `--features=bench`");
}
