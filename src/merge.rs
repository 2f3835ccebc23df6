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

//! Rhotic fusion: certain vowels followed by `R` are written as one glyph.

use crate::dictionary::Pronunciation;

const RHOTIC: &str = "R";

/// The fused code for a vowel followed by `R`, if the script has one.
#[must_use]
pub fn fused(vowel: &str) -> Option<&'static str> {
    let fused = match vowel {
        "AE0" => "AE0R",
        "AE1" => "AE1R",
        "AE2" => "AE2R",
        "IH0" => "IH0R",
        "IH1" => "IH1R",
        "IH2" => "IH2R",
        "EH0" => "EH0R",
        "EH1" => "EH1R",
        "EH2" => "EH2R",
        "AO0" => "AO0R",
        "AO1" => "AO1R",
        "AO2" => "AO2R",
        _ => return None,
    };

    Some(fused)
}

/// Replaces every fusable `{vowel, R}` pair with its fused code.
///
/// A consumed `R` is never looked at again, so `AE1 R R` becomes `AE1R R`.
#[must_use]
pub fn merge<S: AsRef<str>>(units: &[S]) -> Pronunciation {
    let mut merged = Vec::with_capacity(units.len());
    let mut units = units.iter().map(AsRef::as_ref).peekable();

    while let Some(unit) = units.next() {
        match fused(unit) {
            Some(fused) if units.peek() == Some(&RHOTIC) => {
                units.next();
                merged.push(fused.to_string());
            }
            _ => merged.push(unit.to_string()),
        }
    }

    merged
}
