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

//! The glyph mapping tables of the Tunic syllabary.
//!
//! Phonetic codes are the ones used by the CMU pronouncing dictionary (and
//! amepd): consonants are bare codes, vowels carry a stress digit. The fused
//! rhotic vowels (`AE1R`, `EH1R`, ...) never appear in the dictionary itself,
//! they are produced by [`crate::merge`].

/// Fills the consonant slot of a vowel that has no consonant to pair with.
pub const CARRIER: &str = "-";

/// Marks a compound whose consonant follows its vowel in speech.
pub const INVERSION: &str = "_";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phoneme {
    Consonant(&'static str),
    Vowel(&'static str),
}

impl Phoneme {
    /// Looks a code up in both tables.
    ///
    /// Returns `None` for a code that belongs to neither.
    #[must_use]
    pub fn classify(code: &str) -> Option<Self> {
        consonant_glyph(code)
            .map(Self::Consonant)
            .or_else(|| vowel_glyph(code).map(Self::Vowel))
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Consonant(glyph) | Self::Vowel(glyph) => glyph,
        }
    }

    #[must_use]
    pub fn is_consonant(self) -> bool {
        matches!(self, Self::Consonant(_))
    }

    #[must_use]
    pub fn is_vowel(self) -> bool {
        matches!(self, Self::Vowel(_))
    }
}

#[must_use]
pub fn consonant_glyph(code: &str) -> Option<&'static str> {
    let glyph = match code {
        "B" => "b",   // _b_oy
        "CH" => "ch", // _ch_eese
        "D" => "d",   // _d_og
        "DH" => "dh", // _th_is
        "F" => "f",   // _f_ear
        "G" => "g",   // _g_ame
        "HH" => "h",  // _h_ole
        "JH" => "j",  // _j_og
        "K" => "k",   // _k_ite
        "L" => "l",   // _l_ine
        "M" => "m",   // _m_outh
        "N" => "n",   // _n_ow
        "NG" => "ng", // ri_ng_
        "P" => "p",   // _p_ot
        "R" => "r",   // _r_ain
        "S" => "s",   // _s_ee
        "SH" => "sh", // _sh_are
        "T" => "t",   // _t_ime
        "TH" => "th", // _th_ing
        "V" => "v",   // _v_ine
        "W" => "w",   // _w_ind
        "Y" => "y",   // _y_ou
        "Z" => "z",   // _z_ebra
        "ZH" => "zh", // mea_s_ure
        _ => return None,
    };

    Some(glyph)
}

#[must_use]
pub fn vowel_glyph(code: &str) -> Option<&'static str> {
    let glyph = match code {
        "AX" | "AE0" | "AE1" | "AE2" => "a", // h_a_t
        "AE0R" | "AE1R" | "AE2R" => "ar",    // f_ar_
        "AA0" | "AA1" | "AA2" | "AO0" | "AO1" | "AO2" => "ah", // h_o_t, l_aw_
        "AO0R" | "AO1R" | "AO2R" => "or",    // m_ore_
        "EY0" | "EY1" | "EY2" => "ey",       // st_ay_
        "EH0" | "EH1" | "EH2" => "e",        // s_e_nd
        "EH0R" | "EH1R" | "EH2R" => "er",    // _air_
        "IY0" | "IY1" | "IY2" => "ee",       // s_ee_d
        "AH0" | "AH1" | "AH2" => "u",        // f_u_n
        "IH0" | "IH1" | "IH2" => "i",        // s_i_t
        "IH0R" | "IH1R" | "IH2R" => "eer",   // b_eer_
        "AY0" | "AY1" | "AY2" => "ie",       // l_ie_
        "AXR" | "ER0" | "ER1" | "ER2" => "ir", // b_ir_d
        "OW0" | "OW1" | "OW2" => "o",        // t_oe_
        "OY0" | "OY1" | "OY2" => "oy",       // t_oy_
        "UW0" | "UW1" | "UW2" => "oo",       // f_oo_d
        "UH0" | "UH1" | "UH2" => "ou",       // b_oo_k
        "AW0" | "AW1" | "AW2" => "ow",       // f_ou_nd
        _ => return None,
    };

    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_disjoint() {
        for code in ["B", "R", "NG", "ZH"] {
            assert!(consonant_glyph(code).is_some());
            assert!(vowel_glyph(code).is_none());
        }

        for code in ["AX", "AE1R", "ER0", "AW2"] {
            assert!(vowel_glyph(code).is_some());
            assert!(consonant_glyph(code).is_none());
        }
    }

    #[test]
    fn stress_does_not_change_the_glyph() {
        assert_eq!(vowel_glyph("IY0"), vowel_glyph("IY1"));
        assert_eq!(vowel_glyph("IY1"), vowel_glyph("IY2"));
        assert_eq!(vowel_glyph("OW2"), Some("o"));
    }

    #[test]
    fn classify() {
        assert_eq!(Phoneme::classify("DH"), Some(Phoneme::Consonant("dh")));
        assert_eq!(Phoneme::classify("IH1R"), Some(Phoneme::Vowel("eer")));
        assert_eq!(Phoneme::classify("AE"), None);
        assert_eq!(Phoneme::classify("b"), None);
        assert_eq!(Phoneme::classify(""), None);

        let vowel = Phoneme::classify("UH1").unwrap();
        assert!(vowel.is_vowel());
        assert!(!vowel.is_consonant());
        assert_eq!(vowel.glyph(), "ou");
    }
}
