//! Fixed controlled vocabularies used by template validators.

/// A single entry of a vocabulary: the short code stored by seqr and the
/// display text that template files are expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub code: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub name: &'static str,
    pub terms: &'static [Term],
    /// Whether the short codes are also accepted as values.
    pub accepts_codes: bool,
}

impl Vocabulary {
    /// Case-insensitive membership against term texts (and codes when accepted).
    pub fn contains(&self, value: &str) -> bool {
        let value = value.trim();
        self.terms.iter().any(|term| {
            term.text.eq_ignore_ascii_case(value)
                || (self.accepts_codes && term.code.eq_ignore_ascii_case(value))
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().map(|term| term.text)
    }

    /// Texts joined with `", "`, as quoted in error messages.
    pub fn listing(&self) -> String {
        self.texts().collect::<Vec<_>>().join(", ")
    }
}

pub const ONSET_AGE: Vocabulary = Vocabulary {
    name: "age of onset",
    accepts_codes: false,
    terms: &[
        Term { code: "G", text: "Congenital onset" },
        Term { code: "E", text: "Embryonal onset" },
        Term { code: "F", text: "Fetal onset" },
        Term { code: "N", text: "Neonatal onset" },
        Term { code: "I", text: "Infantile onset" },
        Term { code: "C", text: "Childhood onset" },
        Term { code: "J", text: "Juvenile onset" },
        Term { code: "A", text: "Adult onset" },
        Term { code: "Y", text: "Young adult onset" },
        Term { code: "M", text: "Middle age onset" },
        Term { code: "L", text: "Late onset" },
    ],
};

pub const INHERITANCE_MODE: Vocabulary = Vocabulary {
    name: "mode of inheritance",
    accepts_codes: false,
    terms: &[
        Term { code: "S", text: "Sporadic" },
        Term { code: "D", text: "Autosomal dominant inheritance" },
        Term { code: "L", text: "Sex-limited autosomal dominant" },
        Term { code: "A", text: "Male-limited autosomal dominant" },
        Term { code: "C", text: "Autosomal dominant contiguous gene syndrome" },
        Term { code: "R", text: "Autosomal recessive inheritance" },
        Term { code: "G", text: "Gonosomal inheritance" },
        Term { code: "X", text: "X-linked inheritance" },
        Term { code: "Z", text: "X-linked recessive inheritance" },
        Term { code: "Y", text: "Y-linked inheritance" },
        Term { code: "W", text: "X-linked dominant inheritance" },
        Term { code: "F", text: "Multifactorial inheritance" },
        Term { code: "M", text: "Mitochondrial inheritance" },
    ],
};

// PED files carry the numeric code; seqr exports use the letter.
pub const PEDIGREE_SEX: Vocabulary = Vocabulary {
    name: "sex",
    accepts_codes: true,
    terms: &[
        Term { code: "1", text: "M" },
        Term { code: "2", text: "F" },
        Term { code: "0", text: "U" },
    ],
};

pub const PEDIGREE_AFFECTED_STATUS: Vocabulary = Vocabulary {
    name: "affected status",
    accepts_codes: true,
    terms: &[
        Term { code: "2", text: "A" },
        Term { code: "1", text: "N" },
        Term { code: "0", text: "U" },
    ],
};
