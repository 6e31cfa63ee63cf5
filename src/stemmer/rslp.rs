//! RSLP stemmer implementation.
//!
//! RSLP (Removedor de Sufixos da Língua Portuguesa, Orengo & Huyck 2001)
//! strips Portuguese suffixes in a fixed sequence of steps. Each step is a
//! table of rules; a rule fires when the word ends with its suffix, the
//! remaining stem keeps at least `min_stem` characters and the word is not
//! listed as an exception. The first rule that fires ends the step.
//!
//! ```text
//! plural ─► feminine ─► augmentative ─► noun ──fired──────────────► accents
//!                                         │                          ▲
//!                                         └─► verb ──fired───────────┤
//!                                               └─► vowel ───────────┘
//! ```
//!
//! The rule tables here are a compact subset of the published ones.
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::Stemmer;
//! use ptstem::stemmer::rslp::RslpStemmer;
//!
//! let stemmer = RslpStemmer::new();
//! assert_eq!(stemmer.stem_word("gatinhos"), stemmer.stem_word("gato"));
//! ```

use super::Stemmer;

/// One suffix rewrite rule.
#[derive(Debug, Clone, Copy)]
struct Rule {
    suffix: &'static str,
    min_stem: usize,
    replacement: &'static str,
    exceptions: &'static [&'static str],
}

const fn rule(suffix: &'static str, min_stem: usize, replacement: &'static str) -> Rule {
    Rule {
        suffix,
        min_stem,
        replacement,
        exceptions: &[],
    }
}

const fn rule_except(
    suffix: &'static str,
    min_stem: usize,
    replacement: &'static str,
    exceptions: &'static [&'static str],
) -> Rule {
    Rule {
        suffix,
        min_stem,
        replacement,
        exceptions,
    }
}

const PLURAL: &[Rule] = &[
    rule("ns", 1, "m"),
    rule("ões", 3, "ão"),
    rule_except("ães", 1, "ão", &["mães"]),
    rule_except("ais", 1, "al", &["cais", "mais"]),
    rule("éis", 2, "el"),
    rule("eis", 2, "el"),
    rule("óis", 2, "ol"),
    rule_except(
        "is",
        2,
        "il",
        &["lápis", "cais", "mais", "crúcis", "biquínis", "pois", "depois", "dois", "leis"],
    ),
    rule("les", 3, "l"),
    rule_except("res", 3, "r", &["árvores"]),
    rule_except(
        "s",
        2,
        "",
        &[
            "aliás", "pires", "lápis", "cais", "mais", "mas", "menos", "férias", "fezes",
            "pêsames", "crúcis", "gás", "atrás", "moisés", "através", "convés", "ês", "país",
            "após", "ambas", "ambos", "messias", "depois",
        ],
    ),
];

const FEMININE: &[Rule] = &[
    rule_except(
        "ona",
        3,
        "ão",
        &[
            "abandona",
            "lona",
            "iona",
            "cortisona",
            "monótona",
            "maratona",
        ],
    ),
    rule("ora", 3, "or"),
    rule_except(
        "na",
        4,
        "no",
        &[
            "carona",
            "abandona",
            "lona",
            "iona",
            "cortisona",
            "monótona",
            "maratona",
            "pequena",
            "semana",
            "porcelana",
            "plana",
            "banana",
        ],
    ),
    rule_except("inha", 3, "inho", &["rainha", "linha", "minha"]),
    rule_except(
        "esa",
        3,
        "ês",
        &[
            "mesa", "obesa", "princesa", "turquesa", "ilesa", "pesa", "presa",
        ],
    ),
    rule_except("osa", 3, "oso", &["mucosa", "prosa"]),
    rule("íaca", 3, "íaco"),
    rule_except("ica", 3, "ico", &["dica"]),
    rule_except("ada", 2, "ado", &["pitada"]),
    rule_except("ida", 3, "ido", &["vida"]),
    rule("ída", 3, "ido"),
    rule_except("ima", 3, "imo", &["vítima"]),
    rule_except("iva", 3, "ivo", &["saliva", "oliva"]),
    rule_except(
        "eira",
        3,
        "eiro",
        &[
            "beira",
            "cadeira",
            "frigideira",
            "bandeira",
            "feira",
            "capoeira",
            "barreira",
            "fronteira",
            "besteira",
            "poeira",
        ],
    ),
    rule("ã", 2, "ão"),
];

const AUGMENTATIVE: &[Rule] = &[
    rule("díssimo", 5, ""),
    rule("abilíssimo", 5, ""),
    rule("íssimo", 3, ""),
    rule("ésimo", 3, ""),
    rule("érrimo", 4, ""),
    rule("zinho", 2, ""),
    rule("quinho", 4, "c"),
    rule("uinho", 4, ""),
    rule("adinho", 3, ""),
    rule_except("inho", 3, "", &["caminho", "cominho"]),
    rule("alhão", 4, ""),
    rule("uça", 4, ""),
    rule("aço", 4, ""),
    rule("aça", 4, ""),
    rule("adão", 4, ""),
    rule("idão", 4, ""),
    rule("ázio", 3, ""),
    rule("arraz", 4, ""),
    rule("zarrão", 3, ""),
    rule("arrão", 4, ""),
    rule("zão", 2, ""),
    rule_except(
        "ão",
        3,
        "",
        &[
            "camarão",
            "chimarrão",
            "canção",
            "coração",
            "embrião",
            "grotão",
            "glutão",
            "ficção",
            "fogão",
            "feição",
            "furacão",
            "gamão",
            "lampião",
            "leão",
            "macacão",
            "nação",
            "órfão",
            "orgão",
            "patrão",
            "portão",
            "quinhão",
            "rincão",
            "tração",
            "falcão",
            "espião",
            "mamão",
            "folião",
            "cordão",
            "aptidão",
            "campeão",
            "colchão",
            "limão",
            "leilão",
            "melão",
            "barão",
            "milhão",
            "bilhão",
            "fusão",
            "cristão",
            "ilusão",
            "capitão",
            "estação",
            "senão",
        ],
    ),
    rule("zito", 2, ""),
    rule_except(
        "ito",
        3,
        "",
        &[
            "mosquito", "palito", "escrito", "bonito", "bendito", "apetito", "infinito", "perito",
            "circuito", "granito",
        ],
    ),
];

const NOUN: &[Rule] = &[
    rule("encialista", 4, ""),
    rule("alista", 5, ""),
    rule_except(
        "agem",
        3,
        "",
        &["coragem", "chantagem", "vantagem", "carruagem"],
    ),
    rule("iamento", 4, ""),
    rule("amento", 3, ""),
    rule("imento", 3, ""),
    rule("mento", 6, ""),
    rule("alizado", 4, ""),
    rule("atizado", 4, ""),
    rule("tizado", 4, ""),
    rule("izado", 5, ""),
    rule("ativo", 4, ""),
    rule("tivo", 4, ""),
    rule("ivo", 4, ""),
    rule_except("ado", 2, "", &["grado"]),
    rule("ido", 3, ""),
    rule("ador", 3, ""),
    rule("edor", 3, ""),
    rule("idor", 4, ""),
    rule("dor", 4, ""),
    rule("sor", 4, ""),
    rule("atoria", 5, ""),
    rule("tor", 3, ""),
    rule("ante", 2, ""),
    rule("ância", 3, ""),
    rule("ência", 3, ""),
    rule("ização", 5, ""),
    rule("ação", 3, ""),
    rule("ução", 5, ""),
    rule("idade", 4, ""),
    rule("ismo", 3, ""),
    rule("ista", 4, ""),
    rule("ável", 2, ""),
    rule("ível", 5, ""),
    rule("mente", 4, ""),
    rule("eza", 3, ""),
    rule("ico", 4, ""),
    rule("ês", 4, ""),
    rule("ez", 4, ""),
];

const VERB: &[Rule] = &[
    rule("aríamos", 2, ""),
    rule("eríamos", 2, ""),
    rule("iríamos", 3, ""),
    rule("ássemos", 2, ""),
    rule("êssemos", 2, ""),
    rule("íssemos", 3, ""),
    rule("aremos", 2, ""),
    rule("eremos", 2, ""),
    rule("iremos", 3, ""),
    rule("ávamos", 2, ""),
    rule("áramos", 2, ""),
    rule("éramos", 2, ""),
    rule("íramos", 3, ""),
    rule("íamos", 3, ""),
    rule("aríeis", 2, ""),
    rule("eríeis", 2, ""),
    rule("iríeis", 3, ""),
    rule("ariam", 2, ""),
    rule("eriam", 2, ""),
    rule("iriam", 3, ""),
    rule("assem", 2, ""),
    rule("essem", 2, ""),
    rule("issem", 3, ""),
    rule("arias", 2, ""),
    rule("erias", 2, ""),
    rule("irias", 3, ""),
    rule("aram", 2, ""),
    rule("eram", 2, ""),
    rule("iram", 3, ""),
    rule("avam", 2, ""),
    rule("arem", 2, ""),
    rule("erem", 2, ""),
    rule("irem", 3, ""),
    rule("ando", 2, ""),
    rule("endo", 3, ""),
    rule("indo", 3, ""),
    rule("aria", 2, ""),
    rule("eria", 2, ""),
    rule("iria", 3, ""),
    rule("ava", 2, ""),
    rule("ara", 2, ""),
    rule("era", 3, ""),
    rule("ira", 3, ""),
    rule("asse", 2, ""),
    rule("esse", 2, ""),
    rule("isse", 3, ""),
    rule("aste", 2, ""),
    rule("este", 2, ""),
    rule("iste", 3, ""),
    rule("amos", 2, ""),
    rule("emos", 2, ""),
    rule("imos", 3, ""),
    rule("ei", 3, ""),
    rule("ou", 3, ""),
    rule("eu", 3, ""),
    rule("iu", 3, ""),
    rule("am", 2, ""),
    rule("em", 2, ""),
    rule("ar", 2, ""),
    rule("er", 2, ""),
    rule("ir", 3, ""),
    rule("ia", 3, ""),
    rule("ie", 3, ""),
];

const VOWEL: &[Rule] = &[
    rule("bil", 2, "vel"),
    rule("gue", 2, "g"),
    rule("a", 3, ""),
    rule("e", 3, ""),
    rule("o", 3, ""),
];

/// Words this short are only lowercased.
const MIN_WORD_CHARS: usize = 3;

/// Suffix-stripping stemmer for Portuguese.
#[derive(Debug, Clone, Copy, Default)]
pub struct RslpStemmer;

impl RslpStemmer {
    /// Create a new RSLP stemmer.
    pub fn new() -> Self {
        RslpStemmer
    }

    /// Apply the first matching rule of a step.
    ///
    /// Returns `true` when a rule fired.
    fn apply_step(word: &mut String, rules: &[Rule]) -> bool {
        let word_chars = word.chars().count();
        for rule in rules {
            let Some(stem) = word.strip_suffix(rule.suffix) else {
                continue;
            };
            let suffix_chars = rule.suffix.chars().count();
            if word_chars - suffix_chars < rule.min_stem {
                continue;
            }
            if rule.exceptions.contains(&word.as_str()) {
                continue;
            }
            *word = format!("{stem}{}", rule.replacement);
            return true;
        }
        false
    }

    fn remove_accents(word: &str) -> String {
        word.chars()
            .map(|c| match c {
                'á' | 'à' | 'â' | 'ã' => 'a',
                'é' | 'ê' => 'e',
                'í' => 'i',
                'ó' | 'ô' | 'õ' => 'o',
                'ú' | 'ü' => 'u',
                'ç' => 'c',
                other => other,
            })
            .collect()
    }
}

impl Stemmer for RslpStemmer {
    fn stem_word(&self, word: &str) -> Option<String> {
        let mut word = word.to_lowercase();
        if word.chars().count() < MIN_WORD_CHARS {
            return Some(word);
        }

        if word.ends_with('s') {
            Self::apply_step(&mut word, PLURAL);
        }
        if word.ends_with('a') || word.ends_with('ã') {
            Self::apply_step(&mut word, FEMININE);
        }
        Self::apply_step(&mut word, AUGMENTATIVE);
        if !Self::apply_step(&mut word, NOUN) && !Self::apply_step(&mut word, VERB) {
            Self::apply_step(&mut word, VOWEL);
        }

        Some(Self::remove_accents(&word))
    }

    fn name(&self) -> &'static str {
        "rslp"
    }
}
