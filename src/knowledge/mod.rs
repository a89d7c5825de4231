use std::collections::HashMap;

/// Per-language table of canned answers, keyed by normalized question text.
///
/// Built once at startup and held read-only in the app state for the life of
/// the process. Keys must already be in normalized form (lowercase ASCII
/// letters and spaces only) or lookups against them will never succeed.
pub struct PhraseTable {
    languages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl PhraseTable {
    pub fn new() -> Self {
        let mut languages = HashMap::new();

        let mut en = HashMap::new();
        en.insert(
            "why do i feel tired",
            "Fatigue can be caused by dehydration, poor diet, lack of sleep, or conditions like anemia. Drink water, eat balanced meals, and consult a doctor for tests.",
        );
        en.insert(
            "how to prevent malaria",
            "Use insecticide-treated bed nets, apply mosquito repellent, and clear stagnant water around your home. Visit a clinic for prophylactic medication.",
        );
        en.insert(
            "what are symptoms of malaria",
            "Symptoms include fever, chills, headache, and fatigue. Consult a doctor for a test if you experience these.",
        );
        languages.insert("en", en);

        let mut yo = HashMap::new();
        yo.insert(
            "kini idi ti mo n rilara",
            "Rirẹ le jẹ nitori omi kekere ninu ara, ounjẹ ti ko dara, tabi ainidun. Mu omi, jẹun to dara, ki o kan si dokita fun idanwo.",
        );
        yo.insert(
            "bawo ni mo se le dena iba",
            "Lo awọn ibusun ti a fi oogun insecticide ṣe, lo oogun anti-mosquito, ki o si pa omi ti o duro mọ ni ayika ile rẹ. Ṣabẹwo si ile-iwosan fun oogun idena.",
        );
        languages.insert("yo", yo);

        let mut ha = HashMap::new();
        ha.insert(
            "me yasa nake jin gajiya",
            "Gajiya na iya zama saboda rashin ruwa a jiki, rashin abinci mai kyau, ko rashin barci. Sha ruwa, ci abinci mai kyau, kuma tuntuɓi likita don gwaji.",
        );
        languages.insert("ha", ha);

        let mut ig = HashMap::new();
        // Known data defect: this key contains non-ASCII letters, which
        // normalization strips from every incoming query, so it is
        // unreachable by exact match.
        ig.insert(
            "gini kpatara m ji ike ọgwụgwụ",
            "Ike ọgwụgwụ nwere ike ịbụ n’ihi mmiri dị n’ime ahụ, nri adịghị mma, ma ọ bụ enweghị ụra. Drinkụọ mmiri, rie nri kwesịrị ekwesị, ma gaa hụ dọkịta maka nyocha.",
        );
        languages.insert("ig", ig);

        let mut pi = HashMap::new();
        pi.insert(
            "why i dey feel tired",
            "Tired fit come from no enough water, bad food, or no sleep. Drink water, chop good food, and see doctor for test.",
        );
        pi.insert(
            "how i fit stop malaria",
            "Use net wey dem treat with insecticide, rub mosquito cream, and clear any water wey dey stand near your house. Go clinic for malaria medicine.",
        );
        languages.insert("pi", pi);

        Self { languages }
    }

    /// Resolve a free-text query in the given language to a canned answer, or
    /// the fallback message if either the language or the normalized query is
    /// unknown. Exact string equality only, no partial matching.
    pub fn resolve(&self, query: &str, language: &str) -> String {
        let normalized = normalize(query);
        self.languages
            .get(language)
            .and_then(|table| table.get(normalized.as_str()))
            .map(|answer| (*answer).to_string())
            .unwrap_or_else(|| {
                format!(
                    "Sorry, I don't have an answer for that in {}. Try rephrasing or consult a healthcare professional.",
                    language
                )
            })
    }

    /// Language codes with at least one phrase entry, for the chat page.
    pub fn language_codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = self.languages.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase the input and strip every character that is not an ASCII
/// lowercase letter or whitespace. Idempotent.
pub fn normalize(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_digits() {
        assert_eq!(normalize("How to prevent Malaria?!"), "how to prevent malaria");
        assert_eq!(normalize("abc123 def"), "abc def");
    }

    #[test]
    fn normalize_strips_non_ascii() {
        assert_eq!(normalize("ọgwụgwụ"), "gwgw");
        assert_eq!(normalize("Rirẹ"), "rir");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["", "Hello, World! 42", "kini idi ti mo n rilara", "ọgwụgwụ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn resolve_exact_match_returns_canned_answer() {
        let table = PhraseTable::new();
        assert_eq!(
            table.resolve("What are symptoms of malaria?", "en"),
            "Symptoms include fever, chills, headache, and fatigue. Consult a doctor for a test if you experience these.",
        );
        assert_eq!(
            table.resolve("how i fit stop malaria", "pi"),
            "Use net wey dem treat with insecticide, rub mosquito cream, and clear any water wey dey stand near your house. Go clinic for malaria medicine.",
        );
    }

    #[test]
    fn resolve_unknown_query_falls_back() {
        let table = PhraseTable::new();
        assert_eq!(
            table.resolve("is water wet", "en"),
            "Sorry, I don't have an answer for that in en. Try rephrasing or consult a healthcare professional.",
        );
    }

    #[test]
    fn resolve_unknown_language_interpolates_verbatim() {
        let table = PhraseTable::new();
        assert_eq!(
            table.resolve("how to prevent malaria", "fr-XX"),
            "Sorry, I don't have an answer for that in fr-XX. Try rephrasing or consult a healthcare professional.",
        );
    }

    #[test]
    fn diacritic_keys_are_unreachable() {
        // The Igbo entry's key contains non-ASCII letters, so even the exact
        // key text falls back after normalization.
        let table = PhraseTable::new();
        let answer = table.resolve("gini kpatara m ji ike ọgwụgwụ", "ig");
        assert!(answer.starts_with("Sorry, I don't have an answer for that in ig."));
    }

    #[test]
    fn language_codes_are_complete() {
        let table = PhraseTable::new();
        assert_eq!(table.language_codes(), vec!["en", "ha", "ig", "pi", "yo"]);
    }
}
