use std::collections::HashSet;

/// One entry in the symptom rule chain: fires when every listed symptom is
/// present in the reported set.
struct Rule {
    all_of: &'static [&'static str],
    advice: &'static str,
}

// Evaluated top to bottom, first match wins. Earlier rules take precedence
// over later ones whose symptom sets overlap, so the order is part of the
// contract.
const RULES: &[Rule] = &[
    Rule {
        all_of: &["fever", "chills"],
        advice: "You may have malaria. Please visit a clinic for a test.",
    },
    Rule {
        all_of: &["fever", "headache"],
        advice: "You might have a viral infection or malaria. Rest, stay hydrated, and see a doctor for a test.",
    },
    Rule {
        all_of: &["fatigue", "headache"],
        advice: "This could be due to stress, dehydration, or an underlying condition. Drink water, rest, and consult a doctor if it persists.",
    },
    Rule {
        all_of: &["fever"],
        advice: "Fever could indicate an infection. Rest, stay hydrated, and see a doctor.",
    },
    Rule {
        all_of: &["fatigue"],
        advice: "Fatigue might be due to lack of sleep, poor diet, or anemia. Ensure you rest and eat well, and see a doctor if it continues.",
    },
];

const UNCLEAR: &str = "Your symptoms are unclear. Please provide more details or consult a doctor.";

/// Map a set of reported symptoms to canned advice.
///
/// Total over every input: any set that matches no rule, including the empty
/// set, gets the unclear-symptoms fallback. Tokens outside the known
/// vocabulary never match a rule and never change the outcome.
pub fn advise(symptoms: &HashSet<String>) -> String {
    let advice = RULES
        .iter()
        .find(|rule| rule.all_of.iter().all(|s| symptoms.contains(*s)))
        .map(|rule| rule.advice)
        .unwrap_or(UNCLEAR);
    format!("Based on your symptoms: {}", advice)
}

/// The symptom vocabulary the rule chain knows about, for the chat page.
pub fn vocabulary() -> &'static [&'static str] {
    &["fever", "chills", "headache", "fatigue"]
}
