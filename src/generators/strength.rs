// src/generators/strength.rs
use super::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
use crate::models::StrengthLabel;

const WEAK_BELOW: f64 = 28.0;
const MEDIUM_BELOW: f64 = 36.0;
const STRONG_BELOW: f64 = 60.0;

// Entropy estimate in bits: length * log2(pool), where the pool only counts
// the character classes that actually occur in the password.
pub fn calculate_entropy(password: &str) -> f64 {
    let mut pool = 0usize;

    if password.chars().any(char::is_lowercase) {
        pool += LOWERCASE.len();
    }
    if password.chars().any(char::is_uppercase) {
        pool += UPPERCASE.len();
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += DIGITS.len();
    }
    if password.chars().any(|c| SPECIAL.contains(c)) {
        pool += SPECIAL.len();
    }

    if pool == 0 {
        return 0.0;
    }

    password.chars().count() as f64 * (pool as f64).log2()
}

pub fn classify_strength(password: &str) -> StrengthLabel {
    let entropy = calculate_entropy(password);

    if entropy < WEAK_BELOW {
        StrengthLabel::Weak
    } else if entropy < MEDIUM_BELOW {
        StrengthLabel::Medium
    } else if entropy < STRONG_BELOW {
        StrengthLabel::Strong
    } else {
        StrengthLabel::VeryStrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_lowercase_letters_are_weak() {
        let entropy = calculate_entropy("abcd");
        assert!((entropy - 4.0 * 26f64.log2()).abs() < 1e-9);
        assert_eq!(classify_strength("abcd"), StrengthLabel::Weak);
    }

    #[test]
    fn empty_and_unrecognised_strings_have_no_entropy() {
        assert_eq!(calculate_entropy(""), 0.0);
        assert_eq!(calculate_entropy("   ~~~"), 0.0);
        assert_eq!(classify_strength(""), StrengthLabel::Weak);
    }

    #[test]
    fn thresholds_map_to_labels() {
        // 7 * log2(26) ~= 32.9
        assert_eq!(classify_strength("abcdefg"), StrengthLabel::Medium);
        // 8 * log2(52) ~= 45.6
        assert_eq!(classify_strength("abcdEFGH"), StrengthLabel::Strong);
        // 12 * log2(62) ~= 71.5
        assert_eq!(classify_strength("abcdEFGH1234"), StrengthLabel::VeryStrong);
        // 6 * log2(26) ~= 28.2, just over the weak boundary
        assert_eq!(classify_strength("abcdef"), StrengthLabel::Medium);
        // 5 * log2(26) ~= 23.5
        assert_eq!(classify_strength("abcde"), StrengthLabel::Weak);
    }

    #[test]
    fn scoring_looks_at_content_not_policy() {
        let digits_only = calculate_entropy("12345678");
        let with_symbol = calculate_entropy("1234567!");
        assert!((digits_only - 8.0 * 10f64.log2()).abs() < 1e-9);
        let expected = 8.0 * ((DIGITS.len() + SPECIAL.len()) as f64).log2();
        assert!((with_symbol - expected).abs() < 1e-9);
    }

    #[test]
    fn label_never_drops_when_entropy_rises() {
        let samples = [
            "", "a", "ab", "abc", "abcd", "Ab1", "abcdef", "abcdefg", "Abcdef1",
            "abcdEFGH", "abcdEFGH12", "abcdEFGH1234", "aB3$", "aB3$eF6&hI9(",
            "zzzzzzzzzzzzzzzzzzzz", "0000", "!!!!!!!!",
        ];

        for a in samples {
            for b in samples {
                if calculate_entropy(a) > calculate_entropy(b) {
                    assert!(
                        classify_strength(a) >= classify_strength(b),
                        "{a:?} scored below {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for password in ["hunter2", "Tr0ub4dor&3", "correcthorsebatterystaple"] {
            assert_eq!(classify_strength(password), classify_strength(password));
        }
    }
}
