//! Password scoring rules
//!
//! Each rule checks one property of a password and contributes a fixed
//! weight to the score when satisfied. Rules are independent: all of them
//! are evaluated for every password.

mod length;
mod variety;

use secrecy::SecretString;

pub use length::{MIN_LENGTH, min_length_rule};
pub use variety::{SYMBOLS, digit_rule, lowercase_rule, symbol_rule, uppercase_rule};

/// Predicate evaluated against a password.
pub type RuleCheck = fn(&SecretString) -> bool;

/// A named, weighted scoring rule.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub weight: u8,
    pub check: RuleCheck,
}

/// All scoring rules. Weights sum to 100.
pub static RULES: [ScoringRule; 5] = [
    ScoringRule {
        name: "length",
        weight: 25,
        check: min_length_rule,
    },
    ScoringRule {
        name: "uppercase",
        weight: 25,
        check: uppercase_rule,
    },
    ScoringRule {
        name: "lowercase",
        weight: 25,
        check: lowercase_rule,
    },
    ScoringRule {
        name: "digit",
        weight: 15,
        check: digit_rule,
    },
    ScoringRule {
        name: "symbol",
        weight: 10,
        check: symbol_rule,
    },
];

/// Returns the rules the password satisfies, in table order.
pub fn satisfied_rules(password: &SecretString) -> Vec<&'static ScoringRule> {
    RULES.iter().filter(|rule| (rule.check)(password)).collect()
}

/// Sum of the weights of every satisfied rule.
pub fn total_score(password: &SecretString) -> u8 {
    satisfied_rules(password).iter().map(|rule| rule.weight).sum()
}
