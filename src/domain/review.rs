//! Operator review: secret masking and yes/no parsing.

/// Keys containing this substring (any case) are masked on review.
const SECRET_MARKER: &str = "password";

pub fn is_secret_key(key: &str) -> bool {
    key.to_lowercase().contains(SECRET_MARKER)
}

/// One `*` per character of `value`.
pub fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

pub fn review_line(key: &str, value: &str) -> String {
    if is_secret_key(key) { format!("{key}: {}", mask(value)) } else { format!("{key}: {value}") }
}

/// Operator answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Rejected,
}

impl Confirmation {
    /// Anything whose trimmed, lowercased form does not start with `y` is a rejection.
    pub fn parse(answer: &str) -> Self {
        if answer.trim().to_lowercase().starts_with('y') {
            Confirmation::Accepted
        } else {
            Confirmation::Rejected
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Confirmation::Accepted
    }
}
