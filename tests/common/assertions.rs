//! Predicates for command output

#![allow(dead_code)]

use predicates::prelude::*;

pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✕ Error:").and(predicates::str::contains(message.to_string()))
}

pub fn is_clock_time() -> impl Predicate<str> {
    predicates::str::is_match(r"^\d{2}:\d{2}\n$").expect("valid regex")
}

pub fn has_success(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✓").and(predicates::str::contains(message.to_string()))
}
