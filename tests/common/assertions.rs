//! Common assertion helpers for shell output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the plain prompt in a directory
pub fn has_prompt(user: &str, host: &str, cwd: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{user}@{host}:{cwd}$ "))
}

/// Creates a predicate that checks for the invalid archive message
pub fn invalid_archive() -> impl Predicate<str> {
    predicates::str::contains("There is no .tar archive")
}

/// Creates a predicate that checks for the missing directory message
pub fn no_such_directory(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("There is no directory with name '{name}'"))
}
