//! Palindrome Module
//!
//! The pure predicate and its cache-backed wrapper.

mod checker;
mod predicate;

pub use checker::{cache_key, PalindromeChecker, Subject, Verdict, CACHE_KEY_PREFIX};
pub use predicate::{is_palindrome, normalize};
