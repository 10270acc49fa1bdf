//! Palindrome predicate.

/// Lowercases `s` and drops every non-alphanumeric character.
pub fn normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// True when `s` reads the same in both directions after [`normalize`].
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = normalize(s).chars().collect();
    let mut front = 0;
    let mut back = chars.len();

    while front + 1 < back {
        back -= 1;
        if chars[front] != chars[back] {
            return false;
        }
        front += 1;
    }
    true
}
