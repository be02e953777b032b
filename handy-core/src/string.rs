// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Suffix appended by [`truncate`].
pub const DEFAULT_ELLIPSIS: &str = "...";

/// `s` with its first character uppercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_'
}

/// Convert camelCase, spaced or snake_case text to kebab-case.
///
/// An uppercase letter right after a lowercase letter or a digit starts a new
/// word; acronyms stay together. Runs of whitespace and underscores collapse
/// into one `-`.
///
/// ```
/// use handy_core::to_kebab_case;
///
/// assert_eq!(to_kebab_case("helloWorld"), "hello-world");
/// assert_eq!(to_kebab_case("foo_bar"), "foo-bar");
/// assert_eq!(to_kebab_case("Background Color"), "background-color");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    let mut kebab = String::with_capacity(s.len() + 4);
    let mut previous: Option<char> = None;

    for c in s.chars() {
        if is_separator(c) {
            if !previous.is_some_and(is_separator) {
                kebab.push('-');
            }
        } else {
            let after_word = previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            if c.is_uppercase() && after_word {
                kebab.push('-');
            }
            kebab.extend(c.to_lowercase());
        }
        previous = Some(c);
    }

    kebab
}

/// Cut `s` to `length` characters followed by `...`; shorter text is kept.
///
/// ```
/// use handy_core::truncate;
///
/// assert_eq!(truncate("Hello, world!", 8), "Hello, w...");
/// assert_eq!(truncate("Hi", 8), "Hi");
/// ```
pub fn truncate(s: &str, length: usize) -> String {
    truncate_with(s, length, DEFAULT_ELLIPSIS)
}

/// [`truncate`] with a custom suffix.
pub fn truncate_with(s: &str, length: usize, ellipsis: &str) -> String {
    match s.char_indices().nth(length) {
        Some((cut, _)) => format!("{}{ellipsis}", &s[..cut]),
        None => s.to_owned(),
    }
}
