// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use handy_core::{capitalize, to_kebab_case, truncate, truncate_with};

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("hello"), "Hello");
    assert_eq!(capitalize("Hello"), "Hello");
    assert_eq!(capitalize("hello world"), "Hello world");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_capitalize_non_ascii() {
    assert_eq!(capitalize("đà nẵng"), "Đà nẵng");
    assert_eq!(capitalize("ébène"), "Ébène");
}

#[test]
fn test_to_kebab_case_camel_case() {
    assert_eq!(to_kebab_case("helloWorld"), "hello-world");
    assert_eq!(to_kebab_case("backgroundColorValue"), "background-color-value");
    assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
}

#[test]
fn test_to_kebab_case_digit_before_uppercase() {
    assert_eq!(to_kebab_case("item2Name"), "item2-name");
    assert_eq!(to_kebab_case("h1Title"), "h1-title");
    assert_eq!(to_kebab_case("version2"), "version2");
}

#[test]
fn test_to_kebab_case_separators() {
    assert_eq!(to_kebab_case("foo_bar"), "foo-bar");
    assert_eq!(to_kebab_case("foo bar"), "foo-bar");
    assert_eq!(to_kebab_case("foo  __ bar"), "foo-bar");
    assert_eq!(to_kebab_case("Background Color"), "background-color");
}

#[test]
fn test_to_kebab_case_keeps_acronyms_together() {
    assert_eq!(to_kebab_case("parseHTTPError"), "parse-httperror");
    assert_eq!(to_kebab_case("URL"), "url");
}

#[test]
fn test_to_kebab_case_idempotent_on_kebab() {
    assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    assert_eq!(to_kebab_case(""), "");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("Hello, world!", 8), "Hello, w...");
    assert_eq!(truncate("Hello", 5), "Hello");
    assert_eq!(truncate("Hello", 10), "Hello");
    assert_eq!(truncate("Hello", 0), "...");
}

#[test]
fn test_truncate_counts_characters() {
    assert_eq!(truncate("Xin chào thế giới", 8), "Xin chào...");
}

#[test]
fn test_truncate_with_custom_ellipsis() {
    assert_eq!(truncate_with("Hello, world!", 5, "…"), "Hello…");
    assert_eq!(truncate_with("Hello, world!", 5, ""), "Hello");
}
