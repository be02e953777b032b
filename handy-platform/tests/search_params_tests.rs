// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use handy_error::HandyError;
use handy_platform::SearchParams;
use std::collections::HashMap;

#[test]
fn test_get_single_values() {
    // Arrange
    let params = SearchParams::parse("?id=123&name=test");

    // Act & Assert
    assert_eq!(params.get("id"), Some("123"));
    assert_eq!(params.get("name"), Some("test"));
    assert_eq!(params.get("invalid"), None);
    assert_eq!(params.len(), 2);
}

#[test]
fn test_leading_question_mark_is_optional() {
    assert_eq!(SearchParams::parse("a=1"), SearchParams::parse("?a=1"));
}

#[test]
fn test_values_are_decoded() {
    let params = SearchParams::parse("?q=xin+ch%C3%A0o&path=%2Fhome%2F");

    assert_eq!(params.get("q"), Some("xin chào"));
    assert_eq!(params.get("path"), Some("/home/"));
}

#[test]
fn test_repeated_keys() {
    // Arrange
    let params = SearchParams::parse("?tag=a&tag=b&page=2&tag=c");

    // Act
    let map = params.to_map();

    // Assert
    assert_eq!(params.get("tag"), Some("a"));
    assert_eq!(params.get_all("tag").collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(
        map,
        HashMap::from([
            ("tag".to_string(), "c".to_string()),
            ("page".to_string(), "2".to_string()),
        ])
    );
}

#[test]
fn test_empty_and_valueless_parameters() {
    let params = SearchParams::parse("?flag&empty=");

    assert!(params.contains("flag"));
    assert_eq!(params.get("flag"), Some(""));
    assert_eq!(params.get("empty"), Some(""));
    assert!(SearchParams::parse("").is_empty());
    assert!(SearchParams::parse("?").is_empty());
}

#[test]
fn test_iter_preserves_order() {
    let params = SearchParams::parse("b=2&a=1");

    assert_eq!(params.iter().collect::<Vec<_>>(), vec![("b", "2"), ("a", "1")]);
}

#[test]
fn test_from_url() -> anyhow::Result<()> {
    let params = SearchParams::from_url("https://example.com/users?id=7&sort=name#top")?;

    assert_eq!(params.get("id"), Some("7"));
    assert_eq!(params.get("sort"), Some("name"));
    assert!(SearchParams::from_url("https://example.com")?.is_empty());
    Ok(())
}

#[test]
fn test_from_url_rejects_relative() {
    let result = SearchParams::from_url("/users?id=7");

    assert!(matches!(result, Err(HandyError::InvalidInput { .. })));
}

#[test]
fn test_get_outlives_borrowed_key() {
    // Arrange
    let params = SearchParams::parse("?id=7&lang=vi");

    // Act
    let value = {
        let key = String::from("lang");
        params.get(&key)
    };

    // Assert
    assert_eq!(value, Some("vi"));
}
