// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use handy::{
    debounce, deep_clone, group_by, is_email, parse_http_error, retry, settle_all, throttle,
    to_kebab_case, truncate, HttpErrorInfo, HttpResponseInfo, SearchParams, Settled,
};
use handy_test_utils::helpers::advance_ms;
use handy_test_utils::test_data::people;
use handy_test_utils::{CallRecorder, FlakyOperation, Person};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_debounced_search_normalizes_last_query() {
    // Arrange
    let recorder = CallRecorder::new();
    let record = recorder.callback();
    let search = debounce(
        move |query: String| record(to_kebab_case(&query)),
        Duration::from_millis(250),
    );

    // Act
    for query in ["user", "userName", "userNameFilter"] {
        search.call(query.to_string());
        advance_ms(100).await;
    }
    advance_ms(200).await;

    // Assert
    assert_eq!(recorder.calls(), vec!["user-name-filter".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_throttled_preview_truncates_latest_text() {
    // Arrange
    let recorder = CallRecorder::new();
    let record = recorder.callback();
    let preview = throttle(
        move |text: String| record(truncate(&text, 5)),
        Duration::from_millis(100),
    );

    // Act
    preview.call("Hello".to_string());
    preview.call("Hello, wor".to_string());
    preview.call("Hello, world!".to_string());
    advance_ms(110).await;

    // Assert
    assert_eq!(recorder.calls(), vec!["Hello...".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_settle_retried_requests_into_messages() {
    // Arrange
    let recovering = FlakyOperation::succeed_after(1);
    let down = FlakyOperation::always_failing();
    let request = |operation: FlakyOperation, status: u16| async move {
        retry(
            || {
                let operation = operation.clone();
                async move {
                    operation.attempt().await.map_err(|_| HttpErrorInfo {
                        response: Some(HttpResponseInfo {
                            status: Some(status),
                            message: None,
                        }),
                        request_sent: true,
                        message: None,
                    })
                }
            },
            2,
            Duration::from_millis(50),
        )
        .await
    };

    // Act
    let outcomes = settle_all(vec![
        request(recovering.clone(), 500),
        request(down.clone(), 503),
    ])
    .await;

    // Assert
    assert_eq!(outcomes[0], Settled::Fulfilled(2));
    let messages: Vec<String> = outcomes
        .iter()
        .filter_map(Settled::reason)
        .map(parse_http_error)
        .collect();
    assert_eq!(messages, vec!["Lỗi máy chủ: 503".to_string()]);
    assert_eq!(recovering.attempts(), 2);
    assert_eq!(down.attempts(), 3);
}

#[test]
fn test_query_string_validation() {
    let params = SearchParams::parse("?email=alice%40example.com&next=%2Fhome");

    assert!(params.get("email").is_some_and(is_email));
    assert!(!params.get("next").is_some_and(is_email));
}

#[test]
fn test_clone_then_group() -> anyhow::Result<()> {
    // Arrange
    let snapshot: Vec<Person> = deep_clone(&people())?;

    // Act
    let by_city = group_by(&snapshot, |person| person.city.clone());

    // Assert
    let names: Vec<(String, usize)> = by_city
        .into_iter()
        .map(|(city, people)| (city, people.len()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Hanoi".to_string(), 2),
            ("Da Nang".to_string(), 1),
            ("Hue".to_string(), 1),
        ]
    );
    Ok(())
}
