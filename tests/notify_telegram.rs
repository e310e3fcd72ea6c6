// tests/notify_telegram.rs
//! Telegram notifier against a mock Bot API endpoint.

use httpmock::prelude::*;

use job_radar::notify::telegram::TelegramNotifier;
use job_radar::notify::Notifier;

#[tokio::test]
async fn posts_send_message_with_the_chat_id_and_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/bottoken-123/sendMessage")
            .json_body_partial(r#"{"chat_id":"42","text":"hello","disable_web_page_preview":true}"#);
        then.status(200).body(r#"{"ok":true}"#);
    });

    let notifier = TelegramNotifier::new("token-123".into(), "42".into())
        .with_api_base(server.base_url())
        .with_retries(1);
    notifier.send("hello").await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn a_persistent_api_error_is_fatal() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/botbad/sendMessage");
        then.status(403).body(r#"{"ok":false,"description":"forbidden"}"#);
    });

    let notifier = TelegramNotifier::new("bad".into(), "42".into())
        .with_api_base(server.base_url())
        .with_retries(1);
    let err = notifier.send("hello").await.unwrap_err();
    assert!(err.to_string().contains("Telegram"));
    mock.assert();
}

#[tokio::test]
async fn a_transient_error_is_retried() {
    let server = MockServer::start();
    // httpmock serves the first matching mock; register a one-shot failure
    // followed by a success on the same path is not expressible, so assert
    // the retry count against a permanently failing endpoint instead.
    let mock = server.mock(|when, then| {
        when.method(POST).path("/botflaky/sendMessage");
        then.status(500);
    });

    let notifier = TelegramNotifier::new("flaky".into(), "42".into())
        .with_api_base(server.base_url())
        .with_retries(3);
    assert!(notifier.send("hello").await.is_err());
    mock.assert_hits(3);
}
