//! Execution tests for the fetch utility.
//!
//! Uses wiremock to stand in for the profile API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use roster::{FetchClient, Load, ResponseEnvelope, RosterError};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Counts error events emitted by this crate.
#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::ERROR && meta.target().starts_with("roster") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn envelope_json() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "gender": "female",
            "name": { "title": "Ms", "first": "Ann", "last": "Lee" },
            "location": {
                "street": { "number": 4021, "name": "Mill Lane" },
                "city": "Leeds",
                "state": "West Yorkshire",
                "country": "United Kingdom",
                "postcode": 51873,
                "coordinates": { "latitude": "-28.4305", "longitude": "111.5317" }
            },
            "email": "ann.lee@example.com",
            "login": {
                "uuid": "155e77ee-ba6d-486f-95ce-0e0c0fb4b919",
                "username": "silverswan131",
                "password": "firewall",
                "salt": "TQA1Gz7x",
                "md5": "dc523cb313b63dfe5be2140b0c05b3bc",
                "sha1": "7a4aa07d1bedcc6bcf4b7f8856643492c191540d"
            },
            "dob": { "date": "1993-07-20T09:44:18.674Z", "age": 30 },
            "phone": "015242 07811",
            "cell": "0700-326-155",
            "id": { "name": "NINO", "value": "FY 10 46 40 D" },
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/75.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
            },
            "nat": "GB"
        }],
        "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
    })
}

#[tokio::test]
async fn test_envelope_passes_through_unchanged() {
    let mock_server = MockServer::start().await;
    let body = envelope_json();

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let url = format!("{}/api/?results=1", mock_server.uri());
    let payload = client.get_data::<ResponseEnvelope>(&url).await.unwrap();

    // The raw value is exactly what the server sent
    assert_eq!(payload.as_value(), &body);

    let envelope = payload.into_typed().unwrap();
    assert_eq!(envelope.info.seed, "abc");
    assert_eq!(envelope.results.len(), 1);
    assert_eq!(envelope.results[0].name.first, "Ann");
    assert_eq!(envelope.results[0].location.coordinates.latitude, "-28.4305");

    // Decoding then re-encoding yields the same JSON
    assert_eq!(serde_json::to_value(&envelope).unwrap(), body);
}

#[tokio::test]
async fn test_connection_refused_logs_once_and_fails() {
    // Reserve a port, then free it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = FetchClient::new().unwrap();
    let result = client
        .get_data::<ResponseEnvelope>(&format!("http://{addr}/api/"))
        .await;

    match result {
        Err(RosterError::FetchFailed { message }) => assert!(!message.is_empty()),
        other => panic!("Expected FetchFailed, got {other:?}"),
    }
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_non_json_body_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = FetchClient::new().unwrap();
    let err = client
        .get_data::<ResponseEnvelope>(&format!("{}/api/", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        RosterError::FetchFailed { message } => {
            assert!(message.contains("not JSON"), "unexpected message: {message}")
        }
        other => panic!("Expected FetchFailed, got {other:?}"),
    }
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_empty_body_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let result = client
        .get_data::<ResponseEnvelope>(&mock_server.uri())
        .await;

    assert!(matches!(result, Err(RosterError::FetchFailed { .. })));
}

#[tokio::test]
async fn test_each_call_hits_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let url = format!("{}/api/", mock_server.uri());
    client.get_data::<ResponseEnvelope>(&url).await.unwrap();
    client.get_data::<ResponseEnvelope>(&url).await.unwrap();

    // wiremock verifies the expectation on MockServer drop
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json()))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let url = format!("{}/api/", mock_server.uri());
    let (a, b, c) = tokio::join!(
        ResponseEnvelope::load(&client, &url),
        ResponseEnvelope::load(&client, &url),
        ResponseEnvelope::load(&client, &url),
    );

    assert_eq!(a.unwrap(), b.unwrap());
    assert!(c.is_ok());
}

#[tokio::test]
async fn test_error_status_with_json_body_is_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "error": "Uh oh, something has gone wrong." })),
        )
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let payload = client
        .get_data::<ResponseEnvelope>(&mock_server.uri())
        .await
        .expect("status is not inspected");

    assert_eq!(
        payload.pointer("/error").and_then(|v| v.as_str()),
        Some("Uh oh, something has gone wrong.")
    );
}

#[tokio::test]
async fn test_shape_mismatch_surfaces_at_use_without_logging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [],
            "info": { "seed": "abc", "results": "zero", "page": 1, "version": "1.4" }
        })))
        .mount(&mock_server)
        .await;

    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = FetchClient::new().unwrap();
    let payload = client
        .get_data::<ResponseEnvelope>(&mock_server.uri())
        .await
        .expect("fetch succeeds regardless of shape");

    let err = payload.decode().unwrap_err();
    assert!(matches!(err, RosterError::ShapeMismatch { .. }));
    assert!(err.to_string().contains("ResponseEnvelope"));

    // The raw value is still usable
    assert_eq!(payload.pointer("/info/seed").and_then(|v| v.as_str()), Some("abc"));
    assert_eq!(counter.count(), 0);
}
