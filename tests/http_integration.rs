//! Integration tests for the PropertyPlus HTTP surface.
//!
//! Each test spins up an Axum server on a random port and exercises the
//! real REST contract with reqwest.

use std::time::Duration;

use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use propertyplus_bot::api::{AppState, api_routes};
use propertyplus_bot::listings::{Listing, ListingStore, PropertyType};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start an Axum server over `store` on a random port, return the port.
async fn start_server(store: ListingStore) -> u16 {
    let app = api_routes(AppState::new(store));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

/// POST a message and return the reply text.
async fn send_message(port: u16, body: Value) -> String {
    let resp = reqwest::Client::new()
        .post(format!("http://127.0.0.1:{port}/message"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: Value = resp.json().await.unwrap();
    json["reply"].as_str().expect("reply should be a string").to_string()
}

/// A store with more Lahore listings than a reply can show.
fn crowded_store() -> ListingStore {
    ListingStore::new(vec![
        Listing::new(10, "Lahore", PropertyType::House, 30_000_000, 5, 4, "Model Town"),
        Listing::new(11, "Lahore", PropertyType::Apartment, 8_000_000, 2, 1, "Johar Town"),
        Listing::new(12, "Lahore", PropertyType::Villa, 90_000_000, 7, 6, "Raiwind Road"),
        Listing::new(13, "Lahore", PropertyType::Plot, 4_000_000, 0, 0, "Bahria Town"),
        Listing::new(14, "Lahore", PropertyType::House, 22_000_000, 4, 3, "Cantt"),
        Listing::new(15, "Rawalpindi", PropertyType::House, 18_000_000, 4, 3, "Saddar"),
    ])
}

// ── Health / browse ──────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok_text() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(ListingStore::seeded()).await;

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), "ok");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn properties_filters_by_query_string() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(ListingStore::seeded()).await;

        let resp = reqwest::get(format!(
            "http://127.0.0.1:{port}/properties?type=APARTMENT&maxPrice=10000000"
        ))
        .await
        .unwrap();
        assert_eq!(resp.status(), 200);

        let json: Value = resp.json().await.unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(
            json["results"][0],
            json!({
                "id": 2,
                "city": "Karachi",
                "type": "apartment",
                "price": 9_000_000,
                "beds": 2,
                "baths": 2,
                "area": "Clifton"
            })
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn properties_with_bad_numbers_is_still_200() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(ListingStore::seeded()).await;

        let resp = reqwest::get(format!(
            "http://127.0.0.1:{port}/properties?maxPrice=abc&minBeds=&city="
        ))
        .await
        .unwrap();
        assert_eq!(resp.status(), 200);

        let json: Value = resp.json().await.unwrap();
        assert_eq!(json["count"], 4);
        assert_eq!(json["results"].as_array().unwrap().len(), 4);
    })
    .await
    .expect("test timed out");
}

// ── Chat ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn message_boundary_price_returns_listing_four() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(ListingStore::seeded()).await;

        let reply = send_message(
            port,
            json!({"message": "show apartments in Lahore under 1.2 crore with 3 beds"}),
        )
        .await;

        assert_eq!(
            reply,
            "Here are 1 match(es). Top results:\n\
             #4 apartment in Gulberg, Lahore — PKR 12,000,000 (3 beds, 3 baths)\n\n\
             You can refine by saying things like: \"apartments in Lahore under 1.2 crore with 3 beds\"."
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn message_lac_overrides_crore() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(ListingStore::seeded()).await;

        // 90 lac = 9,000,000 excludes the 12,000,000 Lahore apartment
        let reply = send_message(
            port,
            json!({"message": "3 bed apartment in lahore under 1.5 crore and 90 lac"}),
        )
        .await;
        assert!(reply.starts_with("I couldn't find matching properties."));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn message_lists_top_three_of_many() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(crowded_store()).await;

        let reply = send_message(port, json!({"message": "find something in lahore"})).await;

        assert!(reply.starts_with("Here are 5 match(es)."));
        let listed: Vec<&str> = reply.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(listed.len(), 3);
        assert!(listed[0].starts_with("#10 house in Model Town, Lahore"));
        assert!(listed[2].starts_with("#12 villa in Raiwind Road, Lahore"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn message_blank_gets_prompt() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(ListingStore::seeded()).await;

        assert_eq!(send_message(port, json!({"message": "   "})).await, "Please type a message.");
        assert_eq!(send_message(port, json!({})).await, "Please type a message.");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn message_intents_follow_priority() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server(ListingStore::seeded()).await;

        let greeting = send_message(port, json!({"message": "Salam! any villa?"})).await;
        assert!(greeting.starts_with("Hi there!"));

        let services = send_message(port, json!({"message": "What do you do?"})).await;
        assert!(services.starts_with("We offer: Property buying & selling"));

        let contact = send_message(port, json!({"message": "Your phone number please"})).await;
        assert!(contact.contains("+92-300-0000000"));

        let fallback = send_message(port, json!({"message": "tell me a joke"})).await;
        assert!(fallback.starts_with("I'm here to help"));
    })
    .await
    .expect("test timed out");
}
