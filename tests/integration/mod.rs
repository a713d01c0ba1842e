//! Integration tests for the FalconBowl backend.
//!
//! These bind a real listener on an ephemeral localhost port and talk to it
//! over HTTP, so they exercise the same stack `falconbowl serve` runs.

use std::io::Write;
use std::net::SocketAddr;

use falconbowl::api::create_router;
use falconbowl::quiz::{Game, QuestionBank, QuestionStatus};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Start the server in the background and return its address.
async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router()).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn serves_greeting_and_questions() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"Hello": "World"}));

    let response = client
        .get(format!("http://{}/questions", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"questions": []}));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{}/unknown", addr)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_are_stable_across_requests() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/questions", addr);

    let mut bodies = Vec::new();
    for _ in 0..5 {
        let bytes = client.get(&url).send().await.unwrap().bytes().await.unwrap();
        bodies.push(bytes);
    }

    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(&bodies[0][..], br#"{"questions":[]}"#);
}

#[tokio::test]
async fn cross_origin_preflight_is_allowed() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("http://{}/questions", addr))
        .header("Origin", "https://falconbowl.example")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "authorization,content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "https://falconbowl.example"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "PUT");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization,content-type"
    );
}

#[tokio::test]
async fn cross_origin_get_carries_headers() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/", addr))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");
}

#[test]
fn bank_file_plays_through() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "questions": [
                {{"quarter": 1, "number": "1.1", "question": "Largest planet?", "answer": "Jupiter"}},
                {{"quarter": 3, "number": "3.1", "question": "Element Fe?", "answer": "Iron"}},
                {{"quarter": 3, "number": "3.9", "question": "First emperor of Rome?", "answer": "Augustus (Octavian)"}},
                {{"quarter": 4, "number": "4.1", "question": "Capital + of * Japan?", "answer": "Tokyo"}}
            ],
            "categories": ["Science", "History"]
        }}"#
    )
    .unwrap();

    let bank = QuestionBank::load(file.path()).unwrap();
    bank.validate().unwrap();
    let mut game = Game::new(bank).unwrap();

    game.buzz().unwrap();
    assert!(game.submit("jupiter").unwrap().correct);
    game.next().unwrap();

    assert!(game.is_paused());
    game.choose_category(1).unwrap();
    assert_eq!(game.header().unwrap(), "Quarter 3 - Question 9");
    game.buzz().unwrap();
    assert!(game.submit("augustus").unwrap().correct);
    game.next().unwrap();

    assert_eq!(game.power(), 30);
    game.buzz().unwrap();
    assert_eq!(game.submit("Tokyo").unwrap().points, 30);
    assert_eq!(game.status(), QuestionStatus::AnswerChecked);
    game.next().unwrap();

    assert!(game.is_over());
    assert_eq!(game.score(), 50);
}
