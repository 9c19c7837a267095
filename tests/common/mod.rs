#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use arcalab::{
    AppState, Config,
    config::{BookingConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use arcalab_blog::ContentStore;
use arcalab_booking::{Booking, is_bookable, today_in};
use arcalab_contact::ContactMessage;
use arcalab_notification::{EmailConfig, Notifier};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use time::Date;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Keeps every submission in memory so tests can assert on them.
#[derive(Default)]
pub struct RecordingNotifier {
    pub bookings: Mutex<Vec<Booking>>,
    pub messages: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn booking_confirmed(&self, booking: &Booking) -> anyhow::Result<()> {
        self.bookings.lock().await.push(booking.clone());
        Ok(())
    }

    async fn message_received(&self, message: &ContactMessage) -> anyhow::Result<()> {
        self.messages.lock().await.push(message.clone());
        Ok(())
    }
}

impl RecordingNotifier {
    /// Delivery is spawned, so give it a moment to land.
    pub async fn wait_for_bookings(&self, count: usize) -> Vec<Booking> {
        for _ in 0..100 {
            let bookings = self.bookings.lock().await.clone();
            if bookings.len() >= count {
                return bookings;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        self.bookings.lock().await.clone()
    }

    pub async fn wait_for_messages(&self, count: usize) -> Vec<ContactMessage> {
        for _ in 0..100 {
            let messages = self.messages.lock().await.clone();
            if messages.len() >= count {
                return messages;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        self.messages.lock().await.clone()
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        booking: BookingConfig::default(),
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<RecordingNotifier>,
    pub config: Config,
}

pub fn create_test_app() -> TestApp {
    let config = test_config();
    let notifier = Arc::new(RecordingNotifier::default());

    let state = AppState {
        config: Arc::new(config.clone()),
        content: Arc::new(ContentStore::load().expect("embedded posts should parse")),
        notifier: notifier.clone(),
    };

    TestApp {
        router: arcalab::router(state),
        notifier,
        config,
    }
}

/// First bookable day from today on, in the configured timezone.
pub fn next_bookable(config: &Config) -> Date {
    let today = today_in(&config.booking.timezone);
    let mut date = today;

    while !is_bookable(date, today) {
        date = date.next_day().expect("date in range");
    }

    date
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    (status, body_string(response).await)
}

pub async fn post_form(router: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}
