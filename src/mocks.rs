//! In-memory stand-ins for the network collaborators, shared by unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use stargazer_core::{
    error::{FetchError, StargazerError},
    message::{ChatAction, IncomingMessage, OutgoingMessage},
    space::{Apod, MarsPhotos, NeoFeed},
    traits::{Channel, SpaceApi, Translator},
};
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Space API returning canned results and remembering requested APOD dates.
pub struct MockSpace {
    pub apod: Result<Apod, FetchError>,
    pub neo: Result<NeoFeed, FetchError>,
    pub mars: Result<MarsPhotos, FetchError>,
    pub apod_dates: Mutex<Vec<NaiveDate>>,
}

impl MockSpace {
    /// Every endpoint answers 500.
    pub fn failing() -> Self {
        Self {
            apod: Err(FetchError::Status(500)),
            neo: Err(FetchError::Status(500)),
            mars: Err(FetchError::Status(500)),
            apod_dates: Mutex::new(Vec::new()),
        }
    }

    pub fn with_apod(mut self, json: &str) -> Self {
        self.apod = Ok(serde_json::from_str(json).unwrap());
        self
    }

    pub fn with_neo(mut self, json: &str) -> Self {
        self.neo = Ok(serde_json::from_str(json).unwrap());
        self
    }

    pub fn with_mars(mut self, json: &str) -> Self {
        self.mars = Ok(serde_json::from_str(json).unwrap());
        self
    }
}

#[async_trait]
impl SpaceApi for MockSpace {
    async fn apod(&self, date: NaiveDate) -> Result<Apod, FetchError> {
        self.apod_dates.lock().unwrap().push(date);
        self.apod.clone()
    }

    async fn neo_feed(&self) -> Result<NeoFeed, FetchError> {
        self.neo.clone()
    }

    async fn mars_photos(&self) -> Result<MarsPhotos, FetchError> {
        self.mars.clone()
    }
}

/// Translator that tags its input with the target language, e.g. "[ru] E".
pub struct TagTranslator;

#[async_trait]
impl Translator for TagTranslator {
    fn name(&self) -> &str {
        "tag"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, StargazerError> {
        Ok(format!("[{target_lang}] {text}"))
    }
}

/// Translator that always fails.
pub struct BrokenTranslator;

#[async_trait]
impl Translator for BrokenTranslator {
    fn name(&self) -> &str {
        "broken"
    }

    async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String, StargazerError> {
        Err(StargazerError::Translate("backend down".into()))
    }
}

/// Everything a [`RecordingChannel`] was asked to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Action(String, ChatAction),
    Text(String, String),
    Photo(String, String, String),
}

/// Channel that records outbound calls instead of talking to a platform.
#[derive(Default)]
pub struct RecordingChannel {
    pub sent: Mutex<Vec<Sent>>,
    pub username: Option<String>,
}

impl RecordingChannel {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        "recording"
    }

    fn bot_username(&self) -> Option<String> {
        self.username.clone()
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, StargazerError> {
        let (_tx, rx) = mpsc::channel(1);
        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), StargazerError> {
        let target = message.reply_target.unwrap_or_default();
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Text(target, message.text));
        Ok(())
    }

    async fn send_chat_action(
        &self,
        target: &str,
        action: ChatAction,
    ) -> Result<(), StargazerError> {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Action(target.to_string(), action));
        Ok(())
    }

    async fn send_photo(
        &self,
        target: &str,
        url: &str,
        caption: &str,
    ) -> Result<(), StargazerError> {
        self.sent.lock().unwrap().push(Sent::Photo(
            target.to_string(),
            url.to_string(),
            caption.to_string(),
        ));
        Ok(())
    }

    async fn stop(&self) -> Result<(), StargazerError> {
        Ok(())
    }
}

pub const APOD_JSON: &str = r#"{"title":"T","explanation":"E","url":"http://x/img.jpg"}"#;

pub const NEO_JSON: &str = r#"{
    "near_earth_objects": {
        "2024-05-01": [
            {
                "name": "(2019 AB)",
                "estimated_diameter": {"meters": {"estimated_diameter_min": 10.5, "estimated_diameter_max": 23.4}},
                "close_approach_data": [{
                    "miss_distance": {"kilometers": "1234567.89"},
                    "relative_velocity": {"kilometers_per_hour": "45000.1"}
                }]
            },
            {
                "name": "(2021 QQ)",
                "estimated_diameter": {"meters": {"estimated_diameter_min": 100.0, "estimated_diameter_max": 220.5}},
                "close_approach_data": [{
                    "miss_distance": {"kilometers": "7654321.0"},
                    "relative_velocity": {"kilometers_per_hour": "61000.9"}
                }]
            }
        ],
        "2024-05-02": [
            {
                "name": "(2022 ZZ)",
                "estimated_diameter": {"meters": {"estimated_diameter_min": 5.0, "estimated_diameter_max": 9.75}},
                "close_approach_data": [{
                    "miss_distance": {"kilometers": "555.5"},
                    "relative_velocity": {"kilometers_per_hour": "12.25"}
                }]
            }
        ]
    }
}"#;

pub const MARS_JSON: &str = r#"{"photos": [
    {"id": 1, "img_src": "http://mars/1.jpg"},
    {"id": 2, "img_src": "http://mars/2.jpg"},
    {"id": 3, "img_src": "http://mars/3.jpg"}
]}"#;
