#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use musetunes::{
    config::Config,
    management::MemoryStorage,
    session::{Session, SessionStorage, Window},
};

pub const REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";

/// Window double that records what the orchestration layer did to it.
#[derive(Default)]
pub struct FakeWindow {
    pub location: Mutex<String>,
    pub replaced: Mutex<Vec<String>>,
    pub navigations: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
}

impl FakeWindow {
    pub fn at(href: &str) -> Arc<Self> {
        let window = Self::default();
        *window.location.lock().unwrap() = href.to_string();
        Arc::new(window)
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn replaced(&self) -> Vec<String> {
        self.replaced.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Window for FakeWindow {
    fn href(&self) -> String {
        self.location.lock().unwrap().clone()
    }

    fn replace_location(&self, url: &str) {
        *self.location.lock().unwrap() = url.to_string();
        self.replaced.lock().unwrap().push(url.to_string());
    }

    fn navigate(&self, url: &str) {
        self.navigations.lock().unwrap().push(url.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub fn test_config(api_url: &str) -> Config {
    Config {
        client_id: Some("test-client".to_string()),
        redirect_uri: REDIRECT_URI.to_string(),
        api_url: api_url.to_string(),
        ..Config::default()
    }
}

pub fn test_session(
    config: Config,
    window: Arc<FakeWindow>,
) -> (Session, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let session = Session::new(
        config,
        storage.clone() as Arc<dyn SessionStorage>,
        window as Arc<dyn Window>,
    );
    (session, storage)
}

pub fn raw_track(id: &str, name: &str, artist: &str, cover: Option<&str>) -> serde_json::Value {
    let images = match cover {
        Some(url) => serde_json::json!([{ "url": url, "height": 640, "width": 640 }]),
        None => serde_json::json!([]),
    };
    serde_json::json!({
        "id": id,
        "name": name,
        "uri": format!("spotify:track:{}", id),
        "artists": [{ "id": format!("{}-artist", id), "name": artist }],
        "album": {
            "id": format!("{}-album", id),
            "name": format!("{} album", name),
            "images": images
        }
    })
}
