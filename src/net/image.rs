//! Background thumbnail fetcher for the preview window.
//!
//! Card images are a decorative hook: a thumbnail that fails to load is
//! remembered as failed and the card is drawn without it.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use url::Url;

use super::fetch::fetch;

/// Longest edge kept after decoding; larger images are downscaled.
const MAX_EDGE: u32 = 480;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Manages background thumbnail fetching and decoding, keyed by resolved URL.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Option<ImageData>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Request a thumbnail to be fetched in the background.
    pub fn request(&mut self, url: &Url) {
        let key = url.to_string();
        if self.loaded.contains_key(&key)
            || self.pending.contains_key(&key)
            || self.failed.contains(&key)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let url_owned = url.clone();

        std::thread::spawn(move || {
            let result = fetch_and_decode(&url_owned);
            let _ = tx.send(result);
        });

        self.pending.insert(key, rx);
    }

    /// Poll for completed downloads. Returns true if anything finished.
    pub fn poll(&mut self) -> bool {
        let mut completed = Vec::new();
        for (url, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Some(data)) => {
                    self.loaded.insert(url.clone(), data);
                    completed.push(url.clone());
                }
                Ok(None) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("thumbnail unavailable: {}", url);
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for url in &completed {
            self.pending.remove(url);
        }
        !completed.is_empty()
    }

    /// Move every decoded image out of the loader (the caller uploads each once).
    pub fn drain_loaded(&mut self) -> Vec<(String, ImageData)> {
        self.loaded.drain().collect()
    }

    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// Number of images still being fetched.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Forget everything, e.g. when the data file is reloaded.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.loaded.clear();
        self.failed.clear();
    }
}

fn fetch_and_decode(url: &Url) -> Option<ImageData> {
    let result = fetch(url).ok()?;
    if !result.is_success() {
        return None;
    }

    let img = image::load_from_memory(&result.body).ok()?;
    let img = if img.width() > MAX_EDGE || img.height() > MAX_EDGE {
        img.thumbnail(MAX_EDGE, MAX_EDGE)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Some(ImageData {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
