//! Loading methods for `GalleryApp`.
//!
//! Covers the asynchronous page-load lifecycle (`reload`, `check_fetch`) and
//! thumbnail uploads (`poll_images`).

use std::path::Path;
use std::sync::mpsc;

use eframe::egui;

use project_gallery::engine::{scaffold_document, Effect, GalleryEngine, GalleryPage, PageError};
use project_gallery::net::fetch::file_url;

use super::GalleryApp;

/// Title of the stock page.
const STOCK_TITLE: &str = "Projects";

/// Render into the stock page, as if it were `index.html` in the working directory.
fn load_stock_page(engine: &GalleryEngine) -> Result<GalleryPage, PageError> {
    let page_url = file_url(Path::new("index.html")).map_err(|source| PageError::Fetch {
        location: "index.html".into(),
        source,
    })?;
    let cfg = engine.config();
    let html = scaffold_document(cfg.layout, &cfg.mounts, STOCK_TITLE);
    Ok(engine.render_document(&html, page_url.as_str()))
}

impl GalleryApp {
    /// Start an async load of the host page and project list.
    pub fn reload(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.error = None;
        self.scroll_target = None;
        self.image_textures.clear();
        self.image_loader.clear();

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);

        let page = self.page_input.trim().to_string();
        let config = self.config.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let engine = GalleryEngine::new(config);
            let result = if page.is_empty() {
                load_stock_page(&engine)
            } else {
                engine.load_page(&page)
            };
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the async load channel and update app state when a result arrives.
    pub fn check_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        match result {
            Ok(page) => {
                for effect in page.initial_effects() {
                    if *effect == Effect::CarouselRefresh {
                        log::debug!("carousel track populated");
                    }
                }
                // A load error is shown inline by the page itself.
                self.error = None;
                self.page = Some(page);
            }
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(e.to_string());
                self.page = None;
            }
        }
        self.loading = false;
        self.fetch_rx = None;
    }

    /// Upload finished thumbnails as textures.
    pub fn poll_images(&mut self, ctx: &egui::Context) {
        if !self.image_loader.poll() {
            return;
        }
        for (url, data) in self.image_loader.drain_loaded() {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [data.width as usize, data.height as usize],
                &data.rgba,
            );
            let tex = ctx.load_texture(format!("img_{}", url), image, egui::TextureOptions::LINEAR);
            self.image_textures.insert(url, tex);
        }
    }

    /// Queue thumbnails the last frame drew without a texture.
    pub fn request_images(&mut self, urls: Vec<url::Url>) {
        for url in urls {
            if !self.image_textures.contains_key(url.as_str()) {
                self.image_loader.request(&url);
            }
        }
    }
}
