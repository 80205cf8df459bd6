//! `GalleryApp`: the top-level egui application state.
//!
//! This module declares the `GalleryApp` struct and its constructor.
//! All methods are split across the sibling sub-modules:
//!
//! - `navigation`: background page load and thumbnail polling
//! - `toolbar`: page/data fields and layout controls
//! - `content`: the rendered gallery and interaction dispatch

pub mod content;
pub mod navigation;
pub mod toolbar;

use std::collections::HashMap;
use std::sync::mpsc;

use eframe::egui;

use project_gallery::config::GalleryConfig;
use project_gallery::engine::{GalleryPage, PageError};
use project_gallery::net::image::ImageLoader;

// ─── Application state ───────────────────────────────────────────────────────

pub struct GalleryApp {
    /// Host page location; blank renders into the stock page.
    pub page_input: String,
    pub config: GalleryConfig,
    pub page: Option<GalleryPage>,
    pub error: Option<String>,
    pub loading: bool,
    pub fetch_rx: Option<mpsc::Receiver<Result<GalleryPage, PageError>>>,
    pub show_stats: bool,
    pub show_html: bool,
    pub dark_mode: bool,
    /// Element to bring into view on the next frame.
    pub scroll_target: Option<String>,
    pub image_loader: ImageLoader,
    pub image_textures: HashMap<String, egui::TextureHandle>,
}

impl GalleryApp {
    pub fn new(config: GalleryConfig, page: Option<String>) -> Self {
        Self {
            page_input: page.unwrap_or_default(),
            config,
            page: None,
            error: None,
            loading: false,
            fetch_rx: None,
            show_stats: true,
            show_html: false,
            dark_mode: false,
            scroll_target: None,
            image_loader: ImageLoader::new(),
            image_textures: HashMap::new(),
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch();
        self.poll_images(ctx);

        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        if self.show_stats {
            egui::SidePanel::right("stats")
                .resizable(false)
                .default_width(200.0)
                .show(ctx, |ui| {
                    self.draw_stats(ui);
                });
        }

        if self.show_html {
            self.draw_html_window(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });

        if self.loading || self.image_loader.pending_count() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
