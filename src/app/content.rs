//! Main viewport rendering for `GalleryApp`.
//!
//! Draws the rendered host document, routes clicks into the page as
//! interactions, and turns the resulting effects into scrolling.

use eframe::egui;
use url::Url;

use project_gallery::engine::{Effect, GalleryPage};

use super::GalleryApp;
use crate::ui::{render_gallery_node, NodeView};

impl GalleryApp {
    /// Render the central gallery viewport.
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::from_rgb(220, 50, 50), err.as_str());
            return;
        }
        let Some(page) = &mut self.page else {
            if !self.loading {
                ui.label("Press Reload to render the gallery.");
            }
            return;
        };

        let base = Url::parse(&page.tree().url).ok();
        let had_target = self.scroll_target.is_some();
        let mut view = NodeView::new(
            &self.image_textures,
            &self.image_loader,
            base.as_ref(),
            self.scroll_target.as_deref(),
        );
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                render_gallery_node(ui, &page.tree().root, 0, &mut view);
            });

        let NodeView {
            scrolled,
            wanted_images,
            action,
            open_url,
            ..
        } = view;

        if had_target {
            if !scrolled {
                log::debug!("scroll target {:?} not rendered", self.scroll_target);
            }
            self.scroll_target = None;
        }
        if let Some(url) = open_url {
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }
        if let Some(interaction) = action {
            log::debug!("{:?}", interaction);
            for effect in page.apply(interaction) {
                apply_effect(&mut self.scroll_target, effect);
            }
        }
        self.request_images(wanted_images);
    }

    /// Summary of the loaded page.
    pub fn draw_stats(&self, ui: &mut egui::Ui) {
        ui.heading("Gallery");
        ui.separator();
        let Some(page) = &self.page else {
            ui.label("Nothing loaded");
            return;
        };
        stat_row(ui, "Layout", &layout_name(page));
        stat_row(ui, "Categories", &page.groups().len().to_string());
        stat_row(ui, "Projects", &page.groups().record_count().to_string());
        stat_row(ui, "ToC entries", &page.toc().len().to_string());
        if let Some(category) = page.selected_category() {
            stat_row(ui, "Selected", category);
        }
        if let Some(index) = page.open_section() {
            stat_row(ui, "Open section", &index.to_string());
        }
        stat_row(ui, "Thumbnails", &self.image_textures.len().to_string());
        let pending = self.image_loader.pending_count();
        if pending > 0 {
            stat_row(ui, "Loading", &pending.to_string());
        }
        if let Some(err) = page.error() {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(220, 50, 50), err.to_string());
        }
    }

    /// Serialized document, as `render` would write it.
    pub fn draw_html_window(&mut self, ctx: &egui::Context) {
        let Some(page) = &self.page else {
            return;
        };
        let mut html = page.to_html();
        egui::Window::new("Rendered HTML")
            .open(&mut self.show_html)
            .default_size([640.0, 480.0])
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut html)
                            .font(egui::TextStyle::Monospace)
                            .interactive(false)
                            .desired_width(f32::INFINITY),
                    );
                });
            });
    }
}

fn apply_effect(scroll_target: &mut Option<String>, effect: Effect) {
    match effect {
        Effect::ScrollIntoView(id) | Effect::JumpToAnchor(id) => *scroll_target = Some(id),
        Effect::CarouselRefresh => log::debug!("carousel track changed"),
    }
}

fn layout_name(page: &GalleryPage) -> String {
    match page.strategy() {
        Some(strategy) => format!("{:?}", strategy),
        None => "none".to_string(),
    }
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(value);
        });
    });
}
