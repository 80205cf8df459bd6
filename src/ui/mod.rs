//! Generic egui UI helper functions for the preview window.
//!
//! This module walks the rendered host document and turns gallery markup
//! (cards, category buttons, section tabs, ToC links, carousel cards) into
//! egui widgets. Clicks are reported back as [`Interaction`]s so the page
//! state stays in the library.

use std::collections::HashMap;

use eframe::egui;
use url::Url;

use project_gallery::dom::css::{css_url_target, style_property};
use project_gallery::dom::{DomNode, NodeType};
use project_gallery::engine::Interaction;
use project_gallery::net::fetch::resolve_location;
use project_gallery::net::image::ImageLoader;

const CARD_WIDTH: f32 = 180.0;
const THUMB_HEIGHT: f32 = 100.0;

/// Per-frame drawing context
pub struct NodeView<'a> {
    pub textures: &'a HashMap<String, egui::TextureHandle>,
    pub images: &'a ImageLoader,
    /// Base for resolving relative image and link targets.
    pub base: Option<&'a Url>,
    /// Element id to scroll into view this frame.
    pub scroll_target: Option<&'a str>,
    pub scrolled: bool,
    /// Thumbnails drawn without a texture yet.
    pub wanted_images: Vec<Url>,
    pub action: Option<Interaction>,
    pub open_url: Option<String>,
}

impl<'a> NodeView<'a> {
    pub fn new(
        textures: &'a HashMap<String, egui::TextureHandle>,
        images: &'a ImageLoader,
        base: Option<&'a Url>,
        scroll_target: Option<&'a str>,
    ) -> Self {
        Self {
            textures,
            images,
            base,
            scroll_target,
            scrolled: false,
            wanted_images: Vec::new(),
            action: None,
            open_url: None,
        }
    }

    fn resolve(&self, reference: &str) -> Option<Url> {
        resolve_location(self.base, reference).ok()
    }

    fn thumbnail(&mut self, ui: &mut egui::Ui, src: &str) {
        let Some(url) = self.resolve(src) else {
            return;
        };
        if self.images.is_failed(url.as_str()) {
            return;
        }
        match self.textures.get(url.as_str()) {
            Some(tex) => {
                ui.add(
                    egui::Image::new(egui::load::SizedTexture::from_handle(tex))
                        .max_width(CARD_WIDTH)
                        .max_height(THUMB_HEIGHT),
                );
            }
            None => {
                ui.allocate_space(egui::vec2(CARD_WIDTH, THUMB_HEIGHT));
                self.wanted_images.push(url);
            }
        }
    }

    fn follow(&mut self, href: &str) {
        if href.starts_with('#') {
            self.action = Some(Interaction::FollowToc(href.to_string()));
        } else if let Some(url) = self.resolve(href) {
            self.open_url = Some(url.to_string());
        }
    }
}

// ─── Document rendering ───────────────────────────────────────────────────────

/// Recursively render a rendered gallery document using egui widgets.
pub fn render_gallery_node(ui: &mut egui::Ui, node: &DomNode, depth: usize, view: &mut NodeView) {
    if node.is_element() && node.is_hidden() {
        return;
    }
    let is_target = node.id().is_some() && node.id() == view.scroll_target;
    if is_target {
        let response = ui.scope(|ui| render_node_inner(ui, node, depth, view)).response;
        response.scroll_to_me(Some(egui::Align::TOP));
        view.scrolled = true;
    } else {
        render_node_inner(ui, node, depth, view);
    }
}

fn render_node_inner(ui: &mut egui::Ui, node: &DomNode, depth: usize, view: &mut NodeView) {
    match node.node_type {
        NodeType::Raw | NodeType::Comment => return,
        NodeType::Text => {
            let text = node.text.trim();
            if !text.is_empty() {
                ui.label(text);
            }
            return;
        }
        NodeType::Document | NodeType::Element => {}
    }

    match node.tag.as_str() {
        "head" | "script" | "style" | "template" => {}
        "h1" => {
            ui.heading(egui::RichText::new(node.collect_text()).size(28.0).strong());
            ui.add_space(8.0);
        }
        "h2" => {
            ui.heading(egui::RichText::new(node.collect_text()).size(22.0).strong());
            ui.add_space(6.0);
        }
        "h3" | "h4" | "h5" | "h6" => {
            ui.label(egui::RichText::new(node.collect_text()).size(18.0));
        }
        "p" => {
            let text = node.collect_text();
            if !text.is_empty() {
                ui.label(text);
                ui.add_space(4.0);
            }
        }
        "a" if node.has_class("project-box") => project_box(ui, node, view),
        "a" => link(ui, node, view),
        "button" if node.has_class("category-btn") => category_button(ui, node, view),
        "button" if node.has_class("section-tab") => section_tab(ui, node, view),
        "ul" | "ol" => {
            ui.indent(("list", depth), |ui| {
                for child in &node.children {
                    render_gallery_node(ui, child, depth + 1, view);
                }
            });
        }
        "li" => {
            ui.horizontal(|ui| {
                ui.label("\u{2022}");
                ui.vertical(|ui| {
                    for child in &node.children {
                        render_gallery_node(ui, child, depth + 1, view);
                    }
                });
            });
        }
        "img" => {
            if let Some(src) = node.attr("src") {
                view.thumbnail(ui, src);
            }
        }
        "hr" => {
            ui.separator();
        }
        _ if node.has_class("project-card") => carousel_card(ui, node, view),
        _ if node.has_class("project-box") => placeholder_box(ui, node),
        _ if node.has_class("toc-anchor") => {}
        _ if node.children.iter().any(|c| c.has_class("project-card")) => {
            egui::ScrollArea::horizontal()
                .id_salt(("carousel", depth))
                .show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        for child in &node.children {
                            render_gallery_node(ui, child, depth + 1, view);
                        }
                    });
                });
        }
        _ if is_wrapping_row(node) => {
            ui.horizontal_wrapped(|ui| {
                for child in &node.children {
                    render_gallery_node(ui, child, depth + 1, view);
                }
            });
            ui.add_space(6.0);
        }
        "section" => {
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                for child in &node.children {
                    render_gallery_node(ui, child, depth + 1, view);
                }
            });
        }
        _ => {
            for child in &node.children {
                render_gallery_node(ui, child, depth + 1, view);
            }
        }
    }
}

/// Rows of boxes and the category button list flow left to right.
fn is_wrapping_row(node: &DomNode) -> bool {
    node.has_class("projects-row")
        || node.has_class("project-grid")
        || node.children.iter().any(|c| c.has_class("category-btn"))
}

fn child_text(node: &DomNode, tag: &str) -> String {
    node.find(&|n| n.tag == tag)
        .map(|n| n.collect_text())
        .unwrap_or_default()
}

fn project_box(ui: &mut egui::Ui, node: &DomNode, view: &mut NodeView) {
    let title = child_text(node, "h3");
    let subtitle = child_text(node, "p");
    let image = style_property(node, "background-image").and_then(|v| css_url_target(&v));

    let response = egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            if let Some(src) = &image {
                view.thumbnail(ui, src);
            }
            ui.label(egui::RichText::new(truncate_str(&title, 40)).strong().italics());
            if !subtitle.is_empty() {
                ui.label(egui::RichText::new(truncate_str(&subtitle, 80)).small());
            }
        })
        .response
        .interact(egui::Sense::click());

    if let Some(href) = node.attr("href") {
        let response = response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(href);
        if response.clicked() {
            view.follow(href);
        }
    }
}

fn placeholder_box(ui: &mut egui::Ui, node: &DomNode) {
    let heading = child_text(node, "h3");
    let message = child_text(node, "p");
    let error = heading == "Error";
    egui::Frame::group(ui.style()).inner_margin(8.0).show(ui, |ui| {
        ui.set_min_width(CARD_WIDTH);
        let rt = egui::RichText::new(heading).strong().italics();
        if error {
            ui.label(rt.color(egui::Color32::from_rgb(220, 50, 50)));
        } else {
            ui.label(rt);
        }
        ui.label(egui::RichText::new(message).weak());
    });
}

fn category_button(ui: &mut egui::Ui, node: &DomNode, view: &mut NodeView) {
    let Some(category) = node.attr("data-category") else {
        return;
    };
    let active = node.has_class("is-active");
    let label = egui::RichText::new(category).strong();
    let response = ui
        .add(egui::SelectableLabel::new(active, label))
        .on_hover_text(child_text(node, "p"));
    if response.clicked() {
        view.action = Some(Interaction::SelectCategory(category.to_string()));
    }
}

fn section_tab(ui: &mut egui::Ui, node: &DomNode, view: &mut NodeView) {
    let Some(index) = node.attr("data-section").and_then(|s| s.parse::<usize>().ok()) else {
        return;
    };
    let open = node.has_class("is-open");
    let arrow = if open { "\u{25BC}" } else { "\u{25B6}" };
    let text = format!("{} {}", arrow, node.collect_text());
    let response = ui.add(
        egui::Button::new(egui::RichText::new(text).size(16.0).italics())
            .frame(false)
            .min_size(egui::vec2(ui.available_width(), 24.0)),
    );
    if response.clicked() {
        view.action = Some(Interaction::ToggleSection(index));
    }
}

fn link(ui: &mut egui::Ui, node: &DomNode, view: &mut NodeView) {
    let text = node.collect_text();
    let Some(href) = node.attr("href") else {
        ui.label(text);
        return;
    };
    let rt = egui::RichText::new(text)
        .color(egui::Color32::from_rgb(0, 100, 200))
        .underline();
    let response = ui
        .add(egui::Label::new(rt).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(href);
    if response.clicked() {
        view.follow(href);
    }
}

fn carousel_card(ui: &mut egui::Ui, node: &DomNode, view: &mut NodeView) {
    let link = node.find(&|n| n.has_class("card-link"));
    let href = link.and_then(|l| l.attr("href"));
    let title = node
        .find(&|n| n.has_class("title"))
        .map(|n| n.collect_text())
        .unwrap_or_default();
    let meta = node
        .find(&|n| n.has_class("meta"))
        .map(|n| n.collect_text())
        .unwrap_or_default();
    let image = node.find(&|n| n.tag == "img").and_then(|n| n.attr("src"));

    let response = egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            if let Some(src) = image {
                view.thumbnail(ui, src);
            }
            ui.label(egui::RichText::new(truncate_str(&title, 40)).strong());
            if !meta.is_empty() {
                ui.label(egui::RichText::new(truncate_str(&meta, 80)).small().weak());
            }
        })
        .response
        .interact(egui::Sense::click());

    if let Some(href) = href {
        if response.on_hover_text(href).clicked() {
            view.follow(href);
        }
    }
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
