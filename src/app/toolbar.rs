//! Toolbar rendering for `GalleryApp`.
//!
//! Draws the host page and data path fields, the layout selector, reload,
//! and the stats/HTML/dark-mode toggles.

use eframe::egui;
use project_gallery::config::LayoutPreference;

use super::GalleryApp;

impl GalleryApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let page = ui.add_sized(
                [ui.available_width() * 0.4, 24.0],
                egui::TextEdit::singleline(&mut self.page_input)
                    .hint_text("Host page (blank = stock page)")
                    .font(egui::TextStyle::Monospace),
            );
            let data = ui.add_sized(
                [200.0, 24.0],
                egui::TextEdit::singleline(&mut self.config.data_path)
                    .hint_text("Data path")
                    .font(egui::TextStyle::Monospace),
            );
            let entered = (page.lost_focus() || data.lost_focus())
                && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let prev_layout = self.config.layout;
            egui::ComboBox::from_id_salt("layout")
                .selected_text(self.config.layout.label())
                .show_ui(ui, |ui| {
                    for layout in LayoutPreference::ALL {
                        ui.selectable_value(&mut self.config.layout, layout, layout.label());
                    }
                });

            let reload = ui
                .add_enabled(!self.loading, egui::Button::new("Reload"))
                .clicked();
            if entered || reload || self.config.layout != prev_layout {
                self.reload(ctx);
            }

            if self.loading {
                ui.spinner();
            }

            ui.toggle_value(&mut self.show_stats, "Stats");
            ui.toggle_value(&mut self.show_html, "HTML");

            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }
}
