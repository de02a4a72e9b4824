use crate::content::{PanelBody, Presenter, NAMEPLATE};

const INFO_WIDTH: f32 = 420.0;
const TEXT_COLOR: egui::Color32 = egui::Color32::WHITE;
const TIP_COLOR: egui::Color32 = egui::Color32::GRAY;

/// Draws the label layer: nameplate, info text, supplementary panel,
/// and the transient help tip. Pure projection of the presenter state.
pub fn draw(ctx: &egui::Context, presenter: &Presenter) {
    let screen = ctx.screen_rect();

    egui::Window::new("nameplate")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(24.0, 24.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(NAMEPLATE)
                    .size(40.0)
                    .color(TEXT_COLOR),
            );
        });

    egui::Window::new("info")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(
            screen.center().x - INFO_WIDTH * 0.5,
            screen.max.y - 170.0,
        ))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.set_max_width(INFO_WIDTH);
            ui.label(
                egui::RichText::new(presenter.info_text)
                    .size(16.0)
                    .color(TEXT_COLOR),
            );
            ui.add_space(8.0);

            // Hidden panel keeps its stale body at opacity 0
            ui.set_opacity(if presenter.panel_visible { 1.0 } else { 0.0 });
            match presenter.panel_body {
                Some(PanelBody::Link { label, url }) => {
                    if ui.add(egui::Button::new(egui::RichText::new(label).size(15.0))).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                    }
                }
                Some(PanelBody::Text(text)) => {
                    ui.label(egui::RichText::new(text).size(14.0).color(TEXT_COLOR));
                }
                None => {}
            }
        });

    if let Some(tip) = presenter.help_tip() {
        egui::Window::new("help_tip")
            .title_bar(false)
            .resizable(false)
            .fixed_pos(egui::pos2(screen.center().x - 140.0, screen.max.y - 48.0))
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(tip).size(13.0).color(TIP_COLOR));
            });
    }
}
