use crate::OsceApp;
use crate::model::CalloutTone;
use crate::view_models::SectionInfo;
use egui::collapsing_header::CollapsingState;
use egui::{
    Align, Button, Color32, Context, Frame, Layout, Margin, ProgressBar,
    RichText, TextEdit, Ui, Visuals,
};

pub const MAX_CONTENT_WIDTH: f32 = 860.0;

pub fn top_panel(app: &mut OsceApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(&app.course.title).size(30.0).strong());
        ui.label(RichText::new(&app.course.tagline).weak());
        ui.add_space(6.0);

        let snap = app.progress_snapshot();
        ui.horizontal(|ui| {
            let bar_width = (ui.available_width() * 0.5).max(160.0);
            ui.add(ProgressBar::new(snap.fraction()).desired_width(bar_width));
            ui.label(snap.label());
        });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.add(
                TextEdit::singleline(&mut app.learner_name)
                    .hint_text("Your full name for the certificate")
                    .desired_width(360.0),
            );
            ui.label(
                RichText::new("📖 Complete sections + pass quiz (≥80%) to unlock certificate.")
                    .small(),
            );
        });
        ui.add_space(8.0);
    });
}

pub fn bottom_panel(ctx: &Context, footer: &str) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(footer).small().weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Collapsible card with an optional status label right-aligned in the
/// header row. Returns whatever `body` returned, if it was open this frame.
pub fn card<R>(
    ui: &mut Ui,
    id_salt: &str,
    header: &str,
    status: Option<&str>,
    subtitle: Option<&str>,
    default_open: bool,
    body: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    let inner = Frame::group(ui.style())
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let id = ui.make_persistent_id(id_salt);
            let (_, _, body_response) =
                CollapsingState::load_with_default_open(ui.ctx(), id, default_open)
                    .show_header(ui, |ui| {
                        ui.label(RichText::new(header).size(20.0).strong());
                        if let Some(status) = status {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(status).strong());
                            });
                        }
                    })
                    .body(|ui| {
                        if let Some(sub) = subtitle {
                            ui.label(RichText::new(sub).italics().weak());
                            ui.add_space(6.0);
                        }
                        body(ui)
                    });
            body_response.map(|r| r.inner)
        });
    ui.add_space(10.0);
    inner.inner
}

/// Card for a tracked section, with its "mark complete" button.
/// Returns `true` when the button was clicked.
pub fn section_card(ui: &mut Ui, info: &SectionInfo, body: impl FnOnce(&mut Ui)) -> bool {
    card(
        ui,
        info.id.name(),
        &info.title,
        Some(info.status_label()),
        info.subtitle.as_deref(),
        info.default_open,
        |ui| {
            body(ui);
            ui.add_space(8.0);
            ui.add_enabled(!info.complete, Button::new(info.mark_button_label()))
                .clicked()
        },
    )
    .unwrap_or(false)
}

/// Tinted box with dark text, readable in both themes.
pub fn tinted_box(ui: &mut Ui, fill: Color32, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(fill)
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.visuals_mut().override_text_color = Some(Color32::from_rgb(30, 41, 59));
            inner(ui);
        });
}

pub const GREEN_FILL: Color32 = Color32::from_rgb(220, 245, 231);
pub const ROSE_FILL: Color32 = Color32::from_rgb(255, 228, 230);
pub const YELLOW_FILL: Color32 = Color32::from_rgb(254, 249, 195);

pub fn callout(ui: &mut Ui, tone: CalloutTone, text: &str) {
    let (icon, fill) = match tone {
        CalloutTone::Insight => ("💡", GREEN_FILL),
        CalloutTone::Pitfall => ("⚠", YELLOW_FILL),
    };
    tinted_box(ui, fill, |ui| {
        ui.label(format!("{icon} {text}"));
    });
}
