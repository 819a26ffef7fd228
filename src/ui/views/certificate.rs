use crate::OsceApp;
use crate::ui::layout::{YELLOW_FILL, card, tinted_box};
use egui::{Button, RichText, Ui};

pub fn ui_certificate(app: &mut OsceApp, ui: &mut Ui) {
    let eligible = app.is_eligible();
    let status = if eligible { "✅ Unlocked" } else { "🔒 Locked" };

    card(
        ui,
        "certificate",
        "Certificate",
        Some(status),
        Some("Unlocks when you finish"),
        true,
        |ui| {
            if !eligible {
                tinted_box(ui, YELLOW_FILL, |ui| {
                    ui.label(RichText::new("Keep going").strong());
                    ui.label(
                        "Complete all sections and pass the 5-question check to unlock your certificate.",
                    );
                });
                return;
            }

            let doc = app.certificate_document();
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🏆").size(32.0));
                    ui.label(RichText::new(&doc.title).size(24.0).strong());
                    ui.add_space(6.0);
                    for line in &doc.lines {
                        ui.label(line.as_str());
                    }
                    ui.add_space(10.0);
                    if ui.add(Button::new("⬇ Download as PDF")).clicked() {
                        app.download_certificate();
                    }
                    if !app.message.is_empty() {
                        ui.add_space(6.0);
                        ui.label(app.message.as_str());
                    }
                });
            });
        },
    );
}
