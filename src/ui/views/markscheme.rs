use crate::OsceApp;
use crate::ui::helpers::numbered_list;
use crate::ui::layout::card;
use egui::{RichText, TextEdit, Ui};

const PLACEHOLDER: &str = "e.g.\nIntroduce self, confirm patient identity\nWash hands / PPE\nOpen question about presenting complaint\n...";

pub fn ui_markscheme(app: &mut OsceApp, ui: &mut Ui) {
    card(
        ui,
        "markscheme",
        "Mark scheme builder",
        None,
        Some("Turn pasted bullet points into a checklist you can rehearse against"),
        false,
        |ui| {
            ui.label(
                RichText::new(
                    "Paste bullet points from a mark scheme below (one per line). \
                     We'll convert them into a simple list you can rehearse against or print.",
                )
                .weak(),
            );
            ui.add_space(6.0);
            ui.add(
                TextEdit::multiline(&mut app.markscheme.raw)
                    .hint_text(PLACEHOLDER)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                if ui.button("📄 Build list").clicked() {
                    app.build_mark_scheme();
                }
                let count = app.markscheme.items().len();
                if count > 0 {
                    ui.label(RichText::new(format!("{count} items")).weak());
                }
            });

            if !app.markscheme.items().is_empty() {
                ui.add_space(8.0);
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    numbered_list(ui, app.markscheme.items());
                });
            }
        },
    );
}
