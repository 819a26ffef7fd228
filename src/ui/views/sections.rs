use crate::OsceApp;
use crate::model::SectionId;
use crate::ui::helpers::content_blocks;
use crate::ui::layout::section_card;
use crate::ui::views::quiz::ui_quiz;
use egui::Ui;

pub fn ui_sections(app: &mut OsceApp, ui: &mut Ui) {
    for info in app.section_infos() {
        let blocks = app
            .section(info.id)
            .map(|s| s.blocks.clone())
            .unwrap_or_default();

        let mark = section_card(ui, &info, |ui| {
            if info.id == SectionId::Quiz {
                ui_quiz(app, ui);
            } else {
                content_blocks(ui, &blocks);
            }
        });

        if mark {
            app.mark_section_complete(info.id);
        }
    }
}
