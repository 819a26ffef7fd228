mod helpers;
pub mod layout;
pub mod views;

use crate::app::OsceApp;
use eframe::{App, Frame};
use egui::{CentralPanel, Context, ScrollArea};
use layout::{MAX_CONTENT_WIDTH, bottom_panel, top_panel};

impl App for OsceApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Header (progress + name) and footer (theme + credits) frame the page
        top_panel(self, ctx);
        bottom_panel(ctx, &self.footer_line());

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.set_max_width(MAX_CONTENT_WIDTH);
                    ui.add_space(8.0);
                    views::sections::ui_sections(self, ui);
                    views::markscheme::ui_markscheme(self, ui);
                    ui.add_space(16.0);
                    views::certificate::ui_certificate(self, ui);
                });
        });
    }
}
