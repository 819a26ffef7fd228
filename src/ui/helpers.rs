// src/ui/helpers.rs
use crate::model::ContentBlock;
use crate::ui::layout::callout;
use egui::{RichText, Ui};

pub fn content_blocks(ui: &mut Ui, blocks: &[ContentBlock]) {
    for block in blocks {
        match block {
            ContentBlock::Paragraph { text } => {
                ui.label(text.as_str());
            }
            ContentBlock::Bullets { items } => {
                for item in items {
                    ui.label(format!("•  {item}"));
                }
            }
            ContentBlock::Link { label, url, note } => {
                ui.horizontal_wrapped(|ui| {
                    ui.hyperlink_to(label.as_str(), url);
                    if let Some(note) = note {
                        ui.label(format!("— {note}"));
                    }
                });
            }
            ContentBlock::Callout { tone, text } => callout(ui, *tone, text),
        }
        ui.add_space(8.0);
    }
}

/// `1. first`, `2. second`, …
pub fn numbered_list(ui: &mut Ui, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("{}.", i + 1)).strong());
            ui.label(item.as_str());
        });
    }
}
