//! Minimal markdown renderer for AI responses.
//!
//! The strategy API answers in light markdown (headings, bold lines,
//! bullets). This renders just that subset line by line; anything else is a
//! plain paragraph. Classification is separate from drawing so it can be
//! tested without a UI.

use egui::{RichText, Ui};

use crate::ui::theme::DarkTheme;

/// The role a single line plays in the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownLine<'a> {
    /// `## `-prefixed heading
    Heading(&'a str),
    /// `**`-wrapped emphasis line
    Strong(String),
    /// `- `-prefixed list item
    Bullet(&'a str),
    /// Everything else
    Paragraph(&'a str),
}

/// Classify one line of markdown.
pub fn classify_line(line: &str) -> MarkdownLine<'_> {
    if let Some(rest) = line.strip_prefix("##") {
        MarkdownLine::Heading(rest.trim_start_matches('#').trim())
    } else if line.starts_with("**") {
        MarkdownLine::Strong(line.replace("**", ""))
    } else if let Some(rest) = line.strip_prefix('-') {
        MarkdownLine::Bullet(rest.trim())
    } else {
        MarkdownLine::Paragraph(line)
    }
}

/// Render markdown-lite text into the UI.
pub fn markdown_lite(ui: &mut Ui, text: &str) {
    for line in text.lines() {
        match classify_line(line) {
            MarkdownLine::Heading(heading) => {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(heading)
                        .size(18.0)
                        .strong()
                        .color(DarkTheme::ACCENT),
                );
                ui.add_space(2.0);
            }
            MarkdownLine::Strong(strong) => {
                ui.add_space(4.0);
                ui.label(RichText::new(strong).strong());
            }
            MarkdownLine::Bullet(item) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    ui.label(item);
                });
            }
            MarkdownLine::Paragraph(paragraph) => {
                if paragraph.is_empty() {
                    ui.add_space(4.0);
                } else {
                    ui.label(paragraph);
                }
            }
        }
    }
}
