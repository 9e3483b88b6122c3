use super::colors::*;
use countdown_domain::CountdownLabel;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item() -> Style {
    Style::default().bg(SELECTED_BG)
}

pub fn title_text() -> Style {
    Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)
}

/// Finished countdowns are red and bold.
pub fn countdown_label_style(label: &CountdownLabel) -> Style {
    match label {
        CountdownLabel::Pending => label_text(),
        CountdownLabel::Remaining(_) => Style::default().fg(REMAINING_TEXT),
        CountdownLabel::Completed => Style::default()
            .fg(COMPLETED_TEXT)
            .add_modifier(Modifier::BOLD),
        CountdownLabel::InvalidDate => Style::default().fg(INVALID_TEXT),
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
