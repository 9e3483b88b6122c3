use crate::theme::{error_text, focused_border, highlight_text, label_text, popup_bg, unfocused_border};
use countdown_core::InputState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Clear a centered area and draw a titled frame; returns the inner area.
pub fn render_popup_with_block(
    frame: &mut Frame,
    title: &str,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// A labelled text field; the cursor is placed only in the focused one.
pub struct FormField<'a> {
    pub label: &'a str,
    pub input: &'a InputState,
    pub focused: bool,
}

pub fn render_form_popup(frame: &mut Frame, title: &str, fields: &[FormField], hint: &str) {
    let inner = render_popup_with_block(frame, title, 60, 50);

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(3)])
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let label_area = chunks[i * 2];
        let input_area = chunks[i * 2 + 1];

        let label_style = if field.focused {
            highlight_text()
        } else {
            label_text()
        };
        frame.render_widget(Paragraph::new(field.label).style(label_style), label_area);

        let border_style = if field.focused {
            focused_border()
        } else {
            unfocused_border()
        };
        let input = Paragraph::new(field.input.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, input_area);

        if field.focused {
            let column = u16::try_from(field.input.cursor_column()).unwrap_or(u16::MAX);
            let cursor_x = (input_area.x + 1)
                .saturating_add(column)
                .min(input_area.right().saturating_sub(2));
            let cursor_y = input_area.y + 1;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }

    let hint_area = chunks[chunks.len() - 1];
    frame.render_widget(Paragraph::new(hint).style(label_text()), hint_area);
}

pub fn render_confirm_popup(frame: &mut Frame, title: &str, question: &str) {
    let inner = render_popup_with_block(frame, title, 50, 25);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(question)
        .style(highlight_text())
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let confirm_text = Paragraph::new("Press ENTER/y to delete, n/ESC to cancel").style(label_text());
    frame.render_widget(confirm_text, chunks[1]);
}

/// Modal message that blocks all input until dismissed.
pub fn render_alert_popup(frame: &mut Frame, message: &str) {
    let inner = render_popup_with_block(frame, "Notice", 50, 25);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = Paragraph::new(message)
        .style(error_text())
        .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[0]);

    frame.render_widget(
        Paragraph::new("Press any key to continue").style(label_text()),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::{Backend, TestBackend};
    use ratatui::Terminal;

    fn cursor_after_form(text: &str) -> (Rect, u16) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut input = InputState::new();
        input.set(text);

        terminal
            .draw(|frame| {
                let fields = [FormField {
                    label: "Title:",
                    input: &input,
                    focused: true,
                }];
                render_form_popup(frame, "Add Countdown", &fields, "");
            })
            .unwrap();

        let popup = centered_rect(60, 50, Rect::new(0, 0, 100, 30));
        let position = terminal.backend_mut().get_cursor_position().unwrap();
        (popup, position.x)
    }

    #[test]
    fn test_cursor_follows_short_input() {
        let (popup, short) = cursor_after_form("Launch");
        let (_, empty) = cursor_after_form("");

        assert_eq!(short, empty + 6);
        assert!(short < popup.right());
    }

    #[test]
    fn test_cursor_stays_inside_field_for_long_input() {
        let (popup, x) = cursor_after_form(&"x".repeat(500));

        assert!(x > popup.x);
        assert!(x < popup.right() - 1);
    }
}
