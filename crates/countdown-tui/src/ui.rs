use crate::app::{App, AppMode, FormFocus};
use crate::components::*;
use crate::theme::*;
use countdown_domain::PageView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const NORMAL_HELP: &str = "a: add | d: delete | j/k: move | q: quit";
const FORM_HELP: &str = "TAB: switch field | ENTER: add | ESC: close";
const DATE_HINT: &str = "Dates: 2099-01-01 or 2099-01-01T18:30 (local time)";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_countdowns_panel(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    match app.mode {
        AppMode::AddCountdown => render_add_countdown_popup(app, frame),
        AppMode::ConfirmDelete { .. } => {
            if let Some(question) = app.delete_prompt() {
                render_confirm_popup(frame, "Delete Countdown", &question);
            }
        }
        AppMode::Normal => {}
    }

    if let Some(message) = &app.alert {
        render_alert_popup(frame, message);
    }
}

fn render_countdowns_panel(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!("Countdowns ({})", app.entries().len()))
        .borders(Borders::ALL)
        .border_style(focused_border());

    if let Some(message) = app.view.message() {
        let mut lines = vec![Line::from("")];
        let style = match app.view {
            PageView::Error { .. } => error_text(),
            _ => label_text(),
        };
        lines.push(Line::from(Span::styled(message, style)));
        if let PageView::Error { detail } = &app.view {
            lines.push(Line::from(Span::styled(detail.as_str(), label_text())));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let title_width = app
        .view
        .items()
        .iter()
        .map(|item| item.title.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = app
        .view
        .items()
        .iter()
        .map(|item| {
            let padding = title_width.saturating_sub(item.title.chars().count()) + 2;
            ListItem::new(Line::from(vec![
                Span::styled(item.title.clone(), title_text()),
                Span::raw(" ".repeat(padding)),
                Span::styled(item.label.to_string(), countdown_label_style(&item.label)),
                Span::styled(format!("  ({})", item.target_date), label_text()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_item())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(app.selection.get());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.mode {
        AppMode::AddCountdown => FORM_HELP,
        _ => NORMAL_HELP,
    };

    let help = Paragraph::new(help_text)
        .style(label_text())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_add_countdown_popup(app: &App, frame: &mut Frame) {
    let fields = [
        FormField {
            label: "Title:",
            input: &app.title_input,
            focused: app.form_focus == FormFocus::Title,
        },
        FormField {
            label: "Target date:",
            input: &app.date_input,
            focused: app.form_focus == FormFocus::Date,
        },
    ];

    let hint = format!("{}  |  {}", DATE_HINT, FORM_HELP);
    render_form_popup(frame, "Add Countdown", &fields, &hint);
}
