use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const TITLE_TEXT: Color = Color::White;
pub const REMAINING_TEXT: Color = Color::Green;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const COMPLETED_TEXT: Color = Color::Red;
pub const INVALID_TEXT: Color = Color::Magenta;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
