use ratatui::style::Color;

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Panel borders
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;

    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const TEXT_ACCENT: Color = Color::Yellow;

    // Status
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_SUCCESS: Color = Color::Green;

    // Selection
    pub const SELECTION_FG: Color = Color::Yellow;
    pub const SELECTED_MARK: Color = Color::Green;

    // Table header background
    pub const TABLE_HEADER_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
}
