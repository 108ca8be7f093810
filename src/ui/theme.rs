use crate::visualizer::Role;
use ratatui::style::{Color, Modifier, Style};

/// Color palette shared by every pane
pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // selected tab, info boxes
    pub secondary: Color, // code being executed
    pub comment: Color,   // hints, padding, discarded cells
    pub success: Color,   // sorted/found cells, live blocks
    pub error: Color,     // invalid positions, dangling pointers
    pub warning: Color,   // cells under comparison
    pub accent: Color,    // freshly placed values
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    accent: Color::Rgb(245, 194, 231),
    string: Color::Rgb(166, 227, 161),         // green, like string literals in an editor
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),   // highlighted code line / selected block
    function: Color::Rgb(249, 226, 175),       // stack frame headers
    type_name: Color::Rgb(148, 226, 213),      // C types in the layout table
};

/// Visual variant of a highlighted box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Neutral,
    Muted,
    Info,
    Success,
    Warning,
    Danger,
    Accent,
}

impl Variant {
    /// Style of a box drawn with this variant
    pub fn style(self) -> Style {
        let (fg, bold) = match self {
            Variant::Neutral => (DEFAULT_THEME.fg, false),
            Variant::Muted => (DEFAULT_THEME.comment, false),
            Variant::Info => (DEFAULT_THEME.primary, true),
            Variant::Success => (DEFAULT_THEME.success, true),
            Variant::Warning => (DEFAULT_THEME.warning, true),
            Variant::Danger => (DEFAULT_THEME.error, true),
            Variant::Accent => (DEFAULT_THEME.accent, true),
        };
        let style = Style::default().fg(fg);
        if bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// How each array role is drawn
pub fn role_variant(role: Role) -> Variant {
    match role {
        Role::Unvisited => Variant::Neutral,
        Role::Comparing => Variant::Warning,
        Role::Swapping => Variant::Danger,
        Role::Sorted => Variant::Success,
        Role::Found => Variant::Success,
        Role::Discarded => Variant::Muted,
        Role::Shifting => Variant::Info,
        Role::Placed => Variant::Accent,
    }
}

/// Border style shared by every pane
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
