use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site instead of an
/// anonymous `(u16, u16)` tuple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Fixed tick interval in milliseconds (10 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Lower clamp for the `--tick-ms` override.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Points granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Growth owed to a freshly spawned snake: length 1 grows to 4 over the
/// first three ticks.
pub const INITIAL_PENDING_GROWTH: u32 = 3;

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark, matching the original arcade palette.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// Builtin themes with their selection ids, in catalog order.
pub const BUILTIN_THEMES: &[(&str, Theme)] = &[
    ("classic", THEME_CLASSIC),
    ("ocean", THEME_OCEAN),
    ("neon", THEME_NEON),
];

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Snake head glyphs, one per travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Glyph for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph for the tail segment.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";
