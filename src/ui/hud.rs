use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the single-line HUD and returns the remaining play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(
            state.score,
            state.snake.len(),
            usize::from(score_area.width),
        ))
        .style(Style::default().fg(theme.hud_score)),
        score_area,
    );

    play_area
}

/// Builds the score line, falling back to compact labels when the full
/// labels would not fit the available width.
fn info_line(score: u32, length: usize, available_width: usize) -> Line<'static> {
    let full = format!("Score: {score}   Length: {length}");
    if full.as_str().width() <= available_width {
        return Line::from(full);
    }

    Line::from(format!("S:{score} L:{length}"))
}
