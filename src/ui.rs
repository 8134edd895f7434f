//! The UI renders the application state into something visible and clickable.
//!
//! The screen is a sticky navigation header, the scrolling document body, and a one-line help
//! bar. Header controls are derived fresh from the navigation controller on every draw.

use crate::app_state::AppState;
use crate::navigation::NavControl;
use crate::theme::{Palette, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HELP: &str =
    "↑/↓ PgUp/PgDn: Scroll | ←/→ Tab: Focus | Enter/1-6: Go | w: View My Work | t: Theme | q: Quit";

/// Splits the screen into header, body and help bar.
fn areas(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Document
            Constraint::Length(1), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

#[must_use]
/// Width and height left for the document on a screen of the given size.
pub fn body_size(area: Rect) -> (u16, u16) {
    let [_, body, _] = areas(area);
    (body.width, body.height)
}

/// Renders the whole screen and records where the navigation controls landed.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let palette = app.theme.palette();
    let [header, body, help] = areas(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );
    draw_header(f, app, header, &palette);
    draw_body(f, app, body, &palette);

    let help_text = app.message.as_deref().unwrap_or(HELP);
    f.render_widget(
        Paragraph::new(help_text).style(Style::default().fg(palette.muted)),
        help,
    );
}

fn control_style(control: &NavControl, palette: &Palette) -> Style {
    let style = if control.highlighted() {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    if control.focused {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn draw_header(f: &mut Frame, app: &mut AppState, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let name = format!(" {} ", app.content.profile.name);
    let theme_icon = match app.theme {
        Theme::Dark => " ☀ ",
        Theme::Light => " ☾ ",
    };

    let name = Span::styled(
        name,
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD),
    );
    // Spans are placed by display width, so wide glyphs take two columns.
    let mut x = inner
        .x
        .saturating_add(u16::try_from(name.width()).unwrap_or(u16::MAX));
    let mut spans = vec![name];

    app.nav_hitboxes.clear();
    for control in app.navigation.controls() {
        let label = Span::styled(
            format!(" {} ", control.label),
            control_style(&control, palette),
        );
        let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        app.nav_hitboxes
            .push((Rect::new(x, inner.y, width, 1), control.identifier.clone()));
        x = x.saturating_add(width);
        spans.push(label);
    }
    spans.push(Span::styled(theme_icon, Style::default().fg(palette.muted)));

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_body(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let lines = &app.layout.lines;
    let start = usize::try_from(app.viewport.offset())
        .unwrap_or(usize::MAX)
        .min(lines.len());
    let end = start
        .saturating_add(usize::from(area.height))
        .min(lines.len());
    let document = Paragraph::new(lines[start..end].to_vec())
        .style(Style::default().fg(palette.foreground));
    f.render_widget(document, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
