use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::InfoPopup;
use crate::theme::Theme;
use crate::view::spinner_char;

/// Render the sector info popup centered over the current screen.
///
/// At most one popup is live at a time; the caller replaces it wholesale
/// when the user asks for a different sector.
pub fn render(f: &mut Frame, popup: &InfoPopup, tick: usize, theme: &Theme) {
    let area = f.area();
    let rect = centered_rect(area.width.saturating_sub(10).min(70), 14, area);

    let mut lines = vec![Line::from("")];
    match &popup.info {
        None => {
            lines.push(Line::from(Span::styled(
                format!("  {} Loading sector info...", spinner_char(tick)),
                Style::default().fg(theme.spinner).add_modifier(Modifier::BOLD),
            )));
        }
        Some(info) => {
            lines.push(Line::from(Span::styled(
                format!("  {}", info.description),
                Style::default().fg(theme.text),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    "  Top tickers: ",
                    Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    info.tickers.join(", "),
                    Style::default().fg(theme.active),
                ),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc: close",
        Style::default().fg(theme.dim),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(format!(" {} ", popup.sector)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}

/// Create a centered rectangle of the given width (columns) and height (rows).
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
