use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

/// Render the manual article paste screen into the given area.
pub fn render_in(f: &mut Frame, app: &App, area: Rect, footer_area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(3),    // paste buffer
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(" SENTISCOPE ", theme.header_style()),
        Span::styled(
            " Paste an article to analyze",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    // Block cursor appended at the end of the buffer; input is append-only.
    let mut text = app.article_buffer.clone();
    text.push('\u{2588}');

    let char_count = app.article_buffer.chars().count();
    let body = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(format!(" Article text ({char_count} chars) ")),
        );
    f.render_widget(body, chunks[1]);

    let footer = Line::from(Span::styled(
        " type or paste text  Enter:newline  Ctrl+S:analyze  Esc:back  Ctrl+C:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), footer_area);
}
