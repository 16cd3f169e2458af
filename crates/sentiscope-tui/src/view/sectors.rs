use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use sentiscope_core::MANUAL_ENTRY;

use crate::app::App;
use crate::model::catalog::CatalogState;
use crate::view::spinner_char;

/// Render the sector catalog screen into the given area.
pub fn render_in(f: &mut Frame, app: &App, area: Rect, footer_area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(3),    // choices
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(" SENTISCOPE ", theme.header_style()),
        Span::styled(
            " Choose a sector to analyze",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let mut lines: Vec<Line> = vec![Line::from("")];

    match &app.catalog {
        CatalogState::Loading => {
            lines.push(Line::from(Span::styled(
                format!("  {} Loading sectors...", spinner_char(app.tick)),
                Style::default().fg(theme.spinner),
            )));
            lines.push(Line::from(""));
        }
        CatalogState::Failed(message) => {
            lines.push(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(theme.error),
            )));
            lines.push(Line::from(""));
        }
        CatalogState::Loaded(_) => {}
    }

    for (i, choice) in app.catalog.choices().iter().enumerate() {
        let selected = i == app.sector_cursor;
        let marker = if selected { "\u{25B8} " } else { "  " };
        let style = if selected {
            theme.highlight_style()
        } else if *choice == MANUAL_ENTRY {
            Style::default().fg(theme.active)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(Span::styled(
            format!(" {marker}{choice}"),
            style,
        )));
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Sectors "),
    );
    f.render_widget(list, chunks[1]);

    let footer = Line::from(Span::styled(
        " j/k:move  Enter:analyze  i:sector info  Esc:results  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), footer_area);
}
