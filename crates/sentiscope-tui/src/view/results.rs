use std::collections::BTreeMap;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use serde_json::Value;

use sentiscope_core::{AnalysisDetail, ArticleResult, Pagination};

use crate::app::App;
use crate::model::report::ResultsState;
use crate::theme::Theme;
use crate::view::{fmt_value, spinner_char, truncate};

/// Trigger label for a detail region: "Less" when expanded, "Details"
/// when collapsed.
pub fn disclosure_label(expanded: bool) -> &'static str {
    if expanded {
        "[Less]"
    } else {
        "[Details]"
    }
}

/// Render the results screen into the given area.
///
/// Pure function of `(results, pagination, expanded, cursor)`: every call
/// rebuilds the full line list, so there is no per-render binding state to
/// go stale or duplicate.
pub fn render_in(f: &mut Frame, app: &App, area: Rect, footer_area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(3),    // report body
    ])
    .split(area);

    render_header(f, chunks[0], app, theme);

    let mut lines: Vec<Line> = Vec::new();
    match &app.results {
        ResultsState::Idle => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  No analysis yet. Choose a sector or paste an article.",
                Style::default().fg(theme.dim),
            )));
        }
        ResultsState::Busy(message) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {} {message}", spinner_char(app.tick)),
                Style::default().fg(theme.spinner).add_modifier(Modifier::BOLD),
            )));
        }
        ResultsState::Error(message) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )));
        }
        ResultsState::Sector { report, pagination } => {
            let visible = pagination.page_bounds(report.articles.len());
            for (page_pos, idx) in visible.clone().enumerate() {
                let selected = page_pos == app.card_cursor;
                push_article_card(
                    &mut lines,
                    idx,
                    &report.articles[idx],
                    app.expanded.contains(&idx),
                    selected,
                    theme,
                );
            }
            if visible.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "  No articles in this report.",
                    Style::default().fg(theme.dim),
                )));
            }
            push_pagination_line(&mut lines, pagination, report.articles.len(), theme);
        }
        ResultsState::Article(analysis) => {
            push_detail_block(
                &mut lines,
                &analysis.analysis,
                app.expanded.contains(&0),
                true,
                theme,
            );
        }
    }

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Results "),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0));
    f.render_widget(body, chunks[1]);

    render_footer(f, footer_area, app, theme);
}

fn render_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![Span::styled(" SENTISCOPE ", theme.header_style())];

    // Overall sentiment shows only while a report is live; busy and error
    // states hide it so stale sentiment never sits next to a failure.
    if let Some(label) = app.results.overall_sentiment() {
        spans.push(Span::styled(
            " Overall Sentiment: ",
            Style::default().fg(theme.dim),
        ));
        spans.push(Span::styled(
            label.to_string(),
            Style::default()
                .fg(theme.sentiment_color(label))
                .add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn push_article_card(
    lines: &mut Vec<Line<'static>>,
    idx: usize,
    article: &ArticleResult,
    expanded: bool,
    selected: bool,
    theme: &Theme,
) {
    lines.push(Line::from(""));

    let marker = if selected { "\u{25B8}" } else { " " };
    let title_style = if selected {
        theme.highlight_style()
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(theme.active)),
        Span::styled(format!("{}. {}", idx + 1, article.title), title_style),
    ]));

    let mut source = article.source.clone();
    if let Some(published) = &article.published_at {
        if !published.is_empty() {
            source.push_str(&format!("  ({published})"));
        }
    }
    labeled_line(lines, "Source", &source, theme);
    if !article.link.is_empty() {
        labeled_line(lines, "Link", &article.link, theme);
    }
    if let Some(image) = &article.image_url {
        if !image.is_empty() {
            labeled_line(lines, "Image", image, theme);
        }
    }
    if !article.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("     {}", article.description),
            Style::default().fg(theme.text),
        )));
    }

    push_sentiment_map(lines, "Average Sentiment", &article.average_sentiments, theme);

    // Disclosure trigger + guarded detail block
    lines.push(Line::from(Span::styled(
        format!("     {}", disclosure_label(expanded)),
        Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
    )));
    if expanded {
        push_model_sentiments(lines, &article.detailed_sentiments, theme);
        push_entities(lines, &article.entities, theme);
    }
}

/// The single-article layout: same blocks as a card, minus title/source.
fn push_detail_block(
    lines: &mut Vec<Line<'static>>,
    detail: &AnalysisDetail,
    expanded: bool,
    selected: bool,
    theme: &Theme,
) {
    lines.push(Line::from(""));
    let marker = if selected { "\u{25B8}" } else { " " };
    lines.push(Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(theme.active)),
        Span::styled(
            "Pasted article",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]));

    push_sentiment_map(lines, "Average Sentiment", &detail.average_sentiments, theme);

    lines.push(Line::from(Span::styled(
        format!("     {}", disclosure_label(expanded)),
        Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
    )));
    if expanded {
        push_model_sentiments(lines, &detail.detailed_sentiments, theme);
        push_entities(lines, &detail.entities, theme);
    }
}

fn push_sentiment_map(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    map: &BTreeMap<String, Value>,
    theme: &Theme,
) {
    if map.is_empty() {
        return;
    }
    lines.push(Line::from(Span::styled(
        format!("     {title}:"),
        Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
    )));
    for (key, value) in map {
        labeled_line(lines, key, &fmt_value(value), theme);
    }
}

/// Per-model sentiment results, rendered as a generic key/value dump
/// because the shape differs per model.
fn push_model_sentiments(
    lines: &mut Vec<Line<'static>>,
    detailed: &BTreeMap<String, Value>,
    theme: &Theme,
) {
    if detailed.is_empty() {
        return;
    }
    lines.push(Line::from(Span::styled(
        "     Model Sentiments:",
        Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
    )));
    for (model, value) in detailed {
        match value {
            Value::Object(fields) => {
                let summary = fields
                    .iter()
                    .map(|(k, v)| format!("{k}: {}", fmt_value(v)))
                    .collect::<Vec<_>>()
                    .join("  ");
                labeled_line(lines, model, &summary, theme);
            }
            other => labeled_line(lines, model, &fmt_value(other), theme),
        }
    }
}

/// Per-source entity lists, one line per entity record.
fn push_entities(lines: &mut Vec<Line<'static>>, entities: &BTreeMap<String, Value>, theme: &Theme) {
    if entities.is_empty() {
        return;
    }
    lines.push(Line::from(Span::styled(
        "     Entities:",
        Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
    )));
    for (source, value) in entities {
        lines.push(Line::from(Span::styled(
            format!("       {source}:"),
            Style::default().fg(theme.active),
        )));
        match value {
            Value::Array(records) => {
                for record in records {
                    lines.push(Line::from(Span::styled(
                        format!("         {}", truncate(&fmt_value(record), 120)),
                        Style::default().fg(theme.text),
                    )));
                }
            }
            other => {
                lines.push(Line::from(Span::styled(
                    format!("         {}", truncate(&fmt_value(other), 120)),
                    Style::default().fg(theme.text),
                )));
            }
        }
    }
}

fn push_pagination_line(
    lines: &mut Vec<Line<'static>>,
    pagination: &Pagination,
    count: usize,
    theme: &Theme,
) {
    let prev_enabled = !pagination.at_first();
    let next_enabled = !pagination.at_last(count);
    let current = pagination.current;
    let total = pagination.total_pages(count);
    let control = |label: &str, enabled: bool| {
        if enabled {
            Span::styled(
                label.to_string(),
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label.to_string(), Style::default().fg(theme.dim))
        }
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("   ", Style::default()),
        control("\u{2190} p:Prev", prev_enabled),
        Span::styled(
            format!("   Page {current} of {total}   "),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        control("n:Next \u{2192}", next_enabled),
    ]));
}

fn render_footer(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let hints = match app.results {
        ResultsState::Sector { .. } => {
            " j/k:card  Space:details  n/p:page  Esc:sectors  ?:help  q:quit"
        }
        ResultsState::Article(_) => " Space:details  Esc:sectors  ?:help  q:quit",
        _ => " Esc:sectors  ?:help  q:quit",
    };
    let footer = Line::from(Span::styled(hints, theme.footer_style()));
    f.render_widget(Paragraph::new(footer), area);
}

fn labeled_line(lines: &mut Vec<Line<'static>>, label: &str, value: &str, theme: &Theme) {
    lines.push(Line::from(vec![
        Span::styled(format!("     {label:<14}"), Style::default().fg(theme.dim)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ]));
}
