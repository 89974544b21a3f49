use crate::canvas::content::{
    self, Section, CANVAS_LABEL, CONCEPT_STATS, FOOTER_NOTE, PRODUCT_NAME, TAGLINE, TECH_TAGS,
    VERSION_LINE,
};
use crate::canvas::layout;
use crate::ui::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Rule line drawn between a section's items and its annotations.
const ANNOTATION_RULE: &str = "────────────────────────";

pub fn render(frame: &mut Frame, app: &App) {
    let (header_area, canvas_area, footer_area) = layout::screen_chunks(frame.area());

    render_header(frame, app, header_area);
    render_canvas(frame, app, canvas_area);
    render_footer(frame, app, footer_area);

    if app.show_info {
        render_info_modal(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let title_line = Line::from(vec![
        Span::styled(
            format!(" {PRODUCT_NAME} "),
            Style::default()
                .fg(theme.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            CANVAS_LABEL.to_uppercase(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(VERSION_LINE, Style::default().fg(theme.fg_dim)),
    ]);

    let tagline_line = Line::from(Span::styled(
        format!(" {TAGLINE}"),
        Style::default().fg(theme.fg_dim),
    ));

    let mut tag_spans = vec![Span::raw(" ")];
    for tag in TECH_TAGS {
        tag_spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(theme.accent),
        ));
        tag_spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(vec![title_line, tagline_line, Line::from(tag_spans)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_canvas(frame: &mut Frame, app: &App, area: Rect) {
    for (id, rect) in layout::grid_rects(area) {
        render_cell(frame, app, content::section(id), rect);
    }
}

fn render_cell(frame: &mut Frame, app: &App, section: &Section, area: Rect) {
    let theme = &app.theme;
    let expanded = app.is_expanded(section.id);
    let focused = app.cursor == section.id;

    let border_style = if expanded {
        Style::default()
            .fg(section.color)
            .add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.fg_dim)
    };

    let title_style = if expanded || focused {
        Style::default()
            .fg(section.color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(section.color)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", section.title.to_uppercase()),
            title_style,
        ));
    if expanded {
        block = block
            .border_type(BorderType::Thick)
            .style(Style::default().bg(theme.selection_bg));
    } else {
        block = block.style(Style::default().bg(theme.bg));
    }

    let paragraph = Paragraph::new(section_lines(section, expanded, theme))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Build the body lines for one section cell. Annotations are only shown
/// while the section is expanded.
fn section_lines(section: &Section, expanded: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for item in section.items {
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(section.color)),
            Span::styled(*item, Style::default().fg(theme.fg)),
        ]));
    }

    if expanded && !section.annotations.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            ANNOTATION_RULE,
            Style::default().fg(theme.fg_dim),
        )));
        for annotation in section.annotations {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", annotation.label),
                    Style::default()
                        .fg(section.color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    annotation.text,
                    Style::default()
                        .fg(theme.fg_dim)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
    }

    lines
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut stat_spans = vec![Span::styled(
        format!(" {FOOTER_NOTE}   "),
        Style::default().fg(theme.fg_dim),
    )];
    for (label, value) in CONCEPT_STATS {
        stat_spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(theme.fg_dim),
        ));
        stat_spans.push(Span::styled(
            format!("{value}  "),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let help_line = Line::from(Span::styled(
        " [↑↓←→/hjkl] Move  [Enter/Space] Expand/Collapse  [t] Theme  [i] Info  [q] Quit",
        Style::default().fg(theme.fg_dim),
    ));

    let footer = Paragraph::new(vec![Line::from(stat_spans), help_line]);
    frame.render_widget(footer, area);
}

fn render_info_modal(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(60, 60, frame.area());

    let text = vec![
        Line::from(Span::styled(
            format!("{PRODUCT_NAME} {CANVAS_LABEL}"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            VERSION_LINE,
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from("A Lean Canvas is a one-page business model: nine boxes"),
        Line::from("covering problem, solution, customers, and money."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Theme: ", Style::default().fg(theme.fg_dim)),
            Span::styled(theme.name, Style::default().fg(theme.secondary)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Keys",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from("  ↑↓←→ / hjkl   move between sections"),
        Line::from("  Enter / Space  expand or collapse a section"),
        Line::from("  mouse click    expand or collapse a section"),
        Line::from("  t              cycle color theme"),
        Line::from("  i / Esc        close this panel"),
        Line::from("  q              quit"),
    ];

    let modal = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// Centered rect taking `percent_x` / `percent_y` of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::content::SectionId;

    fn line_text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_section_lines_contain_items() {
        let section = content::section(SectionId::Channels);
        let lines = section_lines(section, false, Theme::default_theme());
        let text = line_text(&lines);
        for item in section.items {
            assert!(text.contains(item), "missing item: {item}");
        }
    }

    #[test]
    fn test_annotations_hidden_when_collapsed() {
        let section = content::section(SectionId::Problem);
        let lines = section_lines(section, false, Theme::default_theme());
        assert!(!line_text(&lines).contains("Alternatives:"));
    }

    #[test]
    fn test_annotations_shown_when_expanded() {
        let section = content::section(SectionId::Problem);
        let lines = section_lines(section, true, Theme::default_theme());
        let text = line_text(&lines);
        assert!(text.contains("Alternatives:"));
        assert!(text.contains("spreadsheet tracking"));
    }

    #[test]
    fn test_sections_without_annotations_gain_no_rule() {
        let section = content::section(SectionId::Solution);
        let collapsed = section_lines(section, false, Theme::default_theme());
        let expanded = section_lines(section, true, Theme::default_theme());
        assert_eq!(collapsed.len(), expanded.len());
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 60, area);
        assert!(rect.x > 0 && rect.y > 0);
        assert!(rect.right() < area.right() && rect.bottom() < area.bottom());
    }
}
