//! Screen rendering.

use kiosk_survey::{QuestionKind, ScreenView, SurveyView, ThankYouView, WelcomeView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::Theme;

/// Smallest terminal the screens are laid out for.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 16;

/// Draw whatever `view` describes into the whole frame.
///
/// `title` goes on the outer border.
pub fn draw(frame: &mut Frame, view: &ScreenView<'_>, theme: &Theme, title: &str) {
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(
            Paragraph::new("Please enlarge the terminal")
                .style(Style::default().fg(theme.highlight))
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(theme.primary).bold());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    match view {
        ScreenView::Welcome(welcome) => draw_welcome(frame, inner, welcome, theme),
        ScreenView::Survey(survey) => {
            draw_survey(frame, inner, survey, theme);
            if survey.confirm_pending {
                draw_confirm_dialog(frame, inner, theme);
            }
        }
        ScreenView::ThankYou(thanks) => draw_thank_you(frame, inner, thanks, theme),
    }
}

fn draw_welcome(frame: &mut Frame, area: Rect, view: &WelcomeView<'_>, theme: &Theme) {
    let mut lines = vec![
        Line::from("♥".fg(theme.primary).bold()),
        Line::default(),
        Line::from("Welcome!".fg(theme.text).bold()),
        Line::default(),
    ];
    if let Some(prelude) = view.prelude {
        lines.push(Line::from(prelude.fg(theme.text)));
        lines.push(Line::default());
    }
    lines.push(Line::from(
        " Start Survey ".fg(theme.on_primary).bg(theme.primary).bold(),
    ));
    lines.push(Line::from("press Enter".fg(theme.border)));
    if let Some(estimate) = view.estimate {
        lines.push(Line::default());
        lines.push(Line::from(estimate.fg(theme.border).italic()));
    }

    let body = centered_rect(70, lines.len() as u16 + 4, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}

fn draw_survey(frame: &mut Frame, area: Rect, view: &SurveyView<'_>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(8),    // Question card
            Constraint::Length(3), // Navigation
        ])
        .split(area);

    // Header: survey title on the left, position on the right
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(chunks[0]);
    frame.render_widget(
        Paragraph::new(view.title).style(Style::default().fg(theme.text).bold()),
        header[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{}/{}", view.position, view.total))
            .style(Style::default().fg(theme.primary).bold())
            .alignment(Alignment::Right),
        header[1],
    );

    draw_progress(frame, chunks[1], view.progress, theme);

    // Question card
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(" Question ")
        .title_style(Style::default().fg(theme.highlight));
    let card_inner = card.inner(chunks[2]);
    frame.render_widget(card, chunks[2]);

    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Glyph
            Constraint::Length(3), // Prompt
            Constraint::Min(3),    // Input
        ])
        .split(card_inner);

    if let Some(glyph) = view.question.glyph() {
        frame.render_widget(
            Paragraph::new(glyph)
                .style(Style::default().fg(theme.primary))
                .alignment(Alignment::Center),
            card_chunks[0],
        );
    }
    frame.render_widget(
        Paragraph::new(view.question.prompt())
            .style(Style::default().fg(theme.text).bold())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        card_chunks[1],
    );

    match view.question.kind() {
        QuestionKind::Rating { scale } => {
            draw_rating(frame, card_chunks[2], *scale, view.selected_rating, theme)
        }
        QuestionKind::Text { placeholder } => draw_text_input(
            frame,
            card_chunks[2],
            view.text.unwrap_or_default(),
            placeholder.as_deref(),
            theme,
        ),
    }

    draw_navigation(frame, chunks[3], view, theme);
}

/// Thin single-line bar with the percentage underneath.
fn draw_progress(frame: &mut Frame, area: Rect, progress: f64, theme: &Theme) {
    let bar_width = area.width.saturating_sub(2);
    let filled_width = ((progress.clamp(0.0, 1.0) * bar_width as f64) as u16).min(bar_width);
    let bar_x = area.x + 1;

    let track = "─".repeat(bar_width as usize);
    frame.render_widget(
        Paragraph::new(track).style(Style::default().fg(theme.border)),
        Rect::new(bar_x, area.y, bar_width, 1),
    );

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        frame.render_widget(
            Paragraph::new(filled).style(Style::default().fg(theme.primary)),
            Rect::new(bar_x, area.y, filled_width, 1),
        );
    }

    if area.height > 1 {
        let percent = format!("{:.0}%", progress * 100.0);
        frame.render_widget(
            Paragraph::new(percent)
                .style(Style::default().fg(theme.secondary))
                .alignment(Alignment::Center),
            Rect::new(area.x, area.y + 1, area.width, 1),
        );
    }
}

fn draw_rating(frame: &mut Frame, area: Rect, scale: u8, selected: Option<u8>, theme: &Theme) {
    let mut spans = Vec::with_capacity(scale as usize * 2);
    for rating in 1..=scale {
        let label = format!(" {rating} ");
        let span = if selected == Some(rating) {
            Span::styled(
                label,
                Style::default()
                    .fg(theme.on_primary)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(theme.text).bg(theme.surface))
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    let hint = if scale >= 10 {
        "1-9, 0 for 10, or ←/→"
    } else {
        "number keys or ←/→"
    };
    let lines = vec![
        Line::default(),
        Line::from(spans),
        Line::default(),
        Line::from(hint.fg(theme.border)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    placeholder: Option<&str>,
    theme: &Theme,
) {
    let input_area = Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(1),
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Your answer ")
        .title_style(Style::default().fg(theme.secondary));
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if text.is_empty() {
        frame.render_widget(
            Paragraph::new(placeholder.unwrap_or_default().fg(theme.border).italic())
                .wrap(Wrap { trim: true }),
            inner,
        );
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let width = usize::from(inner.width);
    let height = usize::from(inner.height);
    let rows = wrap_input(text, width);
    let (cursor_row, cursor_col) = input_cursor(&rows, width);

    // Keep the cursor row visible once the text outgrows the box.
    let scroll = (cursor_row + 1).saturating_sub(height);
    let lines: Vec<Line> = rows
        .iter()
        .skip(scroll)
        .take(height)
        .map(|row| Line::from(row.as_str()))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme.text)),
        inner,
    );

    let x = u16::try_from(cursor_col).unwrap_or(u16::MAX);
    let y = u16::try_from(cursor_row - scroll).unwrap_or(u16::MAX);
    frame.set_cursor_position((
        inner.x.saturating_add(x.min(inner.width - 1)),
        inner.y.saturating_add(y.min(inner.height - 1)),
    ));
}

/// Break typed text into rows of at most `width` columns.
///
/// Breaks between characters, not words, so every typed character stays
/// where the cursor math expects it.
fn wrap_input(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if row_width > 0 && row_width + char_width > width {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(c);
        row_width += char_width;
    }
    rows.push(row);
    rows
}

/// Row and column just past the last character of `rows`.
fn input_cursor(rows: &[String], width: usize) -> (usize, usize) {
    let last = rows.len().saturating_sub(1);
    let used = rows.last().map_or(0, |row| row.width());
    if used >= width {
        (last + 1, 0)
    } else {
        (last, used)
    }
}

fn draw_navigation(frame: &mut Frame, area: Rect, view: &SurveyView<'_>, theme: &Theme) {
    let back_style = if view.can_go_back {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.border).add_modifier(Modifier::DIM)
    };
    let forward = if view.is_last { "Finish" } else { "Next" };

    let line = Line::from(vec![
        Span::styled("◀ Previous (Shift+Tab)", back_style),
        Span::raw("     "),
        Span::styled("Skip Question (Tab)", Style::default().fg(theme.secondary)),
        Span::raw("     "),
        Span::styled(
            format!("{forward} ▶ (Enter)"),
            Style::default().fg(theme.primary).bold(),
        ),
    ]);
    let help = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(help, area);
}

fn draw_confirm_dialog(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 9, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight))
        .title(" Submit Survey? ")
        .title_style(Style::default().fg(theme.highlight).bold());

    let lines = vec![
        Line::from(
            "Are you ready to submit your survey responses? You won't be able to make changes after submission."
                .fg(theme.text),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(" Go Back (Esc) ", Style::default().fg(theme.text).bg(theme.surface)),
            Span::raw("   "),
            Span::styled(
                " Submit (Enter) ",
                Style::default().fg(theme.on_primary).bg(theme.primary).bold(),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

fn draw_thank_you(frame: &mut Frame, area: Rect, view: &ThankYouView<'_>, theme: &Theme) {
    let mut lines = vec![
        Line::from("♥".fg(theme.success).bold()),
        Line::default(),
        Line::from("Thank You!".fg(theme.success).bold()),
        Line::default(),
    ];
    if let Some(epilogue) = view.epilogue {
        lines.push(Line::from(epilogue.fg(theme.text)));
        lines.push(Line::default());
    }
    let unit = if view.seconds_remaining == 1 { "second" } else { "seconds" };
    lines.push(Line::from(
        format!(
            "Returning to welcome screen in {} {unit}...",
            view.seconds_remaining
        )
        .fg(theme.border),
    ));

    let body = centered_rect(70, lines.len() as u16 + 4, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

/// A rect `percent_x` wide and `height` tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
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
    use std::time::Duration;

    use kiosk_survey::{ManualClock, RecordingSink, SurveyController, catalog};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(view: &ScreenView<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
        terminal
            .draw(|frame| draw(frame, view, &Theme::default(), "Kiosk"))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn controller() -> (SurveyController<ManualClock, RecordingSink>, ManualClock) {
        let clock = ManualClock::default();
        let survey = SurveyController::new(
            catalog::customer_satisfaction(),
            clock.clone(),
            RecordingSink::new(),
        )
        .unwrap();
        (survey, clock)
    }

    #[test]
    fn welcome_screen() {
        let (survey, _) = controller();
        let screen = render(&survey.view());

        assert!(screen.contains("Kiosk"));
        assert!(screen.contains("Welcome!"));
        assert!(screen.contains("Start Survey"));
        assert!(screen.contains("This will only take 2-3 minutes"));
    }

    #[test]
    fn rating_question_shows_scale_and_position() {
        let (mut survey, _) = controller();
        survey.start();
        survey.rate(4).unwrap();
        let screen = render(&survey.view());

        assert!(screen.contains("Customer Survey"));
        assert!(screen.contains("1/5"));
        assert!(screen.contains("How satisfied are you with our products?"));
        assert!(screen.contains(" 1 "));
        assert!(screen.contains(" 5 "));
        assert!(!screen.contains(" 6 "));
        assert!(screen.contains("Next"));
    }

    #[test]
    fn text_question_shows_placeholder_then_text() {
        let (mut survey, _) = controller();
        survey.start();
        for _ in 0..4 {
            survey.next();
        }
        let screen = render(&survey.view());
        assert!(screen.contains("Please share your thoughts..."));
        assert!(screen.contains("Finish"));

        survey.set_text("more fruit");
        let screen = render(&survey.view());
        assert!(screen.contains("more fruit"));
        assert!(!screen.contains("Please share your thoughts..."));
    }

    #[test]
    fn confirm_overlay() {
        let (mut survey, _) = controller();
        survey.start();
        for _ in 0..5 {
            survey.next();
        }
        let screen = render(&survey.view());

        assert!(screen.contains("Submit Survey?"));
        assert!(screen.contains("Go Back"));
    }

    #[test]
    fn thank_you_countdown() {
        let (mut survey, clock) = controller();
        survey.start();
        for _ in 0..5 {
            survey.next();
        }
        survey.confirm_submit().unwrap();

        let screen = render(&survey.view());
        assert!(screen.contains("Thank You!"));
        assert!(screen.contains("Returning to welcome screen in 5 seconds..."));

        clock.advance(Duration::from_millis(4500));
        let screen = render(&survey.view());
        assert!(screen.contains("in 1 second..."));
    }

    #[test]
    fn tiny_terminal_asks_for_space() {
        let (mut survey, _) = controller();
        survey.start();
        let mut terminal = Terminal::new(TestBackend::new(12, 5)).unwrap();
        terminal
            .draw(|frame| draw(frame, &survey.view(), &Theme::default(), "K"))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("enlarge"));
    }

    #[test]
    fn input_wraps_by_column_not_word() {
        let rows = wrap_input("more fresh fruit", 8);
        assert_eq!(rows, ["more fre", "sh fruit"]);
        assert_eq!(input_cursor(&rows, 8), (2, 0));

        let rows = wrap_input("more fresh", 8);
        assert_eq!(input_cursor(&rows, 8), (1, 2));
    }

    #[test]
    fn input_counts_wide_glyphs() {
        let rows = wrap_input("ab日本", 5);
        assert_eq!(rows, ["ab日", "本"]);
        assert_eq!(input_cursor(&rows, 5), (1, 2));
    }

    #[test]
    fn empty_input_cursor_at_start() {
        let rows = wrap_input("", 10);
        assert_eq!(rows, [""]);
        assert_eq!(input_cursor(&rows, 10), (0, 0));
    }

    #[test]
    fn cursor_follows_wrapped_text() {
        let (mut survey, _) = controller();
        survey.start();
        for _ in 0..4 {
            survey.next();
        }
        survey.set_text("x".repeat(150));

        let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
        terminal
            .draw(|frame| draw(frame, &survey.view(), &Theme::default(), "Kiosk"))
            .unwrap();

        let area = terminal.backend().buffer().area;
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < area.width && cursor.y < area.height);
        let cell = terminal.backend().buffer()[(cursor.x - 1, cursor.y)].symbol().to_string();
        assert_eq!(cell, "x");
        let row_start = terminal.backend().buffer()[(cursor.x - 1, cursor.y - 1)]
            .symbol()
            .to_string();
        assert_eq!(row_start, "x");
    }

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 10, area);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.width, 60);
        assert!(rect.y >= 10);
    }
}
