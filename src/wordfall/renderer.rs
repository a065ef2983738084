/// Wordfall drawing - reads the session, never mutates it
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use super::session::Session;
use super::word::FallingWord;

/// Screen regions, shared with the game so spawns and drawing agree on
/// where the playfield is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub hud: Rect,
    pub playfield: Rect,
    pub input: Rect,
}

pub fn layout(area: Rect) -> Areas {
    let inner = Block::bordered().inner(area);
    let [hud, playfield, input] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);
    Areas {
        hud,
        playfield,
        input,
    }
}

pub fn render(frame: &mut Frame, session: &Session) {
    let area = frame.area();
    let areas = layout(area);

    frame.render_widget(
        Block::bordered()
            .title(" WORDFALL ")
            .title_alignment(Alignment::Center),
        area,
    );

    render_hud(frame, areas.hud, session);
    for word in session.words() {
        render_word(frame, areas.playfield, word, session.typed());
    }

    let prompt = format!("> {}", session.typed());
    let prompt_width = Line::from(prompt.as_str()).width() as u16;
    frame.render_widget(Paragraph::new(prompt), areas.input);

    if session.is_running() {
        let x = areas.input.x + prompt_width.min(areas.input.width.saturating_sub(1));
        frame.set_cursor_position((x, areas.input.y));
    } else {
        render_summary(frame, area, session);
    }
}

const LIVES_PREFIX: &str = "Lives: ";

fn render_hud(frame: &mut Frame, area: Rect, session: &Session) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let score = Paragraph::new(format!("Score: {}", session.score()));
    let lives = Paragraph::new(Line::from(vec![
        Span::raw(LIVES_PREFIX),
        Span::styled(
            lives_label(session.lives(), right.width),
            Style::default().fg(Color::Red),
        ),
    ]))
    .alignment(Alignment::Right);

    frame.render_widget(score, left);
    frame.render_widget(lives, right);
}

/// One heart per life while they fit in `width`, a count otherwise.
fn lives_label(lives: u32, width: u16) -> String {
    let fits = (lives as usize).saturating_add(LIVES_PREFIX.len()) <= width as usize;
    if fits {
        "♥".repeat(lives as usize)
    } else {
        format!("♥×{lives}")
    }
}

fn render_word(frame: &mut Frame, playfield: Rect, word: &FallingWord, typed: &str) {
    // Still above the top edge.
    if word.y < 0.0 {
        return;
    }
    let row = word.y.floor() as u16;
    let col = word.x.round() as u16;
    if row >= playfield.height || col >= playfield.width {
        return;
    }

    let line = if !typed.is_empty() && word.text.starts_with(typed) {
        Line::from(vec![
            Span::styled(
                typed.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(word.text[typed.len()..].to_string()),
        ])
    } else {
        Line::from(word.text.as_str())
    };

    let width = (word.width as u16).min(playfield.width - col);
    let rect = Rect::new(playfield.x + col, playfield.y + row, width, 1);
    frame.render_widget(Paragraph::new(line), rect);
}

fn render_summary(frame: &mut Frame, area: Rect, session: &Session) {
    let popup = centered(area, 44, 5);
    let text = vec![
        Line::from(session.summary()),
        Line::from(""),
        Line::from("Enter to play again, Esc to quit").style(Style::default().fg(Color::Gray)),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" GAME OVER ")),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
