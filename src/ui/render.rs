use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::avatar::icon_lines;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::screen::ScreenState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HINT_TEXT, NAME_TEXT};

/// Cell grid the avatar is sampled down to.
pub const AVATAR_COLS: u16 = 20;
pub const AVATAR_ROWS: u16 = 10;

pub fn draw(frame: &mut Frame<'_>, state: &ScreenState) {
    let (body, footer) = layout_regions(frame.area());

    let name_width = state
        .profile
        .user()
        .map(|user| user.name.chars().count() as u16)
        .unwrap_or(0);
    let card_width = AVATAR_COLS.max(name_width).saturating_add(4);
    let card_height = AVATAR_ROWS.saturating_add(4);
    let card = centered_rect_by_size(body, card_width, card_height);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .title(Span::styled(
            format!(" user {} ", state.user_id),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    // Fields still loading stay blank so the card never flashes stale
    // or partial data.
    let mut lines = match state.profile.icon() {
        Some(icon) => icon_lines(icon, AVATAR_COLS, AVATAR_ROWS),
        None => vec![Line::from(""); AVATAR_ROWS as usize],
    };
    lines.push(Line::from(""));
    lines.push(match state.profile.user() {
        Some(user) => Line::from(Span::styled(
            user.name.clone(),
            Style::default().fg(NAME_TEXT).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    });
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    let hints = Line::from(Span::styled(
        "q quit │ r reload │ ←/→ switch user",
        Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM),
    ));
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), footer);
}
