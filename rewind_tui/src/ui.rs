//! Stateless UI rendering: board, move list, status line.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameSession, MoveOrder, Player, Position, Square};

use crate::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(13),   // Board + move list
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(34)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app);
    draw_move_list(frame, panes[1], app.session());

    let status = Paragraph::new(app.session().status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "arrows+enter/1-9 play | [ ] step history | g/G start/end | o order | r restart | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 13);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, 6);

    let caption = Paragraph::new(format!("Cursor: {}", app.cursor()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(caption, rows[6]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_square(frame, cols[0], app, start);
    draw_separator_vertical(frame, cols[1]);
    draw_square(frame, cols[2], app, start + 1);
    draw_separator_vertical(frame, cols[3]);
    draw_square(frame, cols[4], app, start + 2);
}

fn draw_square(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let Some(pos) = Position::from_index(index) else {
        return;
    };
    let session = app.session();
    let won = session.winning_line().is_some();
    let in_winning_line = session
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let (symbol, base_style) = match session.board().get(pos) {
        // Empty squares go dark once the game is decided.
        Square::Empty if won => ("   ", Style::default().fg(Color::Black)),
        Square::Empty => (" . ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if in_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, session: &GameSession) {
    let heading = match session.order() {
        MoveOrder::Ascending => "Moves (oldest first)",
        MoveOrder::Descending => "Moves (newest first)",
    };

    // At game start there is nothing worth listing.
    let lines: Vec<Line> = if session.history().len() == 1 {
        vec![Line::from(Span::styled(
            "(no moves yet)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        session
            .move_descriptions()
            .into_iter()
            .map(|desc| {
                let marker = if desc.current { "> " } else { "  " };
                let style = if desc.current {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let mut spans = vec![Span::styled(format!("{marker}{}", desc.label), style)];
                if let Some(detail) = desc.detail {
                    spans.push(Span::styled(
                        format!("  {detail}"),
                        style.fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(heading));
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
