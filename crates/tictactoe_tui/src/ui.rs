//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, GameOutcome, Phase, Player, Position, SIZE};

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 5;

const TEAL: Color = Color::Rgb(0, 128, 128);

/// Renders the whole screen and returns where the board was drawn.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let area = frame.area();
    let chunks = screen_chunks(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = board_rect(area);
    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    board_area
}

/// Where [`draw`] puts the board inside a screen of the given size.
pub fn board_rect(area: Rect) -> Rect {
    center_rect(
        screen_chunks(area)[1],
        CELL_WIDTH * SIZE as u16,
        CELL_HEIGHT * SIZE as u16,
    )
}

/// Grid line color for an outcome: teal while playing, then the result.
pub fn grid_color(outcome: GameOutcome) -> Color {
    match outcome {
        GameOutcome::InProgress => TEAL,
        GameOutcome::PlayerOneWins => Color::Green,
        GameOutcome::PlayerTwoWins => Color::Red,
        GameOutcome::Draw => Color::Gray,
    }
}

/// Color of a player's mark.
pub fn mark_color(player: Player) -> Color {
    match player {
        Player::One => Color::Cyan,
        Player::Two => Color::Red,
    }
}

fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let grid = Style::default().fg(grid_color(session.outcome()));
    let show_cursor = session.phase() == Phase::InProgress;

    for position in Position::all() {
        let cell_area = Rect::new(
            area.x + position.col() as u16 * CELL_WIDTH,
            area.y + position.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);
        let highlighted = show_cursor && position == app.cursor();
        draw_cell(frame, cell_area, session.board().get(position), grid, highlighted);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, grid: Style, highlighted: bool) {
    let mut style = match cell.player() {
        Some(player) => Style::default()
            .fg(mark_color(player))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    if highlighted {
        style = style.bg(Color::DarkGray);
    }

    let symbol = match cell {
        Cell::Empty => "   ".to_string(),
        Cell::Occupied(player) => format!(" {} ", player.symbol()),
    };

    let inner_rows = area.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); usize::from(inner_rows / 2)];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(grid));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
