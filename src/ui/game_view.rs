use crate::config::GameMode;
use crate::game::{Cell, Coord, GameState, MatchStatus, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    mode: GameMode,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, mode, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, mode: GameMode, area: Rect) {
    let (status, color) = match game_state.status() {
        MatchStatus::Won { player, .. } => (
            format!("{} wins!!  |  {}", player.name(), mode.label()),
            player_color(*player),
        ),
        MatchStatus::Drawn => (format!("Draw  |  {}", mode.label()), Color::Gray),
        MatchStatus::InProgress => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}  |  {}", player.name(), mode.label()),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Drop Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let winning_cells: &[Coord] = match game_state.status() {
        MatchStatus::Won { cells, .. } => cells,
        _ => &[],
    };

    let mut lines = Vec::new();

    // Preview marker row: the selected column is lit with the current
    // player's color while playable, dimmed when the column is full.
    let marker_color = if game_state.is_terminal() || board.is_column_full(selected_column) {
        Color::DarkGray
    } else {
        player_color(game_state.current_player())
    };
    let mut marker_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            marker_line.push(Span::styled(" ▼ ", Style::default().fg(marker_color)));
        } else {
            marker_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(marker_line));

    // Top border
    lines.push(Line::from("  ╔═════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let cell = board.get(row, col);
            let on_streak = winning_cells.contains(&Coord { row, col });
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One if on_streak => (" ● ", Color::Green),
                Cell::Two if on_streak => (" ● ", Color::Green),
                Cell::One => (" ● ", Color::Red),
                Cell::Two => (" ● ", Color::Blue),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚═════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
