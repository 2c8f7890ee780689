//! Stateless UI rendering for tic-tac-toe.

use crate::announcement::AnnouncementKind;
use crate::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_core::{Board, Mark, Position, Square, WinLine};

const CONFETTI: &str = "*  .  o  *  +  .  *  o  .  +  *  .  o  *  +  .  *";
const HELP: &str =
    "arrows/1-9 play  [ ] history  Home/End  x/o rename  r reset  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title or confetti
            Constraint::Min(11),   // Board and side panel
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_title(frame, chunks[0], app.announcer().is_celebrating());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(chunks[1]);

    let win = app.game().status().win_line();
    draw_board(
        frame,
        body[0],
        app.game().current_board(),
        app.cursor(),
        win.as_ref(),
    );
    draw_side_panel(frame, body[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(announcement) = app.announcer().current() {
        let color = match announcement.kind() {
            AnnouncementKind::Victory => Color::Green,
            AnnouncementKind::Draw => Color::Magenta,
        };
        draw_popup(frame, area, announcement.message(), color);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, celebrating: bool) {
    let title = if celebrating {
        Paragraph::new(vec![
            Line::from(Span::styled(CONFETTI, Style::default().fg(Color::Magenta))),
            Line::from(Span::styled(
                "Tic Tac Toe",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(CONFETTI, Style::default().fg(Color::Yellow))),
        ])
    } else {
        Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };
    frame.render_widget(title.alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, win: Option<&WinLine>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [0, 2, 4].into_iter().enumerate() {
        draw_row(frame, rows[chunk], board, cursor, win, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    win: Option<&WinLine>,
    row: usize,
) {
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

    for (col, chunk) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[chunk], board, cursor, win, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    win: Option<&WinLine>,
    pos: Position,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if win.is_some_and(|line| line.contains(pos)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let players: Vec<Line> = Mark::iter()
        .map(|mark| match app.mode() {
            Mode::EditingName { mark: editing, buffer } if *editing == mark => Line::from(vec![
                Span::raw(format!("{}: ", mark)),
                Span::styled(
                    format!("{}_", buffer),
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                ),
            ]),
            _ => Line::from(format!("{}: {}", mark, app.player_name(mark))),
        })
        .collect();
    let players = Paragraph::new(players).block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(players, chunks[0]);

    let game = app.game();
    let items: Vec<ListItem> = (0..game.history().len())
        .map(|index| {
            let label = match (index, game.move_at(index)) {
                (0, _) => "Go to game start".to_string(),
                (_, Some(action)) => format!("Go to move #{} ({})", index, action),
                (_, None) => format!("Go to move #{}", index),
            };
            if index == game.current_move() {
                ListItem::new(format!("> {}", label))
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(format!("  {}", label))
            }
        })
        .collect();
    let history = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(history, chunks[1]);
}

fn draw_popup(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let popup_area = center_rect(area, 36, 5);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(vec![Line::default(), Line::from(message)])
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(popup, popup_area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, "15");

        let screen = render(&app);

        assert!(screen.contains("Next player: Player X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #2"));
    }

    #[test]
    fn test_renders_victory_popup() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, "15243");

        let screen = render(&app);

        assert!(screen.contains("Congratulations Player X!"));
        assert!(screen.contains("Winner: Player X"));
    }
}
