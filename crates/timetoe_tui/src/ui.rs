//! Stateless UI rendering.
//!
//! [`draw`] re-derives the whole frame from the app on every call and
//! returns a [`HitMap`] so mouse clicks can be routed back to the message of
//! whatever was drawn under the pointer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use timetoe::{Action, BoardView, CellView, GameView, MoveEntry, Player, Square, view};

use crate::app::{App, Focus};
use crate::config::Palette;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const INFO_WIDTH: u16 = 36;

/// Screen regions that dispatch an action when clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    targets: Vec<(Rect, Action)>,
}

impl HitMap {
    /// Registers `area` as dispatching `action`.
    pub fn push(&mut self, area: Rect, action: Action) {
        self.targets.push((area, action));
    }

    /// Action under the given terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        self.targets
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, action)| *action)
    }

    /// Every registered target.
    pub fn targets(&self) -> &[(Rect, Action)] {
        &self.targets
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) -> HitMap {
    let area = frame.area();
    let view = GameView::of(app.game());
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("timetoe - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(INFO_WIDTH)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(frame, body[0], &view.board, cursor, palette, &mut hits);
    draw_info(frame, body[1], app, &view, &mut hits);

    let help = Paragraph::new("arrows move | enter place | 1-9 place | tab history | s sort | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    hits
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &BoardView<Action>,
    cursor: Option<usize>,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let side = board.side as u16;
    let width = side * CELL_WIDTH + side.saturating_sub(1);
    let height = side * CELL_HEIGHT + side.saturating_sub(1);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(interleave(board.side, CELL_HEIGHT))
        .split(board_area);

    for (r, cells) in board.rows().enumerate() {
        if r > 0 {
            draw_separator(frame, rows[2 * r - 1]);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(interleave(board.side, CELL_WIDTH))
            .split(rows[2 * r]);
        for (c, cell) in cells.iter().enumerate() {
            if c > 0 {
                draw_separator_vertical(frame, cols[2 * c - 1]);
            }
            let cell_area = cols[2 * c];
            draw_cell(frame, cell_area, cell, cursor == Some(cell.index), palette);
            hits.push(cell_area, cell.on_click);
        }
    }
}

/// Constraints for `n` tracks of `size` separated by one-cell gaps.
fn interleave(n: usize, size: u16) -> Vec<Constraint> {
    (0..n)
        .flat_map(|i| {
            let gap = (i > 0).then_some(Constraint::Length(1));
            gap.into_iter().chain([Constraint::Length(size)])
        })
        .collect()
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView<Action>, under_cursor: bool, palette: &Palette) {
    let base = match cell.square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
    };
    // The winning fill wins over the cursor fill; the cursor is then underlined.
    let style = match (cell.winning, under_cursor) {
        (true, false) => base.bg(palette.winning).fg(Color::Black),
        (true, true) => base
            .bg(palette.winning)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (false, true) => base.bg(palette.cursor).fg(Color::Black),
        (false, false) => base,
    };

    let text = Text::from(vec![Line::from(""), Line::from(cell.label())]);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, view: &GameView, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(3),    // Moves
            Constraint::Length(1), // Sort
        ])
        .split(area);

    let status_style = if view.status.is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let history_focused = app.focus() == Focus::History;
    let border_style = if history_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("History ({})", view.order));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    for (row, entry) in view.moves.iter().enumerate().take(inner.height as usize) {
        let line_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let selected = history_focused && row == app.selected();
        frame.render_widget(Paragraph::new(move_line(row, entry, selected)), line_area);
        hits.push(line_area, entry.on_click);
    }

    let sort = Paragraph::new(format!("[ {} ]", view::sort_label(view.order)))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    frame.render_widget(sort, chunks[2]);
    hits.push(chunks[2], Action::ReverseHistory);
}

fn move_line(row: usize, entry: &MoveEntry, selected: bool) -> Line<'static> {
    let mut style = Style::default();
    if entry.current {
        style = style.add_modifier(Modifier::BOLD);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(vec![
        Span::raw(format!("{:>2}. ", row + 1)),
        Span::styled(entry.label.clone(), style),
    ])
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Rect of `width` x `height` centred in `area`, clipped to it.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [centred] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    centred
}
