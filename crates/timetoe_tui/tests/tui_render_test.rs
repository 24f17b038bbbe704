//! Rendering and input tests against ratatui's test backend.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use timetoe::{Action, Player, SortOrder, Square};
use timetoe_tui::{App, HitMap, Palette, TuiConfig, run_replay, ui};

fn render_buffer(app: &App) -> (Buffer, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut hits = HitMap::default();
    terminal
        .draw(|f| hits = ui::draw(f, app, &Palette::default()))
        .unwrap();
    (terminal.backend().buffer().clone(), hits)
}

fn render(app: &App) -> (String, HitMap) {
    let (buffer, hits) = render_buffer(app);
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    (screen, hits)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn target_of(hits: &HitMap, action: Action) -> (u16, u16) {
    let (area, _) = hits
        .targets()
        .iter()
        .find(|(_, a)| *a == action)
        .expect("target drawn");
    (area.x, area.y)
}

#[test]
fn test_initial_screen_shows_status_and_history() {
    let (screen, hits) = render(&App::new());
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("History (ascending)"));
    assert!(screen.contains("sort (ascending)"));
    let cells = hits
        .targets()
        .iter()
        .filter(|(_, a)| matches!(a, Action::Click(_)))
        .count();
    assert_eq!(cells, 9);
}

#[test]
fn test_mouse_click_on_cell_places_mark() {
    let mut app = App::new();
    let (_, hits) = render(&app);
    let (x, y) = target_of(&hits, Action::Click(2));
    assert_eq!(app.handle_mouse(left_click(x, y), &hits), Some(Action::Click(2)));
    assert_eq!(app.game().board().get(2), Some(Square::Occupied(Player::X)));
    assert_eq!(app.cursor(), 2);

    let (screen, _) = render(&app);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Go to move # 1 (3, 1)"));
}

#[test]
fn test_mouse_click_on_history_and_sort() {
    let mut app = App::new();
    app.dispatch(Action::Click(0));
    app.dispatch(Action::Click(4));
    let (_, hits) = render(&app);

    let (x, y) = target_of(&hits, Action::JumpTo(1));
    app.handle_mouse(left_click(x, y), &hits);
    assert_eq!(app.game().step(), 1);

    let (x, y) = target_of(&hits, Action::ReverseHistory);
    app.handle_mouse(left_click(x, y), &hits);
    assert_eq!(app.game().sort_order(), SortOrder::Descending);

    let (screen, _) = render(&app);
    assert!(screen.contains("History (descending)"));
    let newest = screen.find("Go to move # 2").expect("move 2 listed");
    let start = screen.find("Go to game start").expect("start listed");
    assert!(newest < start);
}

#[test]
fn test_right_click_is_ignored() {
    let mut app = App::new();
    let (_, hits) = render(&app);
    let (x, y) = target_of(&hits, Action::Click(0));
    let mut event = left_click(x, y);
    event.kind = MouseEventKind::Down(MouseButton::Right);
    assert_eq!(app.handle_mouse(event, &hits), None);
    assert_eq!(app.game().history().len(), 1);
}

#[test]
fn test_winner_is_announced() {
    let mut app = App::new();
    for i in [0, 1, 4, 2, 8] {
        app.dispatch(Action::Click(i));
    }
    let (screen, _) = render(&app);
    assert!(screen.contains("Winner: X"));
}

#[test]
fn test_winning_cells_keep_highlight_under_cursor() {
    let mut app = App::new();
    for c in ['1', '2', '5', '3', '9'] {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    assert_eq!(app.cursor(), 8);

    let (buffer, hits) = render_buffer(&app);
    for index in [0, 4, 8] {
        let (area, _) = hits
            .targets()
            .iter()
            .find(|(_, a)| *a == Action::Click(index))
            .expect("cell drawn");
        let cell = &buffer[(area.x + area.width / 2, area.y + area.height / 2)];
        assert_eq!(cell.bg, Color::Green, "cell {index}");
    }
}

#[test]
fn test_replay_text_output() {
    let actions: Vec<Action> = ["0", "1", "4", "2", "8"]
        .iter()
        .map(|t| t.parse().unwrap())
        .collect();
    let out = run_replay(&actions, false).unwrap();
    assert!(out.starts_with("[X] O  O \n"));
    assert!(out.contains("Winner: X"));
    assert!(out.contains("> 6. Go to move # 5 (3, 3)"));
}

#[test]
fn test_replay_json_output() {
    let out = run_replay(&[Action::Click(4), Action::ReverseHistory], true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["order"], "Descending");
    assert_eq!(json["moves"][0]["label"], "Go to move # 1 (2, 2)");
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timetoe.toml");
    std::fs::write(&path, "log_file = \"game.log\"\n[palette]\ncursor = \"yellow\"\n").unwrap();
    let config = TuiConfig::load_or_default(&path).unwrap();
    assert_eq!(config.log_file(), &std::path::PathBuf::from("game.log"));

    let missing = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(missing, TuiConfig::default());
}
