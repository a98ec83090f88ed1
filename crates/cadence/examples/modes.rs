//! Three-mode demo: a main list, a fuzzy-finder overlay, and a quit
//! confirmation prompt, each owning the keymap while active.
//!
//! Run with `cargo run -p cadence --example modes`. Press `/` for the
//! finder, `Esc` to leave it, `q` then `y` to quit.

use std::io;
use std::time::Duration;

use cadence::prelude::*;
use cadence::{CrosstermEvents, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Main,
    Finder,
    Confirm,
}

struct Demo {
    items: Vec<&'static str>,
    selected: usize,
    query: String,
}

impl Demo {
    fn matches(&self) -> Vec<&'static str> {
        self.items
            .iter()
            .filter(|item| item.contains(self.query.as_str()))
            .copied()
            .collect()
    }
}

impl Controllers for Demo {
    type Tag = Mode;

    fn handle(app: &mut AppState<Self>, tag: Mode, _elapsed: Duration, event: Option<Event>) {
        let Some(Event::Key(key)) = event else {
            return;
        };
        match tag {
            Mode::Main => match key.code {
                KeyCode::Char('/') => app.set_active(Mode::Finder),
                KeyCode::Char('q') => app.set_active(Mode::Confirm),
                KeyCode::Char('j') | KeyCode::Down => {
                    let last = app.controllers.items.len().saturating_sub(1);
                    app.controllers.selected = (app.controllers.selected + 1).min(last);
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    app.controllers.selected = app.controllers.selected.saturating_sub(1);
                }
                _ => {}
            },
            Mode::Finder => match key.code {
                KeyCode::Escape => {
                    app.controllers.query.clear();
                    app.set_active(Mode::Main);
                }
                KeyCode::Backspace => {
                    app.controllers.query.pop();
                }
                KeyCode::Char(c) => app.controllers.query.push(c),
                _ => {}
            },
            Mode::Confirm => match key.code {
                KeyCode::Char('y') => app.request_exit(),
                _ => app.set_active(Mode::Main),
            },
        }
    }

    fn view(app: &mut AppState<Self>, tag: Mode, frame: &mut Frame<'_>) {
        let rows = Layout::vertical()
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let demo = &app.controllers;
        frame.render_widget(Line("cadence modes demo"), rows[0]);

        match tag {
            Mode::Main => {
                for (i, item) in demo.items.iter().enumerate() {
                    let marker = if i == demo.selected { "> " } else { "  " };
                    let row = Rect::new(rows[1].x, rows[1].y + i as u16, rows[1].width, 1);
                    frame.render_widget(Line2(marker, item), row);
                }
                frame.render_widget(Line("j/k move  / find  q quit"), rows[2]);
            }
            Mode::Finder => {
                for (i, item) in demo.matches().iter().enumerate() {
                    let row = Rect::new(rows[1].x, rows[1].y + i as u16, rows[1].width, 1);
                    frame.render_widget(Line2("  ", item), row);
                }
                frame.render_widget(Line2("find: ", &demo.query), rows[2]);
            }
            Mode::Confirm => {
                frame.render_widget(Line("really quit? (y/n)"), rows[1]);
            }
        }
    }
}

struct Line(&'static str);

impl Widget for Line {
    fn render(self, area: Rect, surface: &mut dyn Surface) {
        surface.set_string(area.x, area.y, self.0);
    }
}

struct Line2<'a>(&'static str, &'a str);

impl Widget for Line2<'_> {
    fn render(self, area: Rect, surface: &mut dyn Surface) {
        surface.set_string(area.x, area.y, self.0);
        surface.set_string(area.x + self.0.len() as u16, area.y, self.1);
    }
}

fn main() -> io::Result<()> {
    let app = AppState::new(
        Demo {
            items: vec!["alpha", "bravo", "charlie", "delta", "echo"],
            selected: 0,
            query: String::new(),
        },
        Mode::Main,
    );

    let backend = TtyBackend::with_options(SessionOptions::full_screen());
    cadence::run(app, Duration::from_millis(250), backend, CrosstermEvents::new())
}
