//! Input handling for the Agriview TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use agriview_engine::{App, HistoryPeriod, NavigationIntent, ScreenKind};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads crossterm events on a blocking task and hands them to the
/// frame loop over a bounded channel.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping
                    // events so rapid key sequences are not lost.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input and apply it to the app. Returns `Ok(true)` when
/// the app should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev) {
            return Ok(true);
        }
        processed += 1;
    }
    if processed == MAX_EVENTS_PER_FRAME {
        tracing::debug!(backlog = input.rx.len(), "input budget exhausted this frame");
    }
    Ok(app.should_quit())
}

pub(crate) fn apply_event(app: &mut App, event: &Event) -> bool {
    if let Event::Key(key) = event {
        if matches!(key.kind, KeyEventKind::Release) {
            return app.should_quit();
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.quit();
            return true;
        }

        if app.menu_open() {
            handle_menu_key(app, *key);
        } else if !handle_screen_key(app, *key) {
            handle_global_key(app, *key);
        }
    }
    app.should_quit()
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.menu_mut().move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_mut().move_down(),
        KeyCode::Enter => app.menu_activate(),
        KeyCode::Esc | KeyCode::Char('m' | 'q') => app.dispatch(NavigationIntent::CloseMenu),
        _ => {}
    }
}

/// Screen-local bindings; returns true when the key was consumed so the
/// global bindings (digits in particular) do not also fire.
fn handle_screen_key(app: &mut App, key: KeyEvent) -> bool {
    match app.screen() {
        ScreenKind::Dashboard => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.dashboard_mut().move_up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.dashboard_mut().move_down();
                true
            }
            KeyCode::Enter => {
                app.view_highlighted_parcel_map();
                true
            }
            KeyCode::Char('p') => {
                app.view_highlighted_parcel_detail();
                true
            }
            KeyCode::Char('a') => {
                app.dispatch(NavigationIntent::GoTo(ScreenKind::Alerts));
                true
            }
            _ => false,
        },
        ScreenKind::Map => match key.code {
            KeyCode::Enter | KeyCode::Char('p') => {
                let id = app.selected_parcel().clone();
                app.navigate_to_parcel_detail(id);
                true
            }
            _ => false,
        },
        ScreenKind::Alerts => match key.code {
            KeyCode::Tab | KeyCode::Right => {
                app.alerts_tab_next();
                true
            }
            KeyCode::BackTab | KeyCode::Left => {
                app.alerts_tab_prev();
                true
            }
            _ => false,
        },
        ScreenKind::ParcelDetail => match key.code {
            KeyCode::Char('x') => {
                app.parcel_detail_mut().dismiss_recommendation();
                true
            }
            _ => false,
        },
        ScreenKind::History => match key.code {
            KeyCode::Tab => {
                app.history_period_next();
                true
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = c.to_digit(10).unwrap_or(0) as usize;
                if let Some(period) = index.checked_sub(1).and_then(HistoryPeriod::from_index) {
                    app.set_history_period(period);
                }
                true
            }
            _ => false,
        },
        ScreenKind::Settings => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.settings_mut().move_up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.settings_mut().move_down();
                true
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                app.settings_mut().toggle_selected();
                true
            }
            _ => false,
        },
        ScreenKind::Profile | ScreenKind::Help | ScreenKind::Weather => false,
    }
}

fn handle_global_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('m') => app.dispatch(NavigationIntent::OpenMenu),
        KeyCode::Char('?') => app.navigate_to(ScreenKind::Help),
        KeyCode::Esc => {
            if app.screen() != ScreenKind::Dashboard {
                app.navigate_to(ScreenKind::Dashboard);
            }
        }
        KeyCode::Char('1') => app.navigate_to(ScreenKind::Dashboard),
        KeyCode::Char('2') => app.navigate_to(ScreenKind::Map),
        KeyCode::Char('3') => app.navigate_to(ScreenKind::Alerts),
        KeyCode::Char('4') => app.navigate_to(ScreenKind::Weather),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use agriview_engine::{App, ScreenKind};

    use super::apply_event;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn q_requests_quit() {
        let mut app = App::new();
        assert!(apply_event(&mut app, &press(KeyCode::Char('q'))));
        assert!(app.should_quit());
    }

    #[test]
    fn digits_jump_between_screens() {
        let mut app = App::new();
        // 2 is consumed by the map screen only after we get there.
        apply_event(&mut app, &press(KeyCode::Char('2')));
        assert_eq!(app.screen(), ScreenKind::Map);
        apply_event(&mut app, &press(KeyCode::Char('4')));
        assert_eq!(app.screen(), ScreenKind::Weather);
        apply_event(&mut app, &press(KeyCode::Char('1')));
        assert_eq!(app.screen(), ScreenKind::Dashboard);
    }

    #[test]
    fn menu_flow_moves_and_activates() {
        let mut app = App::new();
        apply_event(&mut app, &press(KeyCode::Char('m')));
        assert!(app.menu_open());
        // Second entry in the menu is the field map.
        apply_event(&mut app, &press(KeyCode::Down));
        apply_event(&mut app, &press(KeyCode::Enter));
        assert_eq!(app.screen(), ScreenKind::Map);
        assert!(!app.menu_open());
    }

    #[test]
    fn esc_closes_menu_without_navigating() {
        let mut app = App::new();
        apply_event(&mut app, &press(KeyCode::Char('m')));
        apply_event(&mut app, &press(KeyCode::Esc));
        assert!(!app.menu_open());
        assert_eq!(app.screen(), ScreenKind::Dashboard);
    }

    #[test]
    fn dashboard_enter_opens_map_for_highlighted_parcel() {
        let mut app = App::new();
        apply_event(&mut app, &press(KeyCode::Down));
        apply_event(&mut app, &press(KeyCode::Enter));
        assert_eq!(app.screen(), ScreenKind::Map);
        assert_eq!(app.selected_parcel().as_str(), "B");
    }

    #[test]
    fn esc_returns_to_dashboard() {
        let mut app = App::new();
        apply_event(&mut app, &press(KeyCode::Char('4')));
        apply_event(&mut app, &press(KeyCode::Esc));
        assert_eq!(app.screen(), ScreenKind::Dashboard);
    }

    #[test]
    fn history_digits_select_the_period_not_a_screen() {
        use agriview_engine::HistoryPeriod;
        let mut app = App::new();
        app.navigate_to(ScreenKind::History);
        apply_event(&mut app, &press(KeyCode::Char('3')));
        assert_eq!(app.screen(), ScreenKind::History);
        assert_eq!(app.history_period(), HistoryPeriod::Month);
    }

    #[test]
    fn ctrl_c_exits_immediately() {
        let mut app = App::new();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(apply_event(&mut app, &ev));
    }
}
