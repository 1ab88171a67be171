use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::loader::ProfileSession;
use crate::profile::UserId;
use crate::ui::input::key_intent;
use crate::ui::render::draw;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};
use crate::ui::terminal_guard::setup_terminal;

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Run the profile card screen until the user quits.
pub async fn run(mut session: ProfileSession, initial: UserId) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let watcher = session.watcher();
    let mut state = ScreenState::new(initial);
    session.load(initial);

    loop {
        terminal.draw(|frame| draw(frame, &state))?;
        if state.quit {
            break;
        }

        if event::poll(INPUT_POLL)? {
            // Resizes need no handling; the next draw picks them up.
            if let Event::Key(key) = event::read()? {
                if let Some(intent) = key_intent(key) {
                    state = dispatch(&mut session, state, intent);
                }
            }
        }

        let snapshot = watcher.current();
        if snapshot != state.profile {
            state = ScreenReducer::reduce(state, ScreenIntent::Published(snapshot));
        }
    }

    session.cancel();
    drop(guard);
    Ok(())
}

/// Reduce one intent and fire the load it calls for, if any. A reload
/// request or a changed selection starts a fresh load; everything else
/// is pure state.
fn dispatch(
    session: &mut ProfileSession,
    state: ScreenState,
    intent: ScreenIntent,
) -> ScreenState {
    let previous = state.user_id;
    let reload = matches!(intent, ScreenIntent::Reload);
    let next = ScreenReducer::reduce(state, intent);
    if reload || next.user_id != previous {
        session.load(next.user_id);
    }
    next
}
