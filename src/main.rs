mod config;
mod event;
mod progress;
mod timer;
mod ui;

use std::io;
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind, poll, read};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use config::Config;
use event::{Command, Event, command_for};
use timer::TimerState;
use ui::Screen;

const TICK: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(
    name = "pomobar",
    version,
    about = "Terminal countdown timer with a progress bar"
)]
struct Args {
    /// Session length, e.g. 25 (minutes), 25m, 90s or 1m30s
    #[arg(long, value_parser = config::parse_duration)]
    duration: Option<u64>,

    /// Run a break-length session instead of a task session
    #[arg(long = "break")]
    take_break: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(&config::config_path());
    let session_secs = args.duration.unwrap_or(if args.take_break {
        config.break_seconds
    } else {
        config.task_seconds
    });
    let mut timer = TimerState::new(session_secs);

    // Inside raw mode Ctrl+C arrives as a key event; this handler only
    // fires for an interrupt sent from outside the terminal.
    ctrlc::set_handler(|| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show);
        process::exit(130);
    })
    .context("failed to install interrupt handler")?;

    enable_raw_mode().context("failed to enable terminal raw mode")?;
    execute!(io::stdout(), cursor::Hide).context("failed to prepare terminal")?;

    let result = run(&mut timer);

    let _ = execute!(io::stdout(), cursor::Show);
    let _ = disable_raw_mode();
    result
}

/// What the host loop should do after dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Serialized event dispatch: commands and ticks are handed to the timer
/// one at a time, never interleaved. A tick that observes a completed
/// session ends the program, one second after the bar fills.
fn update(timer: &mut TimerState, event: Event) -> Flow {
    match event {
        Event::Key(key) => match command_for(&key) {
            Some(Command::Quit) => Flow::Quit,
            Some(Command::ToggleStartStop) => {
                timer.toggle_start_stop();
                Flow::Continue
            }
            None => Flow::Continue,
        },
        Event::Tick => {
            if timer.is_complete() {
                Flow::Quit
            } else {
                timer.on_tick();
                Flow::Continue
            }
        }
    }
}

fn run(timer: &mut TimerState) -> Result<()> {
    let mut stdout = io::stdout();
    let mut screen = Screen::new();
    let mut last_tick = Instant::now();
    screen.draw(&mut stdout, timer)?;

    loop {
        let timeout = if timer.is_running() {
            TICK.saturating_sub(last_tick.elapsed())
        } else {
            TICK
        };

        let mut dirty = false;

        if poll(timeout)? {
            if let CrosstermEvent::Key(key) = read()? {
                if key.kind == KeyEventKind::Press {
                    let was_running = timer.is_running();
                    if update(timer, Event::Key(key)) == Flow::Quit {
                        return Ok(());
                    }
                    // A fresh session counts its first second from now.
                    if !was_running && timer.is_running() {
                        last_tick = Instant::now();
                    }
                    dirty = true;
                }
            }
        }

        if timer.is_running() && last_tick.elapsed() >= TICK {
            if update(timer, Event::Tick) == Flow::Quit {
                return Ok(());
            }
            last_tick = Instant::now();
            dirty = true;
        }

        if dirty {
            screen.draw(&mut stdout, timer)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn dispatch(timer: &mut TimerState, events: &[Event]) -> Flow {
        let mut flow = Flow::Continue;
        for event in events {
            flow = update(timer, *event);
            if flow == Flow::Quit {
                break;
            }
        }
        flow
    }

    #[test]
    fn quit_key_ends_the_loop() {
        let mut timer = TimerState::new(5);
        assert_eq!(dispatch(&mut timer, &[press(KeyCode::Char('q'))]), Flow::Quit);
        assert_eq!(dispatch(&mut timer, &[press(KeyCode::Esc)]), Flow::Quit);
    }

    #[test]
    fn full_session_quits_on_the_tick_after_completion() {
        let mut timer = TimerState::new(5);
        let mut events = vec![press(KeyCode::Char('s'))];
        events.extend([Event::Tick; 5]);
        assert_eq!(dispatch(&mut timer, &events), Flow::Continue);
        assert!(timer.is_complete());
        assert_eq!(timer.current_fraction(), 1.0);

        // The sixth tick observes completion and ends the program.
        assert_eq!(update(&mut timer, Event::Tick), Flow::Quit);
        assert_eq!(timer.elapsed_secs(), 5);
    }

    #[test]
    fn stop_resets_progress_and_restart_is_fresh() {
        let mut timer = TimerState::new(5);
        let toggle = press(KeyCode::Char('s'));
        dispatch(&mut timer, &[toggle, Event::Tick, Event::Tick, toggle]);
        assert_eq!(timer.current_fraction(), 0.0);

        dispatch(&mut timer, &[toggle, Event::Tick]);
        assert_eq!(timer.elapsed_secs(), 1);
    }

    #[test]
    fn unbound_keys_leave_state_untouched() {
        let mut timer = TimerState::new(5);
        dispatch(&mut timer, &[press(KeyCode::Char('s')), Event::Tick]);
        let before = timer.current_fraction();
        assert_eq!(dispatch(&mut timer, &[press(KeyCode::Char('x'))]), Flow::Continue);
        assert!(timer.is_running());
        assert_eq!(timer.current_fraction(), before);
    }

    #[test]
    fn ticks_while_stopped_do_not_accumulate() {
        let mut timer = TimerState::new(5);
        assert_eq!(dispatch(&mut timer, &[Event::Tick, Event::Tick]), Flow::Continue);
        assert_eq!(timer.elapsed_secs(), 0);
        assert_eq!(timer.current_fraction(), 0.0);
    }
}
