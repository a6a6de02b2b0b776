/// Inline terminal renderer.
///
/// Draws the progress view in place below the shell prompt (no alternate
/// screen): each frame rewinds over the previously drawn lines and rewrites
/// them. Only consumes `TimerState` snapshots; it holds no timer data.
use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::event::{QUIT_KEYS, START_STOP_KEYS};
use crate::timer::TimerState;

const PROGRESS_PADDING: usize = 2;
const BAR_WIDTH: usize = 40;
const HELP_COLOR: Color = Color::DarkGrey;

/// Render a fraction as a block-character bar of the given width.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub struct Screen {
    drawn_lines: u16,
}

impl Screen {
    pub fn new() -> Self {
        Self { drawn_lines: 0 }
    }

    pub fn draw(&mut self, out: &mut impl Write, timer: &TimerState) -> io::Result<()> {
        if self.drawn_lines > 0 {
            queue!(out, MoveUp(self.drawn_lines))?;
        }
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

        let pad = " ".repeat(PROGRESS_PADDING);
        let mut lines = 0u16;

        queue!(out, Print("\r\n"))?;
        lines += 1;

        if timer.is_running() {
            let fraction = timer.current_fraction();
            queue!(
                out,
                Print(format!(
                    "{pad}{} {:3.0}%\r\n",
                    progress_bar(fraction, BAR_WIDTH),
                    fraction * 100.0
                )),
                Print(format!(
                    "{pad}{}s / {}s\r\n",
                    timer.elapsed_secs(),
                    timer.total_secs()
                )),
            )?;
            lines += 2;
        }

        queue!(out, Print("\r\n"), SetForegroundColor(HELP_COLOR))?;
        lines += 1;
        for help in [START_STOP_KEYS.help, QUIT_KEYS.help] {
            queue!(out, Print(help), Print("\r\n"))?;
            lines += 1;
        }
        queue!(out, ResetColor)?;
        out.flush()?;

        self.drawn_lines = lines;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_empty_at_zero() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
    }

    #[test]
    fn bar_is_full_at_one() {
        assert_eq!(progress_bar(1.0, 4), "████");
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(0.25, 4), "█░░░");
    }

    #[test]
    fn bar_clamps_out_of_range_input() {
        assert_eq!(progress_bar(-0.5, 4), "░░░░");
        assert_eq!(progress_bar(2.0, 4), "████");
    }

    #[test]
    fn draw_shows_bar_only_while_running() {
        let mut screen = Screen::new();
        let mut timer = TimerState::new(5);

        let mut idle = Vec::new();
        screen.draw(&mut idle, &timer).unwrap();
        let idle = String::from_utf8(idle).unwrap();
        assert!(!idle.contains('█'));
        assert!(idle.contains(START_STOP_KEYS.help));
        assert!(idle.contains(QUIT_KEYS.help));

        timer.toggle_start_stop();
        timer.on_tick();
        let mut running = Vec::new();
        screen.draw(&mut running, &timer).unwrap();
        let running = String::from_utf8(running).unwrap();
        assert!(running.contains('█'));
        assert!(running.contains("1s / 5s"));
    }
}
