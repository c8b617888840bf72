//! Spinner for network calls, silent fallback in CI

use super::context::UiContext;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner shown while waiting on the puzzle server
pub struct TaskSpinner {
    bar: Option<ProgressBar>,
    interactive: bool,
}

impl TaskSpinner {
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            bar: None,
            interactive: ctx.use_fancy_output(),
        }
    }

    pub fn start(&mut self, message: &str) {
        if !self.interactive {
            println!("{} {}", style("...").dim(), message);
            return;
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg}  {elapsed:.dim}")
        {
            bar.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(bar);
    }

    /// Stop with a success line
    pub fn stop(&mut self, message: &str) {
        self.finish(style("✓").green(), "[OK]", message);
    }

    /// Stop with a failure line
    pub fn stop_error(&mut self, message: &str) {
        self.finish(style("✗").red(), "[FAIL]", message);
    }

    /// Remove the spinner without a message
    pub fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn finish(&mut self, symbol: console::StyledObject<&str>, plain: &str, message: &str) {
        match self.bar.take() {
            Some(bar) => {
                bar.finish_and_clear();
                println!("{} {}", symbol, message);
            }
            None if self.interactive => println!("{} {}", symbol, message),
            None => println!("{} {}", plain, message),
        }
    }
}

impl Drop for TaskSpinner {
    fn drop(&mut self) {
        self.clear();
    }
}
