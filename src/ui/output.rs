//! Status lines: cliclack framing on a terminal, tagged lines otherwise

use super::context::UiContext;
use console::style;

/// Kind of a single status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Ok,
    Warn,
    Fail,
    Info,
}

impl Step {
    /// Tag printed in plain mode
    fn tag(self) -> String {
        match self {
            Step::Ok => style("[OK]").green().to_string(),
            Step::Warn => style("[WARN]").yellow().to_string(),
            Step::Fail => style("[FAIL]").red().to_string(),
            Step::Info => style("[INFO]").cyan().to_string(),
        }
    }

    fn emit(self, ctx: &UiContext, message: &str) {
        if !ctx.use_fancy_output() {
            println!("{} {}", self.tag(), message);
            return;
        }
        // Terminal write failures are not worth aborting a command for
        let _ = match self {
            Step::Ok => cliclack::log::success(message),
            Step::Warn => cliclack::log::warning(message),
            Step::Fail => cliclack::log::error(message),
            Step::Info => cliclack::log::info(message),
        };
    }
}

/// Title line opening a multi-step command
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        let _ = cliclack::intro(style(title).yellow().bold());
    } else {
        println!("{}", style(title).bold());
    }
}

/// Closing line of a command that succeeded
pub fn outro_success(ctx: &UiContext, message: &str) {
    match ctx.use_fancy_output() {
        true => drop(cliclack::outro(style(message).green().bold())),
        false => Step::Ok.emit(ctx, message),
    }
}

/// Closing line of a command that failed
pub fn outro_error(ctx: &UiContext, message: &str) {
    match ctx.use_fancy_output() {
        true => drop(cliclack::outro(style(message).red().bold())),
        false => Step::Fail.emit(ctx, message),
    }
}

pub fn step_ok(ctx: &UiContext, message: &str) {
    Step::Ok.emit(ctx, message);
}

pub fn step_warn(ctx: &UiContext, message: &str) {
    Step::Warn.emit(ctx, message);
}

pub fn step_error(ctx: &UiContext, message: &str) {
    Step::Fail.emit(ctx, message);
}

pub fn step_info(ctx: &UiContext, message: &str) {
    Step::Info.emit(ctx, message);
}

/// Dim follow-up text under a step
pub fn remark(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        let _ = cliclack::log::remark(message);
    } else {
        println!("  {}", style(message).dim());
    }
}

/// `key: value`, key dimmed on a terminal
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    let key = match ctx.use_fancy_output() {
        true => style(key).dim().to_string(),
        false => key.to_string(),
    };
    println!("{}: {}", key, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tags_name_the_step() {
        console::set_colors_enabled(false);
        assert_eq!(Step::Ok.tag(), "[OK]");
        assert_eq!(Step::Fail.tag(), "[FAIL]");
        assert_eq!(Step::Warn.tag(), "[WARN]");
        assert_eq!(Step::Info.tag(), "[INFO]");
    }

    #[test]
    fn plain_output_does_not_panic() {
        let ctx = UiContext::non_interactive();
        intro(&ctx, "aoc check");
        step_ok(&ctx, "2024/day1/part1");
        step_warn(&ctx, "Answer is too high");
        step_error(&ctx, "Regression");
        step_info(&ctx, "Keeping existing input");
        remark(&ctx, "Run: aoc check");
        key_value(&ctx, "Lock res", "11");
        outro_success(&ctx, "Done");
        outro_error(&ctx, "Failed");
    }
}
