//! Terminal output
//!
//! `cliclack` framing and prompts, `indicatif` spinners and `console`
//! styling when attached to a terminal; plain lines everywhere else.

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::{UiContext, PLAIN_ENV};
pub use output::{
    intro, key_value, outro_error, outro_success, remark, step_error, step_info, step_ok,
    step_warn,
};
pub use progress::TaskSpinner;
pub use prompts::confirm;
pub use theme::{init_theme, AocTheme};
