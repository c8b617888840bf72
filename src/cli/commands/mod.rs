//! CLI command implementations

pub mod cache;
pub mod check;
pub mod completions;
pub mod init;
pub mod input;
pub mod lock;
pub mod login;
pub mod run;
pub mod runner;
pub mod status;
pub mod submit;

pub use cache::execute as cache;
pub use check::execute as check;
pub use completions::execute as completions;
pub use init::execute as init;
pub use input::execute as input;
pub use lock::{lock, unlock};
pub use login::execute as login;
pub use run::execute as run;
pub use runner::execute as runner;
pub use status::execute as status;
pub use submit::execute as submit;
