//! Interactive terminal vs CI detection

use std::io::IsTerminal;
use tracing::debug;

/// Set to force plain, line-oriented output
pub const PLAIN_ENV: &str = "AOC_PLAIN";

/// Environment variables set by common CI providers
const CI_VARS: [&str; 10] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TEAMCITY_VERSION",
    "TF_BUILD",
    PLAIN_ENV,
];

/// How output and prompts behave for this invocation
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    interactive: bool,
    /// `--yes` was given; confirmations pass without asking
    auto_yes: bool,
}

impl UiContext {
    /// Interactive only with a terminal on both stdin and stdout and no CI markers
    pub fn detect() -> Self {
        let terminal = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
        let marker = ci_marker(|var| std::env::var_os(var).is_some());
        if let Some(var) = marker {
            debug!("{} is set, using plain output", var);
        }
        Self {
            interactive: terminal && marker.is_none(),
            auto_yes: false,
        }
    }

    /// Plain output, prompts answered with their defaults
    pub fn non_interactive() -> Self {
        Self::default()
    }

    pub fn with_auto_yes(mut self, yes: bool) -> Self {
        self.auto_yes = yes;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn auto_yes(&self) -> bool {
        self.auto_yes
    }

    /// Spinners, live redraws and cliclack framing
    pub fn use_fancy_output(&self) -> bool {
        self.interactive
    }
}

/// First CI or plain-output variable that is set
fn ci_marker(is_set: impl Fn(&str) -> bool) -> Option<&'static str> {
    CI_VARS.iter().copied().find(|var| is_set(var))
}
