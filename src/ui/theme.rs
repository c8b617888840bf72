//! cliclack theme

use cliclack::ThemeState;
use console::Style;

/// Gold while waiting on the user, a green star once answered
#[derive(Debug, Clone, Default)]
pub struct AocTheme;

impl AocTheme {
    /// Shared palette; `settled` is used once the prompt is answered
    fn palette(state: &ThemeState, settled: Style) -> Style {
        match state {
            ThemeState::Active => Style::new().yellow().bold(),
            ThemeState::Submit => settled,
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Error(_) => Style::new().red().bold(),
        }
    }
}

impl cliclack::Theme for AocTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        Self::palette(state, Style::new().dim())
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        Self::palette(state, Style::new().green())
    }
}

/// Install the theme for every later prompt
pub fn init_theme() {
    cliclack::set_theme(AocTheme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliclack::Theme;

    fn painted(style: Style) -> String {
        style.force_styling(true).apply_to("x").to_string()
    }

    #[test]
    fn answered_prompt_gets_a_green_symbol_and_dim_bar() {
        let theme = AocTheme;
        assert_eq!(
            painted(theme.state_symbol_color(&ThemeState::Submit)),
            painted(Style::new().green())
        );
        assert_eq!(
            painted(theme.bar_color(&ThemeState::Submit)),
            painted(Style::new().dim())
        );
    }

    #[test]
    fn errors_are_red_everywhere() {
        let theme = AocTheme;
        let error = ThemeState::Error("bad".to_string());
        assert_eq!(
            painted(theme.bar_color(&error)),
            painted(theme.state_symbol_color(&error))
        );
    }
}
