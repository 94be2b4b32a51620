//! Terminal styling.

use console::Style;

/// Styles for status lines and headers.
#[derive(Debug, Clone)]
pub struct SkyforgeTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub title: Style,
    pub accent: Style,
}

impl Default for SkyforgeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyforgeTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            title: Style::new().bold(),
            accent: Style::new().cyan().bold(),
        }
    }

    /// No colors, for pipes and `--no-color`.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            title: Style::new(),
            accent: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("! {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// `☁ <title>`, used above interactive flows.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.accent.apply_to("☁"), self.title.apply_to(title))
    }
}

/// Colors are used on a terminal unless `NO_COLOR` is set.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
