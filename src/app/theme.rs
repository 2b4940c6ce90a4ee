//! UI theme: the VS Code dark palette, kept in one place instead of
//! scattered through render code.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub titlebar_bg: Color,
    pub sidebar_bg: Color,
    pub editor_bg: Color,
    pub statusbar_bg: Color,
    pub border: Color,
    pub accent: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_active: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub tab_inactive_fg: Color,
    pub folder_fg: Color,
    pub syntax_keyword_fg: Color,
    pub syntax_string_fg: Color,
    pub syntax_number_fg: Color,
    pub syntax_comment_fg: Color,
    pub syntax_function_fg: Color,
    pub syntax_variable_fg: Color,
    pub icon_jsx: Color,
    pub icon_js: Color,
    pub icon_py: Color,
    pub icon_cpp: Color,
    pub icon_md: Color,
    pub icon_default: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("TERMFOLIO_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "ansi" | "16" | "basic" => return TerminalColorSupport::Ansi,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || term.contains("truecolor")
        || term.contains("direct")
    {
        TerminalColorSupport::TrueColor
    } else {
        TerminalColorSupport::Ansi
    }
}

impl UiTheme {
    pub fn detect() -> Self {
        match detect_terminal_color_support() {
            TerminalColorSupport::TrueColor => Self::dark(),
            TerminalColorSupport::Ansi => Self::ansi(),
        }
    }

    pub fn dark() -> Self {
        Self {
            titlebar_bg: Color::Rgb(0x32, 0x33, 0x33),
            sidebar_bg: Color::Rgb(0x25, 0x25, 0x26),
            editor_bg: Color::Rgb(0x1e, 0x1e, 0x1e),
            statusbar_bg: Color::Rgb(0x00, 0x7a, 0xcc),
            border: Color::Rgb(0x3e, 0x3e, 0x42),
            accent: Color::Rgb(0x00, 0x7a, 0xcc),
            text: Color::Rgb(0xcc, 0xcc, 0xcc),
            text_secondary: Color::Rgb(0x85, 0x85, 0x85),
            text_active: Color::Rgb(0xff, 0xff, 0xff),
            selected_bg: Color::Rgb(0x2a, 0x2d, 0x2e),
            selected_fg: Color::Rgb(0xff, 0xff, 0xff),
            tab_inactive_fg: Color::Rgb(0x96, 0x96, 0x96),
            folder_fg: Color::Rgb(0xc5, 0xc5, 0xc5),
            syntax_keyword_fg: Color::Rgb(0xc5, 0x86, 0xc0),
            syntax_string_fg: Color::Rgb(0xce, 0x91, 0x78),
            syntax_number_fg: Color::Rgb(0xb5, 0xce, 0xa8),
            syntax_comment_fg: Color::Rgb(0x6a, 0x99, 0x55),
            syntax_function_fg: Color::Rgb(0xdc, 0xdc, 0xaa),
            syntax_variable_fg: Color::Rgb(0x4f, 0xc1, 0xff),
            icon_jsx: Color::Rgb(0x61, 0xda, 0xfb),
            icon_js: Color::Rgb(0xf7, 0xdf, 0x1e),
            icon_py: Color::Rgb(0x37, 0x76, 0xab),
            icon_cpp: Color::Rgb(0x00, 0x59, 0x9c),
            icon_md: Color::Rgb(0x51, 0x9a, 0xba),
            icon_default: Color::Rgb(0xcc, 0xcc, 0xcc),
        }
    }

    /// Fallback palette for terminals without truecolor.
    pub fn ansi() -> Self {
        Self {
            titlebar_bg: Color::Black,
            sidebar_bg: Color::Black,
            editor_bg: Color::Reset,
            statusbar_bg: Color::Blue,
            border: Color::DarkGray,
            accent: Color::Blue,
            text: Color::Gray,
            text_secondary: Color::DarkGray,
            text_active: Color::White,
            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            tab_inactive_fg: Color::DarkGray,
            folder_fg: Color::Gray,
            syntax_keyword_fg: Color::Magenta,
            syntax_string_fg: Color::Yellow,
            syntax_number_fg: Color::Green,
            syntax_comment_fg: Color::Green,
            syntax_function_fg: Color::Yellow,
            syntax_variable_fg: Color::Cyan,
            icon_jsx: Color::Cyan,
            icon_js: Color::Yellow,
            icon_py: Color::Blue,
            icon_cpp: Color::Blue,
            icon_md: Color::Cyan,
            icon_default: Color::Gray,
        }
    }

    /// Leaf color keyed on file extension, like the original explorer's
    /// per-language icons.
    pub fn file_color(&self, name: &str) -> Color {
        if name.ends_with(".jsx") {
            self.icon_jsx
        } else if name.ends_with(".js") {
            self.icon_js
        } else if name.ends_with(".py") {
            self.icon_py
        } else if name.ends_with(".cpp") {
            self.icon_cpp
        } else if name.ends_with(".md") {
            self.icon_md
        } else {
            self.icon_default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_color_by_extension() {
        let theme = UiTheme::dark();
        assert_eq!(theme.file_color("Home.jsx"), theme.icon_jsx);
        assert_eq!(theme.file_color("BlogNest.js"), theme.icon_js);
        assert_eq!(theme.file_color("README.md"), theme.icon_md);
        assert_eq!(theme.file_color("notes.txt"), theme.icon_default);
    }
}
