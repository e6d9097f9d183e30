//! Mutable shell session state.

use super::path;

/// Which value the next raw input line will be consumed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Date,
    Time,
}

/// Text attribute: background in the high nibble, foreground in the low,
/// using the 16-color console palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAttribute(u8);

impl ColorAttribute {
    /// Black background, light green foreground.
    pub const DEFAULT: ColorAttribute = ColorAttribute(0x0A);

    /// Parse two hex digits, background then foreground. Equal colors are
    /// rejected because the text would be invisible.
    pub fn from_hex_pair(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let (Some(bg), Some(fg), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        let bg = bg.to_digit(16)? as u8;
        let fg = fg.to_digit(16)? as u8;
        if bg == fg {
            return None;
        }
        Some(ColorAttribute(bg << 4 | fg))
    }

    /// Build from already-validated nibbles.
    pub fn from_nibbles(bg: u8, fg: u8) -> Self {
        ColorAttribute(bg << 4 | fg)
    }

    pub fn background(&self) -> u8 {
        self.0 >> 4
    }

    pub fn foreground(&self) -> u8 {
        self.0 & 0x0F
    }
}

impl Default for ColorAttribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-session state threaded to every command via `CommandContext`.
#[derive(Debug)]
pub struct ShellState {
    /// Internal form, uppercase drive first segment, trailing `\`.
    pub current_dir: String,
    pub echo: bool,
    pub pending: Option<PromptKind>,
    pub color: ColorAttribute,
}

impl ShellState {
    pub fn new(start_dir: String) -> Self {
        Self {
            current_dir: start_dir,
            echo: true,
            pending: None,
            color: ColorAttribute::DEFAULT,
        }
    }

    /// Native form of the current directory, for the prompt.
    pub fn prompt_path(&self) -> String {
        path::to_native(&self.current_dir)
    }
}

// ============================================================================
// Tests
// ============================================================================
