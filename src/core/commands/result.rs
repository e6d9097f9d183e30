//! Command execution result type.

use crate::core::state::PromptKind;

/// How the frontend should power down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownMode {
    PowerOff,
    Reboot,
    WarmReboot,
}

/// Result of executing one command.
///
/// Every effect that needs the frontend is a tagged variant rather than an
/// in-band control byte: clearing the screen, exiting, prompting for a
/// pending date/time value, entering the editor, or powering down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Text to print, possibly empty.
    Output(String),
    ClearScreen,
    Exit,
    /// Show `message` and consume the next raw line as `kind`.
    PromptFor { kind: PromptKind, message: String },
    /// Run the modal editor over the file at this internal path.
    Edit { path: String },
    Shutdown(ShutdownMode),
}

impl CommandResult {
    /// A plain output result.
    pub fn output(text: impl Into<String>) -> Self {
        CommandResult::Output(text.into())
    }

    /// A silent success.
    pub fn none() -> Self {
        CommandResult::Output(String::new())
    }
}
