//! Shell engine.
//!
//! [`Shell`] owns the session: the mutable state (current directory, echo,
//! color, pending prompt), the drive registry, and the settable clock. The
//! frontend feeds it raw input lines and renders the [`CommandResult`] each
//! one produces.

pub mod clock;
pub mod commands;
pub mod drives;
pub mod error;
pub mod fs;
pub mod parser;
pub mod path;
pub mod state;

#[cfg(test)]
pub(crate) mod testfs;

use std::path::PathBuf;

use log::warn;

use crate::config;
use clock::ShellClock;
use commands::{CommandContext, CommandResult, dispatch};
use drives::Volumes;
use state::{PromptKind, ShellState};

pub struct Shell {
    state: ShellState,
    volumes: Volumes,
    clock: ShellClock,
}

impl Shell {
    /// Create a session rooted at `root`, starting on `start_drive` (falling
    /// back to the default drive when the name is unknown).
    pub fn new(root: PathBuf, start_drive: &str) -> Self {
        let volumes = Volumes::new(root);
        let drive = volumes
            .canonical_name(start_drive)
            .unwrap_or(config::DEFAULT_DRIVE);
        if !volumes.mount(drive) {
            warn!("start drive {drive} is not mounted; its root is missing");
        }
        Self {
            state: ShellState::new(format!("{drive}\\")),
            volumes,
            clock: ShellClock::new(),
        }
    }

    /// Execute one raw input line.
    ///
    /// A pending DATE/TIME prompt consumes the line first: empty input keeps
    /// the current value, anything else is parsed as the new one. Otherwise
    /// the line is tokenized and dispatched.
    pub fn submit_line(&mut self, line: &str) -> CommandResult {
        if let Some(kind) = self.state.pending.take() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return CommandResult::none();
            }
            let accepted = match kind {
                PromptKind::Date => self.clock.set_date_from_str(trimmed),
                PromptKind::Time => self.clock.set_time_from_str(trimmed),
            };
            return if accepted {
                CommandResult::none()
            } else {
                let what = match kind {
                    PromptKind::Date => "date",
                    PromptKind::Time => "time",
                };
                CommandResult::output(format!("The system cannot accept the {what} entered.\n"))
            };
        }

        let args = parser::parse_line(line);
        let mut ctx = CommandContext {
            state: &mut self.state,
            volumes: &self.volumes,
            clock: &self.clock,
        };
        dispatch(&args, &mut ctx)
    }

    /// Prompt string: the native current directory plus `> `.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.state.prompt_path())
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    pub fn volumes(&self) -> &Volumes {
        &self.volumes
    }

    pub fn clock(&self) -> &ShellClock {
        &self.clock
    }
}

// ============================================================================
// Tests
// ============================================================================
