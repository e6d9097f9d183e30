//! Command registry and dispatch.
//!
//! Each built-in command is a unit struct implementing [`Handler`]. The
//! registry is a fixed, ordered list; the dispatcher uppercases the first
//! token, walks the list, and runs the first handler that claims the name.
//! A single token ending in `:` falls through to the implicit drive change;
//! anything else is `Bad command or file name`.

pub mod clock;
pub mod create;
pub mod delete;
pub mod listing;
pub mod navigate;
pub mod result;
pub mod session;
pub mod terminal;
pub mod transfer;
pub mod view;

pub use result::{CommandResult, ShutdownMode};

use crate::core::clock::ShellClock;
use crate::core::drives::Volumes;
use crate::core::state::ShellState;

/// Everything a command may read or mutate during one execution.
pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub volumes: &'a Volumes,
    pub clock: &'a ShellClock,
}

/// One built-in command.
pub trait Handler: Sync {
    /// Does this handler claim the (uppercased) command name?
    fn matches(&self, cmd: &str) -> bool;

    /// Run the command. `args[0]` is the command token as typed.
    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult;
}

/// Dispatch order. First match wins.
static REGISTRY: &[&dyn Handler] = &[
    &terminal::ClsCommand,
    &terminal::ColorCommand,
    &transfer::CopyCommand,
    &clock::DateCommand,
    &clock::TimeCommand,
    &delete::DelCommand,
    &terminal::EchoCommand,
    &transfer::MoveCommand,
    &session::VerCommand,
    &session::HelpCommand,
    &listing::DirCommand,
    &create::MkdirCommand,
    &delete::RmdirCommand,
    &navigate::CdCommand,
    &view::TypeCommand,
    &view::EditCommand,
    &session::LoginCommand,
    &session::ShutdownCommand,
    &session::ExitCommand,
];

/// Execute one tokenized command line.
pub fn dispatch(args: &[String], ctx: &mut CommandContext) -> CommandResult {
    let Some(first) = args.first() else {
        return CommandResult::none();
    };
    let cmd = first.to_uppercase();
    for handler in REGISTRY {
        if handler.matches(&cmd) {
            return handler.execute(args, ctx);
        }
    }
    // A bare `NAME:` token switches drives.
    if args.len() == 1 && first.ends_with(':') {
        return navigate::change_drive(first, ctx);
    }
    CommandResult::output(format!("Bad command or file name - {first}\n"))
}

// ============================================================================
// Switch parsing helpers
// ============================================================================

/// Switches start with `/` or `-`.
pub(crate) fn is_switch(arg: &str) -> bool {
    arg.starts_with(['/', '-'])
}

/// Any switch containing `?` asks for the command's help text.
pub(crate) fn wants_help(arg: &str) -> bool {
    is_switch(arg) && arg.contains('?')
}

/// Uppercased switch letter (`/w` -> `W`).
pub(crate) fn switch_letter(arg: &str) -> Option<char> {
    arg.chars().nth(1).map(|c| c.to_ascii_uppercase())
}

/// Value of a switch that takes one: `/A:RH` and `/ARH` carry it inline,
/// `/A RH` takes the next argument (advancing `i`). Missing values are
/// empty.
pub(crate) fn switch_value(args: &[String], i: &mut usize) -> String {
    let arg = &args[*i];
    let bytes = arg.as_bytes();
    if bytes.len() >= 3 && bytes[2] == b':' {
        arg[3..].to_string()
    } else if bytes.len() > 2 {
        arg[2..].to_string()
    } else if *i + 1 < args.len() {
        *i += 1;
        args[*i].clone()
    } else {
        String::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
