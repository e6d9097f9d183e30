//! CLS, COLOR and ECHO.

use super::{CommandContext, CommandResult, Handler, wants_help};
use crate::core::state::ColorAttribute;

const COLOR_HELP: &str = "Sets the console foreground and background colors.\n\n\
COLOR [attr]\n\n\
  attr  Two hex digits: background first, then foreground.\n\n\
Color digits:\n\
    0 = Black       8 = Gray\n\
    1 = Blue        9 = Light Blue\n\
    2 = Green       A = Light Green\n\
    3 = Aqua        B = Light Aqua\n\
    4 = Red         C = Light Red\n\
    5 = Purple      D = Light Purple\n\
    6 = Yellow      E = Light Yellow\n\
    7 = White       F = Bright White\n\n\
COLOR without an argument restores the default colors.\n";

const ECHO_HELP: &str = "Displays messages, or turns command-echoing on or off.\n\n\
ECHO [ON | OFF]\n\
ECHO [message]\n\n\
Type ECHO without parameters to display the current echo setting.\n";

pub struct ClsCommand;

impl Handler for ClsCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "CLS"
    }

    fn execute(&self, _args: &[String], _ctx: &mut CommandContext) -> CommandResult {
        CommandResult::ClearScreen
    }
}

pub struct ColorCommand;

impl Handler for ColorCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "COLOR"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let Some(arg) = args.get(1) else {
            ctx.state.color = ColorAttribute::DEFAULT;
            return CommandResult::none();
        };
        if wants_help(arg) {
            return CommandResult::output(COLOR_HELP);
        }
        let mut chars = arg.chars();
        let nibbles = match (chars.next(), chars.next(), chars.next()) {
            (Some(bg), Some(fg), None) => bg.to_digit(16).zip(fg.to_digit(16)),
            _ => None,
        };
        let Some((bg, fg)) = nibbles else {
            return CommandResult::output(format!("Invalid color attribute - {arg}\n"));
        };
        if bg == fg {
            return CommandResult::output("Foreground and background colors must differ.\n");
        }
        ctx.state.color = ColorAttribute::from_nibbles(bg as u8, fg as u8);
        CommandResult::none()
    }
}

pub struct EchoCommand;

impl Handler for EchoCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "ECHO"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let Some(first) = args.get(1) else {
            let setting = if ctx.state.echo { "on" } else { "off" };
            return CommandResult::output(format!("ECHO is {setting}.\n"));
        };
        if wants_help(first) {
            return CommandResult::output(ECHO_HELP);
        }
        if first.eq_ignore_ascii_case("ON") {
            ctx.state.echo = true;
            return CommandResult::none();
        }
        if first.eq_ignore_ascii_case("OFF") {
            ctx.state.echo = false;
            return CommandResult::none();
        }
        CommandResult::output(format!("{}\n", args[1..].join(" ")))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ShellClock;
    use crate::core::commands::dispatch;
    use crate::core::parser::parse_line;
    use crate::core::state::ShellState;
    use crate::core::testfs::TempRoot;

    fn session() -> (TempRoot, ShellState, ShellClock) {
        let tmp = TempRoot::new("terminal-cmd");
        tmp.mkdrive("HDD0-E");
        (tmp, ShellState::new("HDD0-E\\".to_string()), ShellClock::new())
    }

    #[test]
    fn test_color_sets_attribute() {
        let (tmp, mut state, clock) = session();
        let volumes = tmp.volumes();
        let mut ctx = CommandContext {
            state: &mut state,
            volumes: &volumes,
            clock: &clock,
        };
        assert_eq!(dispatch(&parse_line("COLOR 1F"), &mut ctx), CommandResult::none());
        assert_eq!(ctx.state.color.background(), 0x1);
        assert_eq!(ctx.state.color.foreground(), 0xF);
        // No argument restores the default.
        dispatch(&parse_line("COLOR"), &mut ctx);
        assert_eq!(ctx.state.color, ColorAttribute::DEFAULT);
    }

    #[test]
    fn test_color_error_messages() {
        let (tmp, mut state, clock) = session();
        let volumes = tmp.volumes();
        let mut ctx = CommandContext {
            state: &mut state,
            volumes: &volumes,
            clock: &clock,
        };
        assert_eq!(
            dispatch(&parse_line("COLOR ZZ"), &mut ctx),
            CommandResult::output("Invalid color attribute - ZZ\n")
        );
        assert_eq!(
            dispatch(&parse_line("COLOR 1F0"), &mut ctx),
            CommandResult::output("Invalid color attribute - 1F0\n")
        );
        assert_eq!(
            dispatch(&parse_line("COLOR AA"), &mut ctx),
            CommandResult::output("Foreground and background colors must differ.\n")
        );
    }

    #[test]
    fn test_echo_toggles_and_reports() {
        let (tmp, mut state, clock) = session();
        let volumes = tmp.volumes();
        let mut ctx = CommandContext {
            state: &mut state,
            volumes: &volumes,
            clock: &clock,
        };
        assert_eq!(
            dispatch(&parse_line("ECHO"), &mut ctx),
            CommandResult::output("ECHO is on.\n")
        );
        dispatch(&parse_line("ECHO off"), &mut ctx);
        assert!(!ctx.state.echo);
        assert_eq!(
            dispatch(&parse_line("ECHO"), &mut ctx),
            CommandResult::output("ECHO is off.\n")
        );
        dispatch(&parse_line("ECHO ON"), &mut ctx);
        assert!(ctx.state.echo);
        // Trailing tokens do not stop the toggle.
        assert_eq!(
            dispatch(&parse_line("ECHO OFF now"), &mut ctx),
            CommandResult::none()
        );
        assert!(!ctx.state.echo);
    }

    #[test]
    fn test_echo_help_switch() {
        let (tmp, mut state, clock) = session();
        let volumes = tmp.volumes();
        let mut ctx = CommandContext {
            state: &mut state,
            volumes: &volumes,
            clock: &clock,
        };
        let CommandResult::Output(out) = dispatch(&parse_line("ECHO /?"), &mut ctx) else {
            panic!("expected output");
        };
        assert!(out.starts_with("Displays messages, or turns command-echoing"));
        assert!(ctx.state.echo);
    }

    #[test]
    fn test_echo_prints_message() {
        let (tmp, mut state, clock) = session();
        let volumes = tmp.volumes();
        let mut ctx = CommandContext {
            state: &mut state,
            volumes: &volumes,
            clock: &clock,
        };
        assert_eq!(
            dispatch(&parse_line("ECHO hello   there"), &mut ctx),
            CommandResult::output("hello there\n")
        );
        // A leading ON/OFF token is a toggle, not a message.
        assert_eq!(
            dispatch(&parse_line("ECHO on and on"), &mut ctx),
            CommandResult::none()
        );
        assert!(ctx.state.echo);
    }
}
