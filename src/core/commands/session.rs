//! VER, HELP, LOGIN, SHUTDOWN and EXIT.

use super::{CommandContext, CommandResult, Handler, ShutdownMode, wants_help};
use crate::config;

const SHUTDOWN_HELP: &str = "Powers off or reboots the console.\n\n\
SHUTDOWN [/S | /R | /W]\n\n\
  /S   Power off (default).\n\
  /R   Full reboot.\n\
  /W   Warm reboot back into the shell.\n";

pub struct VerCommand;

impl Handler for VerCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "VER"
    }

    fn execute(&self, _args: &[String], _ctx: &mut CommandContext) -> CommandResult {
        CommandResult::output(config::VERSION_BANNER)
    }
}

pub struct HelpCommand;

impl Handler for HelpCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "HELP"
    }

    fn execute(&self, _args: &[String], _ctx: &mut CommandContext) -> CommandResult {
        CommandResult::output(config::HELP_TEXT)
    }
}

pub struct LoginCommand;

impl Handler for LoginCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "LOGIN"
    }

    fn execute(&self, args: &[String], _ctx: &mut CommandContext) -> CommandResult {
        let Some(name) = args.get(1) else {
            return CommandResult::output("Bad command or file name\n");
        };
        if name.eq_ignore_ascii_case("JOSHUA") {
            return CommandResult::output(
                "Greetings, Professor Falken.\n\
                 Shall we play a game?\n\
                 A strange game. The only winning move is not to play.\n",
            );
        }
        CommandResult::output(format!("Hello, {name}.\n"))
    }
}

pub struct ShutdownCommand;

impl Handler for ShutdownCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "SHUTDOWN"
    }

    fn execute(&self, args: &[String], _ctx: &mut CommandContext) -> CommandResult {
        let Some(arg) = args.get(1) else {
            // No switch means power off.
            return CommandResult::Shutdown(ShutdownMode::PowerOff);
        };
        if wants_help(arg) {
            return CommandResult::output(SHUTDOWN_HELP);
        }
        match super::switch_letter(arg) {
            Some('S') => CommandResult::Shutdown(ShutdownMode::PowerOff),
            Some('R') => CommandResult::Shutdown(ShutdownMode::Reboot),
            Some('W') => CommandResult::Shutdown(ShutdownMode::WarmReboot),
            _ => CommandResult::output(SHUTDOWN_HELP),
        }
    }
}

pub struct ExitCommand;

impl Handler for ExitCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "EXIT"
    }

    fn execute(&self, _args: &[String], _ctx: &mut CommandContext) -> CommandResult {
        CommandResult::Exit
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

    fn run(line: &str, tmp: &TempRoot) -> CommandResult {
        let volumes = tmp.volumes();
        let mut state = ShellState::new("HDD0-E\\".to_string());
        let clock = ShellClock::new();
        let mut ctx = CommandContext {
            state: &mut state,
            volumes: &volumes,
            clock: &clock,
        };
        dispatch(&parse_line(line), &mut ctx)
    }

    fn fixture() -> TempRoot {
        let tmp = TempRoot::new("session-cmd");
        tmp.mkdrive("HDD0-E");
        tmp
    }

    #[test]
    fn test_ver_reports_version() {
        let tmp = fixture();
        let CommandResult::Output(out) = run("VER", &tmp) else {
            panic!("expected output");
        };
        assert!(out.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_help_lists_commands() {
        let tmp = fixture();
        let CommandResult::Output(out) = run("HELP", &tmp) else {
            panic!("expected output");
        };
        for name in ["DIR", "COPY", "DEL", "MKDIR", "SHUTDOWN", "EXIT"] {
            assert!(out.contains(name), "{name} missing from help");
        }
    }

    #[test]
    fn test_login_variants() {
        let tmp = fixture();
        assert_eq!(
            run("LOGIN", &tmp),
            CommandResult::output("Bad command or file name\n")
        );
        assert_eq!(
            run("LOGIN alice", &tmp),
            CommandResult::output("Hello, alice.\n")
        );
        let CommandResult::Output(out) = run("LOGIN joshua", &tmp) else {
            panic!("expected output");
        };
        assert!(out.starts_with("Greetings, Professor Falken.\n"));
    }

    #[test]
    fn test_shutdown_modes() {
        let tmp = fixture();
        assert_eq!(
            run("SHUTDOWN /S", &tmp),
            CommandResult::Shutdown(ShutdownMode::PowerOff)
        );
        assert_eq!(
            run("SHUTDOWN /r", &tmp),
            CommandResult::Shutdown(ShutdownMode::Reboot)
        );
        assert_eq!(
            run("SHUTDOWN /W", &tmp),
            CommandResult::Shutdown(ShutdownMode::WarmReboot)
        );
        // Bare SHUTDOWN powers off.
        assert_eq!(
            run("SHUTDOWN", &tmp),
            CommandResult::Shutdown(ShutdownMode::PowerOff)
        );
        let CommandResult::Output(out) = run("SHUTDOWN /?", &tmp) else {
            panic!("expected help");
        };
        assert!(out.starts_with("Powers off or reboots the console."));
    }

    #[test]
    fn test_exit() {
        let tmp = fixture();
        assert_eq!(run("EXIT", &tmp), CommandResult::Exit);
    }
}
