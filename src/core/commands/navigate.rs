//! CD/CHDIR and the implicit drive change.

use super::{CommandContext, CommandResult, Handler, wants_help};
use crate::core::path;

const CD_HELP: &str = "Displays the name of or changes the current directory.\n\n\
CD [drive:][path]\n\
CHDIR [drive:][path]\n\n\
  ..   Changes to the parent directory.\n\n\
  Type CD without parameters to display the current directory.\n";

pub struct CdCommand;

impl Handler for CdCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "CD" || cmd == "CHDIR"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let Some(arg) = args.get(1) else {
            return CommandResult::output(format!("{}\n", ctx.state.prompt_path()));
        };
        if wants_help(arg) {
            return CommandResult::output(CD_HELP);
        }
        match path::resolve(arg, &ctx.state.current_dir, ctx.volumes) {
            Ok(dir) => {
                ctx.state.current_dir = dir;
                CommandResult::none()
            }
            Err(err) => CommandResult::output(format!("{err}\n")),
        }
    }
}

/// The bare `NAME:` fallback: mount the drive and land on its root.
pub(super) fn change_drive(token: &str, ctx: &mut CommandContext) -> CommandResult {
    let name = &token[..token.len() - 1];
    let canonical = match ctx.volumes.canonical_name(name) {
        Some(canonical) if ctx.volumes.mount(canonical) => canonical,
        _ => {
            return CommandResult::output("The system cannot find the drive specified.\n");
        }
    };
    ctx.state.current_dir = format!("{canonical}\\");
    CommandResult::none()
}

// ============================================================================
// Tests
// ============================================================================
