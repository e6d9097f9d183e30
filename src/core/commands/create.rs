//! MD/MKDIR.

use super::{CommandContext, CommandResult, Handler, wants_help};
use crate::core::error::FsError;
use crate::core::fs::tree::create_dir_path;
use crate::core::path;

const MKDIR_HELP: &str = "Creates a directory.\n\n\
MKDIR [drive:]path\n\
MD [drive:]path\n\n\
Intermediate directories are created as needed. For example:\n\n\
    mkdir HDD0-E:\\a\\b\\c\\d\n\n\
creates a, then a\\b, then a\\b\\c, then a\\b\\c\\d.\n";

pub struct MkdirCommand;

impl Handler for MkdirCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "MKDIR" || cmd == "MD"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let Some(arg) = args.get(1) else {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        };
        if wants_help(arg) {
            return CommandResult::output(MKDIR_HELP);
        }
        if arg == "." || arg == ".." {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        }
        let outcome = path::resolve(arg, &ctx.state.current_dir, ctx.volumes)
            .and_then(|dir| create_dir_path(ctx.volumes, &dir));
        match outcome {
            Ok(()) => CommandResult::none(),
            Err(err) => CommandResult::output(format!("{err}\n")),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
