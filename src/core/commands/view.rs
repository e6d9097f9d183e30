//! TYPE and EDIT.

use super::{CommandContext, CommandResult, Handler, is_switch, wants_help};
use crate::core::error::FsError;
use crate::core::fs::textfile;
use crate::core::path;

const TYPE_HELP: &str = "Displays the contents of a text file.\n\n\
TYPE [drive:][path]filename [...]\n";

const EDIT_HELP: &str = "Opens a text file in the line editor, creating it if absent.\n\n\
EDIT [drive:][path]filename\n";

pub struct TypeCommand;

impl Handler for TypeCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "TYPE"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let names: Vec<&String> = args[1..].iter().filter(|a| !is_switch(a)).collect();
        if args[1..].iter().any(|a| wants_help(a)) {
            return CommandResult::output(TYPE_HELP);
        }
        if names.is_empty() {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        }

        let mut output = String::new();
        for name in names {
            let text = path::resolve(name, &ctx.state.current_dir, ctx.volumes)
                .and_then(|p| textfile::read_text(ctx.volumes, path::strip_trailing(&p)));
            match text {
                Ok(content) => {
                    output.push_str(&content);
                    if !content.ends_with('\n') {
                        output.push('\n');
                    }
                }
                // Unlike DEL, a bad name does not stop the walk.
                Err(err) => {
                    output.push_str(&format!("{err}\n"));
                }
            }
        }
        CommandResult::output(output)
    }
}

pub struct EditCommand;

impl Handler for EditCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "EDIT"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let Some(arg) = args.get(1) else {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        };
        if wants_help(arg) {
            return CommandResult::output(EDIT_HELP);
        }
        let resolved = match path::resolve(arg, &ctx.state.current_dir, ctx.volumes) {
            Ok(p) => path::strip_trailing(&p).to_string(),
            Err(err) => return CommandResult::output(format!("{err}\n")),
        };
        // Prove the file is loadable before handing control to the editor.
        if let Err(err) = textfile::load_lines(ctx.volumes, &resolved) {
            return CommandResult::output(format!("{err}\n"));
        }
        CommandResult::Edit { path: resolved }
    }
}

// ============================================================================
// Tests
// ============================================================================
