//! DIR.

use super::{CommandContext, CommandResult, Handler, is_switch, switch_value, wants_help};
use crate::config::DIR_PAGE_LINES;
use crate::core::fs::SortKey;
use crate::core::fs::list::{DirOptions, list_directory};
use crate::core::path;

const DIR_HELP: &str = "Displays a list of files and subdirectories in a directory.\n\n\
DIR [drive:][path] [/P] [/W] [/A[:]attributes] [/O[:]sortorder] [/?]\n\n\
  [drive:][path]  Specifies drive and/or directory to list.\n\n\
  /P              Pauses after each screenful (inserts --- More ---).\n\
  /W              Uses wide list format.\n\
  /A[:]attributes D=Dir R=Read-only H=Hidden A=Archive S=System; - prefix excludes.\n\
  /O[:]sortorder  N=name D=date S=size E=extension; - prefix reverses.\n\
  /?              Displays this help.\n";

pub struct DirCommand;

impl Handler for DirCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "DIR"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let mut path_arg = String::new();
        let mut options = DirOptions::default();

        let mut i = 1;
        while i < args.len() {
            let a = &args[i];
            if is_switch(a) {
                if wants_help(a) {
                    return CommandResult::output(DIR_HELP);
                }
                match super::switch_letter(a) {
                    Some('W') => options.wide = true,
                    Some('P') => options.page_lines = DIR_PAGE_LINES,
                    Some('A') => options.attrib = switch_value(args, &mut i).to_uppercase(),
                    Some('O') => {
                        let value = switch_value(args, &mut i).to_uppercase();
                        let mut letters = value.chars();
                        let mut first = letters.next();
                        if first == Some('-') {
                            options.sort_reverse = true;
                            first = letters.next();
                        }
                        options.sort = first.and_then(SortKey::from_letter).unwrap_or_default();
                    }
                    _ => {}
                }
            } else if path_arg.is_empty() && !a.is_empty() {
                path_arg = a.clone();
            }
            i += 1;
        }

        let dir = match path::resolve(&path_arg, &ctx.state.current_dir, ctx.volumes) {
            Ok(dir) => dir,
            Err(err) => return CommandResult::output(format!("{err}\n")),
        };
        match list_directory(ctx.volumes, &dir, &options) {
            Ok(listing) => CommandResult::output(listing),
            Err(err) => CommandResult::output(format!("{err}\n")),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
