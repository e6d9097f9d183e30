//! COPY and MOVE.

use std::fs;

use super::{CommandContext, CommandResult, Handler, is_switch, wants_help};
use crate::core::error::FsError;
use crate::core::fs::transfer::{append_files, copy_path, move_path};
use crate::core::path;

const COPY_HELP: &str = "Copies one or more files to another location.\n\n\
COPY [/Y | /-Y] source [+ source [+ ...]] [destination]\n\n\
  source       The file(s) to be copied.\n\
  destination  The directory and/or filename for the new file(s).\n\
  /Y           Suppresses prompting to confirm overwriting (default).\n\
  /-Y          Prompts to confirm overwriting (not implemented).\n\n\
To append files: COPY file1+file2+file3 destination\n";

const MOVE_HELP: &str = "Moves files and renames files and directories.\n\n\
MOVE [/Y] source destination\n\n\
  source       The file or directory to move.\n\
  destination  The new location or name.\n\
  /Y           Overwrite an existing destination file.\n";

/// Resolve a path argument to its file-style internal form (no trailing
/// separator).
fn resolve_file(arg: &str, ctx: &CommandContext) -> Result<String, FsError> {
    let resolved = path::resolve(arg, &ctx.state.current_dir, ctx.volumes)?;
    Ok(path::strip_trailing(&resolved).to_string())
}

fn is_existing_dir(ctx: &CommandContext, internal: &str) -> bool {
    ctx.volumes
        .resolve(internal)
        .is_ok_and(|host| fs::metadata(host).is_ok_and(|meta| meta.is_dir()))
}

pub struct CopyCommand;

impl Handler for CopyCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "COPY"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        if args.len() < 2 {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        }
        let mut overwrite = true;
        let mut path_args: Vec<&String> = Vec::new();
        for a in &args[1..] {
            if is_switch(a) {
                if wants_help(a) {
                    return CommandResult::output(COPY_HELP);
                }
                match a.to_uppercase().as_str() {
                    "/Y" | "-Y" => overwrite = true,
                    "/-Y" => overwrite = false,
                    _ => {}
                }
            } else {
                path_args.push(a);
            }
        }
        let Some((dest_arg, source_args)) = path_args.split_last() else {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        };

        // `a+b+c` concatenation syntax expands into individual sources.
        let sources: Vec<&str> = source_args
            .iter()
            .flat_map(|spec| spec.split('+'))
            .filter(|part| !part.is_empty())
            .collect();
        if sources.is_empty() {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        }

        let outcome = self.run(ctx, &sources, dest_arg, overwrite);
        match outcome {
            Ok(()) => CommandResult::none(),
            Err(err) => CommandResult::output(format!("{err}\n")),
        }
    }
}

impl CopyCommand {
    fn run(
        &self,
        ctx: &mut CommandContext,
        sources: &[&str],
        dest_arg: &str,
        overwrite: bool,
    ) -> Result<(), FsError> {
        let dest = resolve_file(dest_arg, ctx)?;
        let dest_is_dir = is_existing_dir(ctx, &dest);

        if sources.len() == 1 {
            let src = resolve_file(sources[0], ctx)?;
            let dst = if dest_is_dir {
                format!("{dest}\\{}", path::file_name(&src))
            } else {
                dest
            };
            return copy_path(ctx.volumes, &src, &dst, overwrite);
        }

        if dest_is_dir {
            // Several sources into a directory, stopping at the first error.
            for source in sources {
                let src = resolve_file(source, ctx)?;
                let dst = format!("{dest}\\{}", path::file_name(&src));
                copy_path(ctx.volumes, &src, &dst, overwrite)?;
            }
            return Ok(());
        }

        // Several sources onto one file: concatenate.
        let mut resolved = Vec::with_capacity(sources.len());
        for source in sources {
            resolved.push(resolve_file(source, ctx)?);
        }
        append_files(ctx.volumes, &resolved, &dest)
    }
}

pub struct MoveCommand;

impl Handler for MoveCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "MOVE"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let mut overwrite = false;
        let mut path_args: Vec<&String> = Vec::new();
        for a in &args[1..] {
            if is_switch(a) {
                if wants_help(a) {
                    return CommandResult::output(MOVE_HELP);
                }
                if a.eq_ignore_ascii_case("/Y") || a.eq_ignore_ascii_case("-Y") {
                    overwrite = true;
                }
            } else {
                path_args.push(a);
            }
        }
        let [src_arg, dest_arg] = path_args[..] else {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        };

        let outcome = (|| {
            let src = resolve_file(src_arg, ctx)?;
            let mut dst = resolve_file(dest_arg, ctx)?;
            if is_existing_dir(ctx, &dst) {
                dst = format!("{dst}\\{}", path::file_name(&src));
            }
            move_path(ctx.volumes, &src, &dst, overwrite)
        })();
        match outcome {
            Ok(()) => CommandResult::none(),
            Err(err) => CommandResult::output(format!("{err}\n")),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
