//! DEL/ERASE and RD/RMDIR.

use super::{CommandContext, CommandResult, Handler, is_switch, switch_value, wants_help};
use crate::core::error::FsError;
use crate::core::fs::delete::delete_path;
use crate::core::fs::tree::remove_dir;
use crate::core::path;

const DEL_HELP: &str = "Deletes one or more files.\n\n\
DEL [/F] [/S] [/Q] [/A[:]attributes] names\n\
ERASE [/F] [/S] [/Q] [/A[:]attributes] names\n\n\
  names           One or more files or directories. Wildcards may be used\n\
                  to delete multiple files. A directory deletes all files\n\
                  inside it.\n\
  /F              Force deletion of read-only files.\n\
  /S              Delete matching files from all subdirectories, listing\n\
                  each deleted file.\n\
  /Q              Quiet mode.\n\
  /A[:]attributes D=Dir R=Read-only H=Hidden A=Archive S=System;\n\
                  - prefix excludes.\n";

const RMDIR_HELP: &str = "Removes (deletes) a directory.\n\n\
RMDIR [/S] [/Q] [drive:]path\n\
RD [/S] [/Q] [drive:]path\n\n\
  /S   Removes the directory and all files and subdirectories in it.\n\
  /Q   Quiet mode.\n";

pub struct DelCommand;

impl Handler for DelCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "DEL" || cmd == "ERASE"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let mut recursive = false;
        let mut force = false;
        let mut attrib = String::new();
        let mut names: Vec<String> = Vec::new();

        let mut i = 1;
        while i < args.len() {
            let a = &args[i];
            if is_switch(a) {
                if wants_help(a) {
                    return CommandResult::output(DEL_HELP);
                }
                match super::switch_letter(a) {
                    Some('S') => recursive = true,
                    Some('F') => force = true,
                    Some('Q') => {}
                    Some('A') => attrib = switch_value(args, &mut i).to_uppercase(),
                    _ => {}
                }
            } else {
                names.push(a.clone());
            }
            i += 1;
        }
        if names.is_empty() {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        }

        let mut output = String::new();
        for name in &names {
            let resolved = path::resolve(name, &ctx.state.current_dir, ctx.volumes)
                .and_then(|p| delete_path(ctx.volumes, &p, recursive, force, &attrib, recursive));
            match resolved {
                Ok(lines) => output.push_str(&lines),
                Err(err) => {
                    // A failure discards anything already reported.
                    output = format!("{err}\n");
                    break;
                }
            }
        }
        CommandResult::output(output)
    }
}

pub struct RmdirCommand;

impl Handler for RmdirCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "RMDIR" || cmd == "RD"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        let mut remove_tree = false;
        let mut dir_arg: Option<&String> = None;
        for a in &args[1..] {
            if is_switch(a) {
                if wants_help(a) {
                    return CommandResult::output(RMDIR_HELP);
                }
                if super::switch_letter(a) == Some('S') {
                    remove_tree = true;
                }
            } else if dir_arg.is_none() {
                dir_arg = Some(a);
            }
        }
        let Some(arg) = dir_arg else {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        };
        if arg == "." || arg == ".." {
            return CommandResult::output(format!("{}\n", FsError::Syntax));
        }
        let outcome = path::resolve(arg, &ctx.state.current_dir, ctx.volumes)
            .and_then(|dir| remove_dir(ctx.volumes, &dir, remove_tree));
        match outcome {
            Ok(()) => CommandResult::none(),
            Err(err) => CommandResult::output(format!("{err}\n")),
        }
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

    fn run(line: &str, tmp: &TempRoot) -> String {
        let volumes = tmp.volumes();
        let mut state = ShellState::new("HDD0-E\\".to_string());
        let clock = ShellClock::new();
        let mut ctx = CommandContext {
            state: &mut state,
            volumes: &volumes,
            clock: &clock,
        };
        match dispatch(&parse_line(line), &mut ctx) {
            CommandResult::Output(out) => out,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    fn fixture() -> TempRoot {
        let tmp = TempRoot::new("del-cmd");
        tmp.mkdrive("HDD0-E");
        tmp.write("HDD0-E/a.txt", "a");
        tmp.write("HDD0-E/b.txt", "b");
        tmp.write("HDD0-E/keep.log", "k");
        tmp.write("HDD0-E/sub/c.txt", "c");
        tmp
    }

    #[test]
    fn test_del_single_file_is_silent() {
        let tmp = fixture();
        assert_eq!(run("DEL a.txt", &tmp), "");
        assert!(!tmp.0.join("HDD0-E/a.txt").exists());
    }

    #[test]
    fn test_del_wildcard() {
        let tmp = fixture();
        assert_eq!(run("DEL *.txt", &tmp), "");
        assert!(!tmp.0.join("HDD0-E/a.txt").exists());
        assert!(tmp.0.join("HDD0-E/keep.log").exists());
        assert!(tmp.0.join("HDD0-E/sub/c.txt").exists());
    }

    #[test]
    fn test_del_recursive_reports_names() {
        let tmp = fixture();
        let out = run("DEL /S *.txt", &tmp);
        let mut lines: Vec<&str> = out.lines().collect();
        lines.sort();
        assert_eq!(
            lines,
            vec!["HDD0-E\\a.txt", "HDD0-E\\b.txt", "HDD0-E\\sub\\c.txt"]
        );
    }

    #[test]
    fn test_del_missing_names_given_argument() {
        let tmp = fixture();
        assert_eq!(
            run("DEL nope.txt", &tmp),
            "Could Not Find HDD0-E\\nope.txt\n"
        );
    }

    #[test]
    fn test_del_error_replaces_earlier_output() {
        let tmp = fixture();
        let out = run("DEL a.txt nope.txt b.txt", &tmp);
        assert_eq!(out, "Could Not Find HDD0-E\\nope.txt\n");
        assert!(!tmp.0.join("HDD0-E/a.txt").exists());
        // The walk stops at the failure, so later names survive.
        assert!(tmp.0.join("HDD0-E/b.txt").exists());
    }

    #[test]
    fn test_del_without_names() {
        let tmp = fixture();
        assert_eq!(run("DEL", &tmp), "The syntax of the command is incorrect.\n");
    }

    #[test]
    fn test_rmdir_empty_and_nonempty() {
        let tmp = fixture();
        tmp.mkdir("HDD0-E/empty");
        assert_eq!(run("RMDIR empty", &tmp), "");
        assert!(!tmp.0.join("HDD0-E/empty").exists());
        assert_eq!(run("RD sub", &tmp), "The directory is not empty.\n");
        assert_eq!(run("RD /S sub", &tmp), "");
        assert!(!tmp.0.join("HDD0-E/sub").exists());
    }

    #[test]
    fn test_rmdir_rejects_dot_names() {
        let tmp = fixture();
        assert_eq!(
            run("RMDIR .", &tmp),
            "The syntax of the command is incorrect.\n"
        );
        assert_eq!(
            run("RMDIR ..", &tmp),
            "The syntax of the command is incorrect.\n"
        );
    }
}
