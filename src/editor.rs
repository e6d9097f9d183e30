//! Line-oriented text editor for the EDIT command.
//!
//! Deliberately modal and tiny: one command per input line, operating on a
//! numbered line buffer. The buffer is written back on `w`, and on `q` if it
//! still has unsaved changes.

use std::io::{self, BufRead, Write};

use dosterm::core::drives::Volumes;
use dosterm::core::fs::textfile::{self, MAX_EDIT_LINES};

const EDITOR_HELP: &str = "Editor commands:\n\
  p          Print the buffer with line numbers.\n\
  a TEXT     Append TEXT as a new last line.\n\
  i N TEXT   Insert TEXT before line N.\n\
  r N TEXT   Replace line N with TEXT.\n\
  d N        Delete line N.\n\
  w          Save.\n\
  q          Save if modified, then leave the editor.\n\
  h          This list.\n";

pub fn run(
    volumes: &Volumes,
    path: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let mut lines = match textfile::load_lines(volumes, path) {
        Ok(lines) => lines,
        Err(err) => {
            writeln!(output, "{err}")?;
            return Ok(());
        }
    };
    let mut dirty = false;

    writeln!(output, "Editing {path} ({} lines). h for help.", lines.len())?;
    loop {
        write!(output, "edit> ")?;
        output.flush()?;
        let mut raw = String::new();
        if input.read_line(&mut raw)? == 0 {
            break;
        }
        let trimmed = raw.trim_end_matches(['\r', '\n']);
        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest),
            None => (trimmed, ""),
        };
        match cmd.to_ascii_lowercase().as_str() {
            "" => {}
            "p" => {
                for (i, line) in lines.iter().enumerate() {
                    writeln!(output, "{:4}  {line}", i + 1)?;
                }
            }
            "a" => {
                if lines.len() >= MAX_EDIT_LINES {
                    writeln!(output, "Buffer is full.")?;
                } else {
                    lines.push(rest.to_string());
                    dirty = true;
                }
            }
            "i" => match split_numbered(rest, lines.len()) {
                Some((n, text)) => {
                    if lines.len() >= MAX_EDIT_LINES {
                        writeln!(output, "Buffer is full.")?;
                    } else {
                        lines.insert(n - 1, text.to_string());
                        dirty = true;
                    }
                }
                None => writeln!(output, "No such line.")?,
            },
            "r" => match split_numbered(rest, lines.len()) {
                Some((n, text)) => {
                    lines[n - 1] = text.to_string();
                    dirty = true;
                }
                None => writeln!(output, "No such line.")?,
            },
            "d" => match rest.trim().parse::<usize>() {
                Ok(n) if (1..=lines.len()).contains(&n) => {
                    lines.remove(n - 1);
                    if lines.is_empty() {
                        lines.push(String::new());
                    }
                    dirty = true;
                }
                _ => writeln!(output, "No such line.")?,
            },
            "w" => {
                save(volumes, path, &lines, &mut dirty, output)?;
            }
            "q" => {
                if dirty {
                    save(volumes, path, &lines, &mut dirty, output)?;
                }
                break;
            }
            "h" | "?" => write!(output, "{EDITOR_HELP}")?,
            other => writeln!(output, "Unknown editor command - {other}")?,
        }
    }
    Ok(())
}

/// Split `N TEXT`, validating the line number against the buffer.
fn split_numbered(rest: &str, len: usize) -> Option<(usize, &str)> {
    let (num, text) = match rest.split_once(' ') {
        Some((num, text)) => (num, text),
        None => (rest, ""),
    };
    let n: usize = num.trim().parse().ok()?;
    if (1..=len).contains(&n) { Some((n, text)) } else { None }
}

fn save(
    volumes: &Volumes,
    path: &str,
    lines: &[String],
    dirty: &mut bool,
    output: &mut impl Write,
) -> io::Result<()> {
    match textfile::save_lines(volumes, path, lines) {
        Ok(()) => {
            *dirty = false;
            writeln!(output, "Saved {path}")
        }
        Err(err) => writeln!(output, "{err}"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    struct TempRoot(PathBuf);

    impl TempRoot {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!("dosterm-{tag}-{}", std::process::id()));
            fs::create_dir_all(path.join("HDD0-E")).unwrap();
            Self(path)
        }

        fn write(&self, rel: &str, contents: &str) {
            fs::write(self.0.join(rel), contents).unwrap();
        }

        fn read(&self, rel: &str) -> String {
            fs::read_to_string(self.0.join(rel)).unwrap()
        }
    }

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn drive(tag: &str) -> TempRoot {
        TempRoot::new(tag)
    }

    fn session(tmp: &TempRoot, path: &str, script: &str) -> String {
        let volumes = Volumes::new(tmp.0.clone());
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&volumes, path, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_append_and_quit_saves() {
        let tmp = drive("edit-append");
        session(&tmp, "HDD0-E\\note.txt", "a hello\na world\nq\n");
        assert_eq!(tmp.read("HDD0-E/note.txt"), "\r\nhello\r\nworld\r\n");
    }

    #[test]
    fn test_replace_and_delete() {
        let tmp = drive("edit-replace");
        tmp.write("HDD0-E/note.txt", "one\ntwo\nthree\n");
        session(&tmp, "HDD0-E\\note.txt", "r 2 TWO\nd 3\nq\n");
        assert_eq!(tmp.read("HDD0-E/note.txt"), "one\r\nTWO\r\n");
    }

    #[test]
    fn test_print_shows_numbers() {
        let tmp = drive("edit-print");
        tmp.write("HDD0-E/note.txt", "alpha\nbeta\n");
        let out = session(&tmp, "HDD0-E\\note.txt", "p\nq\n");
        assert!(out.contains("   1  alpha"));
        assert!(out.contains("   2  beta"));
    }

    #[test]
    fn test_bad_line_numbers_rejected() {
        let tmp = drive("edit-badline");
        tmp.write("HDD0-E/note.txt", "only\n");
        let out = session(&tmp, "HDD0-E\\note.txt", "r 9 nope\nd 0\nq\n");
        assert_eq!(out.matches("No such line.").count(), 2);
        assert_eq!(tmp.read("HDD0-E/note.txt"), "only\n");
    }

    #[test]
    fn test_eof_leaves_file_untouched_when_clean() {
        let tmp = drive("edit-eof");
        tmp.write("HDD0-E/note.txt", "keep\n");
        session(&tmp, "HDD0-E\\note.txt", "p\n");
        assert_eq!(tmp.read("HDD0-E/note.txt"), "keep\n");
    }
}
