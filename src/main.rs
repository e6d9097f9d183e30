mod editor;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::warn;

use dosterm::config::Config;
use dosterm::core::Shell;
use dosterm::core::commands::{CommandResult, ShutdownMode};
use dosterm::core::state::ColorAttribute;

/// DOS-like command shell over mounted storage volumes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Host directory backing the drive tree.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Drive to start on.
    #[arg(long)]
    drive: Option<String>,

    /// Configuration file (defaults to dosterm.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("dosterm: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let root = args.root.unwrap_or_else(|| PathBuf::from(&config.root));
    let drive = args.drive.unwrap_or_else(|| config.drive.clone());

    let mut shell = Shell::new(root.clone(), &drive);
    if let Some(pair) = &config.color {
        match ColorAttribute::from_hex_pair(pair) {
            Some(color) => shell.state_mut().color = color,
            None => warn!("ignoring invalid color attribute {pair:?} from config"),
        }
    }

    let stdin = io::stdin();
    let mut out = io::stdout();
    let mut line = String::new();
    loop {
        if shell.state().echo {
            write!(out, "{}{}", sgr(shell.state().color), shell.prompt())?;
            out.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match shell.submit_line(line.trim_end_matches(['\r', '\n'])) {
            CommandResult::Output(text) => write!(out, "{text}")?,
            CommandResult::ClearScreen => {
                write!(out, "\x1B[2J\x1B[1;1H")?;
                out.flush()?;
            }
            CommandResult::Exit => break,
            CommandResult::PromptFor { message, .. } => {
                write!(out, "{message}")?;
                out.flush()?;
                line.clear();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                let reply = shell.submit_line(line.trim_end_matches(['\r', '\n']));
                if let CommandResult::Output(text) = reply {
                    write!(out, "{text}")?;
                }
            }
            CommandResult::Edit { path } => {
                editor::run(shell.volumes(), &path, &mut stdin.lock(), &mut out)?;
            }
            CommandResult::Shutdown(ShutdownMode::WarmReboot) => {
                write!(out, "\x1B[2J\x1B[1;1H")?;
                shell = Shell::new(root.clone(), &drive);
            }
            CommandResult::Shutdown(ShutdownMode::PowerOff) => {
                writeln!(out, "Shutting down.")?;
                break;
            }
            CommandResult::Shutdown(ShutdownMode::Reboot) => {
                writeln!(out, "Rebooting.")?;
                break;
            }
        }
    }
    write!(out, "\x1B[0m")?;
    out.flush()?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => {
            let default = Path::new("dosterm.toml");
            if default.exists() {
                Ok(Config::load(default)?)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// ANSI escape for a console color attribute. The console palette orders
/// colors blue-green-red; ANSI orders them red-green-blue, hence the table.
fn sgr(color: ColorAttribute) -> String {
    const ANSI: [u8; 8] = [0, 4, 2, 6, 1, 5, 3, 7];
    let fg = color.foreground();
    let bg = color.background();
    let fg_base: u8 = if fg & 0x8 != 0 { 90 } else { 30 };
    let bg_base: u8 = if bg & 0x8 != 0 { 100 } else { 40 };
    let fg_code = fg_base + ANSI[(fg & 0x7) as usize];
    let bg_code = bg_base + ANSI[(bg & 0x7) as usize];
    format!("\x1B[{fg_code};{bg_code}m")
}

// ============================================================================
// Tests
// ============================================================================
