//! DATE and TIME.

use super::{CommandContext, CommandResult, Handler, is_switch, wants_help};
use crate::core::state::PromptKind;

const DATE_HELP: &str = "Displays or sets the date.\n\n\
DATE [/T | date]\n\n\
Type DATE without parameters to display the current date setting and a\n\
prompt for a new one. Press ENTER to keep the same date.\n\n\
  /T   Displays the current date without prompting.\n";

const TIME_HELP: &str = "Displays or sets the system time.\n\n\
TIME [/T | time]\n\n\
Type TIME with no parameters to display the current time setting and a\n\
prompt for a new one. Press ENTER to keep the same time.\n\n\
  /T   Displays the current time without prompting.\n";

pub struct DateCommand;

impl Handler for DateCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "DATE"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        match args.get(1) {
            Some(arg) if wants_help(arg) => CommandResult::output(DATE_HELP),
            Some(arg) if is_switch(arg) && super::switch_letter(arg) == Some('T') => {
                CommandResult::output(format!("The current date is: {}\n", ctx.clock.date_string()))
            }
            Some(arg) => {
                if ctx.clock.set_date_from_str(arg) {
                    CommandResult::none()
                } else {
                    CommandResult::output("The system cannot accept the date entered.\n")
                }
            }
            None => {
                ctx.state.pending = Some(PromptKind::Date);
                CommandResult::PromptFor {
                    kind: PromptKind::Date,
                    message: format!(
                        "The current date is: {}\nEnter the new date: (yy-mm-dd) ",
                        ctx.clock.date_string()
                    ),
                }
            }
        }
    }
}

pub struct TimeCommand;

impl Handler for TimeCommand {
    fn matches(&self, cmd: &str) -> bool {
        cmd == "TIME"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext) -> CommandResult {
        match args.get(1) {
            Some(arg) if wants_help(arg) => CommandResult::output(TIME_HELP),
            Some(arg) if is_switch(arg) && super::switch_letter(arg) == Some('T') => {
                CommandResult::output(format!("The current time is: {}\n", ctx.clock.time_string()))
            }
            Some(arg) => {
                if ctx.clock.set_time_from_str(arg) {
                    CommandResult::none()
                } else {
                    CommandResult::output("The system cannot accept the time entered.\n")
                }
            }
            None => {
                ctx.state.pending = Some(PromptKind::Time);
                CommandResult::PromptFor {
                    kind: PromptKind::Time,
                    message: format!(
                        "The current time is: {}\nEnter the new time: ",
                        ctx.clock.time_string()
                    ),
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
