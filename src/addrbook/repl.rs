//! The interactive loop.
//!
//! Two states: running until `exit`/`close` or end of input, then terminated.
//! Leaving the loop always saves the book first; a failed save is the only
//! error that escapes.

use crate::api::BookApi;
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::store::BookStore;
use crate::ui::UserInterface;
use std::io::BufRead;
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

pub fn run<S, R, U>(api: &mut BookApi<S>, mut input: R, ui: &mut U) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    U: UserInterface,
{
    ui.show_message(&CmdMessage::info(WELCOME))?;
    ui.show_help()?;

    let mut buf = Vec::new();
    loop {
        ui.show_prompt(PROMPT)?;
        buf.clear();
        // Bytes that are not UTF-8 are replaced, never fatal.
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            // Keep the farewell on its own line after the dangling prompt.
            ui.show_message(&CmdMessage::info(""))?;
            api.save()?;
            ui.show_message(&CmdMessage::info(FAREWELL))?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let outcome = api.execute(&line);
        if outcome.exit {
            api.save()?;
            ui.show_result(&outcome.result)?;
            break;
        }
        ui.show_result(&outcome.result)?;
    }

    info!(contacts = api.book().len(), "session ended");
    Ok(())
}
