//! Interactive loop and one-shot script runner.
//!
//! Each line of input is a key script: it is folded through the session
//! character by character and the two display lines are printed once the
//! line is consumed. `copy` puts the current result line on the
//! clipboard, `quit` leaves.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::calculator::{DisplayFrame, Session};
use crate::ui::clipboard::copy_to_clipboard;
use crate::ui::keymap::{is_key_script, key_event};

/// Fold a key script through the session and return the final frame.
///
/// Unknown characters abort with an error instead of being skipped, so a
/// typo never silently computes something else. Whitespace is filler.
pub fn run_script(session: &mut Session, script: &str) -> Result<DisplayFrame> {
    if !is_key_script(script) {
        anyhow::bail!("not a key script: {script:?}");
    }
    let mut frame = session.render();
    for key in script.chars() {
        if key.is_whitespace() {
            continue;
        }
        let event = key_event(key).with_context(|| format!("no button bound to {key:?}"))?;
        frame = session.press(event);
    }
    Ok(frame)
}

/// Run the interactive two-line calculator on stdin/stdout.
pub fn run_interactive(session: &mut Session, copy_on_equals: bool) -> Result<()> {
    println!("deskcalc | keys: 0-9 . + - * / % n(±) d(del) c(clear) =   commands: copy, quit");
    print_frame(&session.render());

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let input = line.trim();
        match input {
            "quit" | "exit" | "q" => break,
            "copy" => {
                copy_result(&session.render());
                continue;
            }
            "" => {
                print_frame(&session.render());
                continue;
            }
            _ => {}
        }
        match run_script(session, input) {
            Ok(frame) => {
                if copy_on_equals && session.is_showing_result() {
                    copy_result(&frame);
                }
                print_frame(&frame);
            }
            Err(err) => println!("? {err}"),
        }
    }
    Ok(())
}

/// Print the two display lines the way the pocket calculator shows them.
pub fn print_frame(frame: &DisplayFrame) {
    println!("  {}", frame.expression);
    println!("= {}", frame.result);
}

fn copy_result(frame: &DisplayFrame) {
    if frame.result.is_empty() {
        println!("nothing to copy");
        return;
    }
    match copy_to_clipboard(&frame.result) {
        Ok(()) => debug!(result = %frame.result, "copied to clipboard"),
        Err(err) => warn!(%err, "clipboard copy failed"),
    }
}
