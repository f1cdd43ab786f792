//! Spinner shown while a backend call is pending.

use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use super::context::UiContext;
use super::theme::spinner_frames;

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// A spinner for indeterminate progress, drawn on stderr.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    message: String,
    frame: usize,
}

impl<'a> Spinner<'a> {
    pub fn new(ctx: &'a UiContext, message: &str) -> Self {
        Self {
            ctx,
            message: message.to_string(),
            frame: 0,
        }
    }

    /// Advance to the next frame.
    pub fn tick(&mut self) {
        if !self.ctx.shows_spinner() {
            return;
        }
        let frames = spinner_frames(self.ctx.unicode);
        self.frame = (self.frame + 1) % frames.len();
        eprint!("\r\x1b[K{} {}...", frames[self.frame], self.message);
        let _ = io::stderr().flush();
    }

    /// Erase the spinner line.
    pub fn clear(&self) {
        if self.ctx.shows_spinner() {
            eprint!("\r\x1b[K");
            let _ = io::stderr().flush();
        }
    }
}

/// Drive `future` to completion, animating a spinner while it runs.
pub async fn with_spinner<F: Future>(ctx: &UiContext, message: &str, future: F) -> F::Output {
    if !ctx.shows_spinner() {
        return future.await;
    }
    let mut spinner = Spinner::new(ctx, message);
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    tokio::pin!(future);
    let output = loop {
        tokio::select! {
            output = &mut future => break output,
            _ = ticker.tick() => spinner.tick(),
        }
    };
    spinner.clear();
    output
}
