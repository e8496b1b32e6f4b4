//! Progress indication for awaited network calls

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a single gateway request is outstanding.
///
/// The triggering control stays disabled for the spinner's lifetime, so
/// there is never more than one request in flight per transition.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start a spinner with the given message. `quiet` suppresses it.
    pub fn start(message: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Stop the spinner and clear the line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_inert() {
        let spinner = Spinner::start("saving", true);
        assert!(spinner.bar.is_none());
        spinner.finish();
    }
}
