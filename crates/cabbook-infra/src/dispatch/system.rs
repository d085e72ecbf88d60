//! Dispatcher that hands links to the desktop opener

use std::process::{Command, Stdio};

use cabbook_domain::Dispatcher;
use tracing::{debug, warn};

/// Platform command that opens a URI in its default handler
pub fn default_opener() -> Vec<String> {
    let parts: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(target_os = "windows") {
        &["rundll32", "url.dll,FileProtocolHandler"]
    } else {
        &["xdg-open"]
    };
    parts.iter().map(|s| s.to_string()).collect()
}

/// Launches links through an opener command.
///
/// A desktop opener has no notion of tabs, so both channels spawn the same
/// command; the browser decides whether the messaging link gets a new tab.
#[derive(Debug, Clone)]
pub struct SystemDispatcher {
    program: String,
    args: Vec<String>,
}

impl Default for SystemDispatcher {
    fn default() -> Self {
        Self::from_parts(default_opener())
    }
}

impl SystemDispatcher {
    /// Use a custom opener command line (e.g. "firefox --new-tab").
    ///
    /// Falls back to the platform opener when the command is empty or
    /// cannot be split.
    pub fn with_command(cmd_str: &str) -> Self {
        match shell_words::split(cmd_str) {
            Ok(parts) if !parts.is_empty() => Self::from_parts(parts),
            _ => {
                warn!("opener command is invalid, using platform default: {}", cmd_str);
                Self::default()
            }
        }
    }

    fn from_parts(mut parts: Vec<String>) -> Self {
        let program = parts.remove(0);
        Self {
            program,
            args: parts,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn launch(&self, channel: &str, uri: &str) {
        debug!(channel, program = %self.program, "launching {}", uri);

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        // The child is not awaited; a dropped handle leaves it running.
        if let Err(err) = spawned {
            warn!(channel, program = %self.program, "failed to launch opener: {}", err);
        }
    }
}

impl Dispatcher for SystemDispatcher {
    fn open_external(&self, uri: &str) {
        self.launch("messaging", uri);
    }

    fn navigate(&self, uri: &str) {
        self.launch("mail", uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_command_splits_args() {
        let dispatcher = SystemDispatcher::with_command("firefox --new-tab");
        assert_eq!(dispatcher.program(), "firefox");
        assert_eq!(dispatcher.args(), &["--new-tab".to_string()]);
    }

    #[test]
    fn test_quoted_command() {
        let dispatcher = SystemDispatcher::with_command("'/opt/My Browser/bin' -p default");
        assert_eq!(dispatcher.program(), "/opt/My Browser/bin");
        assert_eq!(dispatcher.args().len(), 2);
    }

    #[test]
    fn test_invalid_command_falls_back() {
        let dispatcher = SystemDispatcher::with_command("   ");
        assert_eq!(dispatcher.program(), default_opener()[0]);

        let dispatcher = SystemDispatcher::with_command("open 'unterminated");
        assert_eq!(dispatcher.program(), default_opener()[0]);
    }

    #[test]
    fn test_missing_program_is_silent() {
        let dispatcher = SystemDispatcher::with_command("cabbook-no-such-opener-binary");
        dispatcher.open_external("https://wa.me/1?text=hi");
        dispatcher.navigate("mailto:a@b?body=hi");
    }
}
