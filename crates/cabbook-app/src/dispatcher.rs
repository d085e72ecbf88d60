//! Dispatcher selection from configuration

use cabbook_domain::Dispatcher;
use cabbook_infra::{StdoutDispatcher, SystemDispatcher};
use tracing::debug;

use crate::config::{Config, DispatchMode};

/// Dispatcher picked for a booking run
#[derive(Debug, Clone)]
pub enum DispatcherChoice {
    Print(StdoutDispatcher),
    Launch(SystemDispatcher),
}

impl DispatcherChoice {
    pub fn mode(&self) -> DispatchMode {
        match self {
            DispatcherChoice::Print(_) => DispatchMode::Print,
            DispatcherChoice::Launch(_) => DispatchMode::Launch,
        }
    }

    pub fn into_dispatcher(self) -> Box<dyn Dispatcher> {
        match self {
            DispatcherChoice::Print(d) => Box::new(d),
            DispatcherChoice::Launch(d) => Box::new(d),
        }
    }
}

/// Pick the dispatcher the config asks for. `dry_run` forces printing.
pub fn select_dispatcher(config: &Config, dry_run: bool) -> DispatcherChoice {
    let mode = if dry_run {
        DispatchMode::Print
    } else {
        config.dispatch_mode
    };
    debug!(%mode, "selecting dispatcher");

    match mode {
        DispatchMode::Print => DispatcherChoice::Print(StdoutDispatcher),
        DispatchMode::Launch => match config.opener_command.as_deref() {
            Some(cmd) if !cmd.trim().is_empty() => {
                DispatcherChoice::Launch(SystemDispatcher::with_command(cmd))
            }
            _ => DispatcherChoice::Launch(SystemDispatcher::default()),
        },
    }
}

/// Build the dispatcher the config asks for. `dry_run` forces printing.
pub fn build_dispatcher(config: &Config, dry_run: bool) -> Box<dyn Dispatcher> {
    select_dispatcher(config, dry_run).into_dispatcher()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabbook_infra::dispatch::default_opener;

    fn launch_config(opener: Option<&str>) -> Config {
        Config {
            dispatch_mode: DispatchMode::Launch,
            opener_command: opener.map(str::to_string),
            ..Config::default()
        }
    }

    fn launch_program(choice: DispatcherChoice) -> (String, Vec<String>) {
        let DispatcherChoice::Launch(system) = choice else {
            panic!("expected launch dispatcher");
        };
        (system.program().to_string(), system.args().to_vec())
    }

    #[test]
    fn test_dry_run_overrides_launch() {
        let config = launch_config(Some("firefox --new-tab"));
        assert_eq!(select_dispatcher(&config, true).mode(), DispatchMode::Print);
        assert_eq!(select_dispatcher(&config, false).mode(), DispatchMode::Launch);
    }

    #[test]
    fn test_print_mode_from_config() {
        let config = Config {
            dispatch_mode: DispatchMode::Print,
            ..Config::default()
        };
        assert_eq!(select_dispatcher(&config, false).mode(), DispatchMode::Print);
    }

    #[test]
    fn test_configured_opener_used() {
        let (program, args) =
            launch_program(select_dispatcher(&launch_config(Some("firefox --new-tab")), false));
        assert_eq!(program, "firefox");
        assert_eq!(args, vec!["--new-tab".to_string()]);
    }

    #[test]
    fn test_blank_or_missing_opener_uses_platform_default() {
        let platform = default_opener();
        for opener in [Some("  "), None] {
            let (program, args) = launch_program(select_dispatcher(&launch_config(opener), false));
            assert_eq!(program, platform[0]);
            assert_eq!(args, platform[1..].to_vec());
        }
    }

    #[test]
    fn test_build_dispatcher_boxes_choice() {
        let config = Config {
            dispatch_mode: DispatchMode::Print,
            ..Config::default()
        };
        // printing dispatcher writes to stdout and returns nothing
        let dispatcher = build_dispatcher(&config, false);
        dispatcher.open_external("https://wa.me/1?text=hi");
        dispatcher.navigate("mailto:a@b?body=hi");
    }
}
