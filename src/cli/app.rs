//! App runners for the showcase and single sends

use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::application::{SendInput, SendNotificationUseCase};
use crate::domain::config::{AppConfig, DesktopConfig};
use crate::domain::platform::{OverflowPolicy, Platform};
use crate::infrastructure::{create_renderer, StdoutSink, XdgConfigStore};

use super::args::{Cli, DemoArgs, SendArgs};
use super::presenter::Presenter;
use super::showcase::Showcase;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Pick the config store: an explicit file, or the XDG default
pub fn config_store(cli: &Cli) -> XdgConfigStore {
    match &cli.config_file {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    }
}

/// Config values given as global flags
pub fn cli_config(cli: &Cli) -> AppConfig {
    let desktop = if cli.width.is_some() || cli.overflow.is_some() {
        Some(DesktopConfig {
            width: cli.width,
            overflow: cli
                .overflow
                .map(|o| OverflowPolicy::from(o).to_string()),
        })
    } else {
        None
    };

    AppConfig {
        platform: None,
        color: if cli.no_color { Some(false) } else { None },
        desktop,
    }
}

/// Merge: defaults < file < cli.
/// An unreadable config file is reported and skipped; the store warns about
/// and drops out-of-range `[desktop]` values, so those fall back to defaults.
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, path = %store.path().display(), "ignoring config file");
        AppConfig::empty()
    });

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Run the showcase, printing rendered notifications to stdout
pub fn run_demo(args: DemoArgs, config: &AppConfig, presenter: &Presenter) -> ExitCode {
    let sink = Arc::new(StdoutSink::new());
    let showcase = Showcase::new(presenter, &config.render_settings(), sink);
    let report = showcase.run(args);

    presenter.success(&format!("{} notifications sent", report.total()));
    ExitCode::from(EXIT_SUCCESS)
}

/// Send one notification on the requested (or configured) platform
pub fn run_send(args: SendArgs, config: &AppConfig, presenter: &Presenter) -> ExitCode {
    let platform = args
        .platform
        .map(Platform::from)
        .unwrap_or_else(|| config.platform_or_default());

    let renderer = create_renderer(
        platform,
        &config.render_settings(),
        Arc::new(StdoutSink::new()),
    );
    let use_case = SendNotificationUseCase::new(renderer);

    let input = SendInput {
        kind: args.kind.into(),
        title: args.title,
        content: args.content,
        media_url: args.media,
    };

    match use_case.execute(input) {
        Ok(output) => {
            tracing::debug!(
                platform = %output.platform,
                kind = %output.kind,
                media_passed = output.media_passed,
                "notification sent"
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}
