//! NotifyBridge CLI entry point

use std::process::ExitCode;

use clap::Parser;

use notify_bridge::cli::{
    app::{cli_config, config_store, load_merged_config},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    run_demo, run_send, EXIT_ERROR, EXIT_SUCCESS,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = config_store(&cli);
    let config = load_merged_config(&store, cli_config(&cli)).await;
    let presenter = Presenter::with_color(config.color_or_default());

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Some(Commands::Send(args)) => run_send(args, &config, &presenter),
        Some(Commands::Demo(args)) => run_demo(args, &config, &presenter),
        None => run_demo(Default::default(), &config, &presenter),
    }
}
