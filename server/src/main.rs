use clap::Parser;
use commands::Command;
use miette::{IntoDiagnostic, Result};
use tracing_common::setup_tracing;

mod commands;

mod http_server;

pub(crate) mod navigation;
mod state;
pub(crate) mod toasts;

pub(crate) use state::{AppConfig, AppState};

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()
        .into_diagnostic()?
        .block_on(async { _main().await })
}

async fn _main() -> Result<()> {
    setup_tracing(env!("CARGO_PKG_NAME"))?;

    let cli = CliArgs::parse();
    let command = cli.command.unwrap_or_default();

    command.run().await
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default() {
        let cli = CliArgs::parse_from(["recipe-web"]);

        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Serve(_)
        ));
    }

    #[test]
    fn port_flag() {
        let cli = CliArgs::parse_from(["recipe-web", "serve", "--port", "8080"]);

        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, 8080);
    }
}
