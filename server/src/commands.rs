use clap::{Args, Subcommand};
use miette::Result;

use crate::AppConfig;

pub(crate) mod info;

#[derive(Args, Debug, Clone)]
pub(crate) struct ServeArgs {
    /// Port to listen on, on all interfaces
    #[arg(long, default_value_t = AppConfig::DEFAULT_PORT)]
    pub(crate) port: u16,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: AppConfig::DEFAULT_PORT,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    Serve(ServeArgs),
    Info(ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(ServeArgs::default())
    }
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve(args) => crate::http_server::cmd::serve(args.port).await,
            Command::Info(args) => info::print_info(args.port),
        }
    }
}
