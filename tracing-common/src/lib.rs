use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::{prelude::*, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

pub fn default_filter(crate_name: &str) -> String {
    let target = crate_name.replace('-', "_");

    format!("warn,{target}=trace,recipe_api=debug,tower_http=debug")
}

pub fn setup_tracing(crate_name: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(crate_name));

    let env_filter = EnvFilter::builder()
        .parse(&rust_log)
        .into_diagnostic()
        .wrap_err_with(|| miette::miette!("Couldn't create env filter from {}", rust_log))?;

    let heirarchical = HierarchicalLayer::default()
        .with_writer(std::io::stdout)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_thread_names(true)
        .with_thread_ids(true)
        .with_verbose_exit(true)
        .with_verbose_entry(true)
        .with_targets(true);

    Registry::default()
        .with(heirarchical)
        .with(env_filter)
        .try_init()
        .into_diagnostic()?;

    tracing::debug!(filter = %rust_log, "Tracing initialized");

    Ok(())
}
