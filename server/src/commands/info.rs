use std::fmt::Write;

use miette::{IntoDiagnostic, Result};

use crate::{navigation::Route, AppConfig};

pub(crate) fn print_info(port: u16) -> Result<()> {
    let config = AppConfig::from_env(port)?;

    println!("\n");
    println!("{}", describe(&config)?);

    Ok(())
}

fn describe(config: &AppConfig) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "API base URL: {}", config.api.base_url).into_diagnostic()?;
    writeln!(out, "Listening on: {}", config.bind).into_diagnostic()?;
    writeln!(
        out,
        "Single user: toasts and back/forward history are shared by every browser talking to this process"
    )
    .into_diagnostic()?;

    writeln!(out, "\nRoutes:").into_diagnostic()?;
    for (pattern, name) in Route::table() {
        writeln!(out, "{pattern:<16}{name}").into_diagnostic()?;
    }

    writeln!(out, "\nToasts:").into_diagnostic()?;
    out.push_str(&serde_json::to_string_pretty(&config.toasts).into_diagnostic()?);

    Ok(out)
}
