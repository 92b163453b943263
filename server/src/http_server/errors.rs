use std::fmt::{Debug, Display};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use miette::{Diagnostic, NarratableReportHandler, ReportHandler};
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[error("{context}")]
#[diagnostic(code(recipe_web::upstream))]
pub(crate) struct UpstreamError {
    context: &'static str,
    #[source]
    source: reqwest::Error,
}

#[derive(Diagnostic, Error)]
pub struct MietteError(pub(crate) miette::Report, pub(crate) StatusCode);

impl MietteError {
    /// A call to the recipes backend went wrong. The backend's status isn't
    /// ours to return, so this is always a 502.
    pub(crate) fn upstream(source: reqwest::Error, context: &'static str) -> Self {
        MietteError(
            miette::Report::new(UpstreamError { context, source }),
            StatusCode::BAD_GATEWAY,
        )
    }
}

impl Display for MietteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handler = NarratableReportHandler::new();

        handler.debug(self.0.as_ref(), f)
    }
}

impl Debug for MietteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handler = NarratableReportHandler::new();

        f.write_fmt(format_args!("Status Code: {}", self.1))?;
        f.write_str("MietteError: \n")?;

        handler.debug(self.0.as_ref(), f)
    }
}

impl IntoResponse for MietteError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self, "MietteError");

        (self.1, self.0.to_string()).into_response()
    }
}

impl From<miette::Report> for MietteError {
    fn from(err: miette::Report) -> Self {
        MietteError(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}
