use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod comments;
mod util;

pub use self::comments::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] portfolio_boundary::Error),

    #[error("Unexpected response: {0}")]
    Conversion(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<portfolio_boundary::ConversionError> for Error {
    fn from(err: portfolio_boundary::ConversionError) -> Self {
        Self::Conversion(err.to_string())
    }
}

async fn into_api_error(response: Response) -> Error {
    let http_status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_owned(),
        _ => response.status_text(),
    };
    portfolio_boundary::Error {
        http_status,
        message,
    }
    .into()
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(into_api_error(response).await)
    }
}

pub async fn into_text(response: Response) -> Result<String> {
    if response.ok() {
        Ok(response.text().await?)
    } else {
        Err(into_api_error(response).await)
    }
}

/// Only checks the status, the body is ignored.
pub async fn into_unit(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(into_api_error(response).await)
    }
}
