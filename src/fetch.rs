// Directory Fetcher: downloads the raw player directory and stores it
// verbatim. No transformation happens here; the pipeline reads this file.

use std::path::Path;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch player directory from {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("failed to write player directory to {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// GET the player directory endpoint and write the response body unmodified.
///
/// The file is only written after the entire body has been received, so a
/// network failure leaves any previous directory file untouched.
pub async fn fetch_directory(url: &str, out_path: &Path) -> Result<(), FetchError> {
    info!("fetching player directory from {url}");

    let http_err = |e: reqwest::Error| FetchError::Http {
        url: url.to_string(),
        source: e,
    };
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(http_err)?;
    let body = response.text().await.map_err(http_err)?;

    let io_err = |e: std::io::Error| FetchError::Io {
        path: out_path.display().to_string(),
        source: e,
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    std::fs::write(out_path, &body).map_err(io_err)?;

    info!("wrote {} bytes to {}", body.len(), out_path.display());
    Ok(())
}
