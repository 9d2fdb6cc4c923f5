use crate::error::FetchError;
use log::info;
use std::time::Duration;

// Bound on establishing the connection; the total request timeout is the
// caller's choice.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the remote archive payload into memory.
///
/// Issues a single GET request against `url` with a connect timeout and the
/// given total request timeout, so a stalled transfer surfaces as a fetch
/// failure instead of hanging the serving task. A non-2xx response status is
/// a failure. There is no retry; the caller aborts its collection run on any
/// error.
///
/// # Arguments
///
/// * `url` - URL of the zip archive to download.
/// * `timeout` - Total request timeout covering connect, transfer, and read.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The complete response payload.
/// * `Err(FetchError)` - Transport failure, timeout, or non-2xx status.
///
/// # Examples
///
/// ```rust,no_run
/// use archive_metadata::fetch::fetch_archive;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), archive_metadata::error::FetchError> {
///     let payload = fetch_archive(
///         "https://example.com/sample-files.zip",
///         Duration::from_secs(30),
///     ).await?;
///     println!("Fetched {} bytes", payload.len());
///     Ok(())
/// }
/// ```
pub async fn fetch_archive(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(timeout)
        .build()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let payload = resp
        .bytes()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    info!("Fetched {} byte archive from {}", payload.len(), url);
    Ok(payload.to_vec())
}
