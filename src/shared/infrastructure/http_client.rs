use reqwest::Client;
use std::time::Duration;

const CONNECT_TIMEOUT_CAP: Duration = Duration::from_secs(5);

/// Outbound client shared by every adapter. No request outlives `timeout`,
/// so background channels always finish.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(CONNECT_TIMEOUT_CAP))
        .build()
}
