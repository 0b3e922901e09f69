use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VisitorCountResponse {
    count: u64,
}

/// One-shot, best-effort fetch of the aggregate visitor count.
///
/// Non-critical telemetry: any network failure, non-2xx status, or
/// undecodable body is logged and reported as `None`, never as an error.
/// No retry.
pub async fn fetch_visitor_count(client: &reqwest::Client, api_base: &str) -> Option<u64> {
    let url = format!("{}/visitor-count", api_base.trim_end_matches('/'));

    tracing::debug!("Fetching visitor count from {}", url);
    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            match response.json::<VisitorCountResponse>().await {
                Ok(body) => Some(body.count),
                Err(e) => {
                    tracing::warn!("Failed to decode visitor count response: {}", e);
                    None
                }
            }
        }
        Ok(response) => {
            tracing::warn!("Visitor count request returned {}", response.status());
            None
        }
        Err(e) => {
            tracing::warn!("Failed to fetch visitor count: {}", e);
            None
        }
    }
}
