/// Fetch the marker feed body at `url`.
///
/// Decoding is left to `AttendanceSession::load_feed_body` so there is a single feed parser.
pub async fn fetch_marker_feed(url: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.text().await.map_err(|e| format!("read error: {e}"))
}
