use reqwest::Url;

use crate::error::RpcError;

/// Validate that `endpoint` is an HTTP(S) URL and return it parsed.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, RpcError> {
    let parsed = Url::parse(endpoint).map_err(|e| RpcError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason: format!("expected HTTP(S) URL ({e})"),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(RpcError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: format!("unsupported endpoint scheme `{other}`; expected http or https"),
        }),
    }
}
