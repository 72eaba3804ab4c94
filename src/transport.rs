//! Dual-transport retrieval of a single remote file.
//!
//! Transport A is the content API with a raw media type; transport B is the
//! static mirror. B is only attempted after A is confirmed failed, and A's
//! error remains the primary cause when both fail.

use crate::{
    core::{
        PreviewsClient, PreviewsError,
        client::RAW_MEDIA_TYPE,
        net,
    },
    spec::RemoteSpec,
};

/// Fetch the raw text for `spec`, trying the content API first and the
/// static mirror second. One attempt per transport, no backoff.
pub async fn fetch_spec_text(
    client: &PreviewsClient,
    spec: &RemoteSpec,
) -> Result<String, PreviewsError> {
    let primary_err = match fetch_via_content_api(client, spec).await {
        Ok(text) => return Ok(text),
        Err(e) => e,
    };

    match fetch_via_raw_mirror(client, spec).await {
        Ok(text) => Ok(text),
        Err(mirror_err) => {
            tracing::debug!(spec = %spec, error = %mirror_err, "raw mirror fallback failed");
            Err(primary_err)
        }
    }
}

async fn fetch_via_content_api(
    client: &PreviewsClient,
    spec: &RemoteSpec,
) -> Result<String, PreviewsError> {
    let mut url = client.base_content_api().join(&format!(
        "repos/{}/{}/contents/{}",
        spec.owner, spec.repo, spec.path
    ))?;
    url.query_pairs_mut().append_pair("ref", &spec.git_ref);

    let resp = client.get_no_store(url, Some(RAW_MEDIA_TYPE)).await?;
    if !resp.status().is_success() {
        return Err(PreviewsError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(net::get_text(resp).await?)
}

async fn fetch_via_raw_mirror(
    client: &PreviewsClient,
    spec: &RemoteSpec,
) -> Result<String, PreviewsError> {
    let url = client.base_raw().join(&format!(
        "{}/{}/{}/{}",
        spec.owner, spec.repo, spec.git_ref, spec.path
    ))?;

    let resp = client.get_no_store(url, None).await?;
    if !resp.status().is_success() {
        return Err(PreviewsError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(net::get_text(resp).await?)
}
