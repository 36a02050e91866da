use super::relay::{RelayError, RelayReply, RelayRequest};
#[cfg(feature = "hydrate")]
use super::relay::RelayBody;

/// Delivers a [`RelayRequest`] and hands back the raw reply.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &RelayRequest) -> Result<RelayReply, RelayError>;
}

/// `fetch` from the browser. On the server there is nothing to send with.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: &RelayRequest) -> Result<RelayReply, RelayError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = Request::post(&request.endpoint).header("Accept", "application/json");
            let req = match &request.body {
                RelayBody::Json(value) => builder.json(value),
                RelayBody::Multipart(parts) => {
                    let form = web_sys::FormData::new()
                        .map_err(|e| RelayError::Encode(format!("{e:?}")))?;
                    for (name, value) in parts {
                        form.append_with_str(name, value)
                            .map_err(|e| RelayError::Encode(format!("{e:?}")))?;
                    }
                    builder.body(form)
                }
            }
            .map_err(|e| RelayError::Encode(e.to_string()))?;

            let resp = req
                .send()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;
            Ok(RelayReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(RelayError::Unavailable)
        }
    }
}
