//! HTTP plumbing shared by every API wrapper.
//!
//! Client-side (hydrate): real calls via `gloo-net`, with the bearer token
//! applied explicitly per request. Server-side (SSR): every call fails with
//! [`ApiError::Unreachable`] since the API is only reachable from the
//! browser.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::remote;

/// Base path of the remote inventory API.
pub const API_BASE: &str = "/api";

/// Absolute URL for an API path.
pub fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(feature = "hydrate")]
fn builder(
    method: gloo_net::http::Method,
    path: &str,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    let b = gloo_net::http::RequestBuilder::new(&url(path)).method(method);
    match token {
        Some(token) => b.header("Authorization", &format!("Bearer {token}")),
        None => b,
    }
}

#[cfg(feature = "hydrate")]
async fn fail(path: &str, resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("API {path} a répondu {status}");
    remote(status, &body)
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(
    path: &str,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(fail(path, resp).await);
    }
    let status = resp.status();
    resp.json::<T>().await.map_err(|err| {
        log::error!("corps de réponse invalide pour {path}: {err}");
        ApiError::Remote {
            status,
            message: "corps de réponse invalide".to_owned(),
        }
    })
}

#[cfg(feature = "hydrate")]
async fn send(
    path: &str,
    b: gloo_net::http::RequestBuilder,
) -> Result<gloo_net::http::Response, ApiError> {
    b.send().await.map_err(|err| {
        log::error!("API {path} injoignable: {err}");
        ApiError::Unreachable
    })
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize>(
    path: &str,
    b: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = b.json(body).map_err(|err| {
        log::error!("sérialisation de la requête {path} impossible: {err}");
        ApiError::Unreachable
    })?;
    request.send().await.map_err(|err| {
        log::error!("API {path} injoignable: {err}");
        ApiError::Unreachable
    })
}

/// `GET path`, decoding a JSON body.
pub async fn get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(path, builder(gloo_net::http::Method::GET, path, token)).await?;
        decode(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unreachable)
    }
}

/// `POST path` with a JSON body, decoding a JSON response.
pub async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(path, builder(gloo_net::http::Method::POST, path, token), body).await?;
        decode(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unreachable)
    }
}

/// `POST path` with no body and no expected response body.
pub async fn post_no_content(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(path, builder(gloo_net::http::Method::POST, path, token)).await?;
        if resp.ok() { Ok(()) } else { Err(fail(path, resp).await) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unreachable)
    }
}

/// `PUT path` with a JSON body, decoding a JSON response.
pub async fn put<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(path, builder(gloo_net::http::Method::PUT, path, token), body).await?;
        decode(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unreachable)
    }
}

/// `PUT path` with no body, decoding a JSON response (status toggles).
pub async fn put_no_body<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(path, builder(gloo_net::http::Method::PUT, path, token)).await?;
        decode(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unreachable)
    }
}

/// `PATCH path` with a JSON body, decoding a JSON response.
pub async fn patch<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            send_json(path, builder(gloo_net::http::Method::PATCH, path, token), body).await?;
        decode(path, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unreachable)
    }
}

/// `PATCH path` with a JSON body and no expected response body.
pub async fn patch_no_content<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            send_json(path, builder(gloo_net::http::Method::PATCH, path, token), body).await?;
        if resp.ok() { Ok(()) } else { Err(fail(path, resp).await) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unreachable)
    }
}

/// `DELETE path` with no expected response body.
pub async fn delete(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(path, builder(gloo_net::http::Method::DELETE, path, token)).await?;
        if resp.ok() { Ok(()) } else { Err(fail(path, resp).await) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unreachable)
    }
}
