//! Request helpers shared by every resource service.
//!
//! Each helper sends one request through [`RestClient`], maps transport
//! failures with [`ResourceError::from_rest_error`] and decodes the member
//! under the response envelope key.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::rest::Query;
use crate::clients::{HttpMethod, HttpResponse, RestClient};
use crate::rest::{to_query, Resource, ResourceError, ResourceResponse};

/// Serializes optional options into a query map.
pub(crate) fn query<P: Serialize>(options: Option<&P>) -> Result<Option<Query>, ResourceError> {
    options.map(to_query).transpose()
}

/// Wraps a payload as `{"key": payload}`.
pub(crate) fn envelope<T: Serialize + ?Sized>(key: &str, payload: &T) -> Result<Value, ResourceError> {
    let value = serde_json::to_value(payload).map_err(ResourceError::Serialize)?;
    let mut map = serde_json::Map::with_capacity(1);
    map.insert(key.to_string(), value);
    Ok(Value::Object(map))
}

async fn send(
    client: &RestClient,
    method: HttpMethod,
    path: &str,
    body: Option<Value>,
    query: Option<Query>,
) -> Result<HttpResponse, ResourceError> {
    let result = match method {
        HttpMethod::Get => client.get(path, query).await,
        HttpMethod::Post => {
            client
                .post(path, body.unwrap_or_else(empty_body), query)
                .await
        }
        HttpMethod::Put => client.put(path, body.unwrap_or_else(empty_body), query).await,
        HttpMethod::Delete => client.delete(path, query).await,
    };
    result.map_err(|e| ResourceError::from_rest_error(e, path))
}

fn empty_body() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Sends a request and decodes the member under `key`, ignoring `Link`.
///
/// POST and PUT without a body send `{}`.
pub(crate) async fn call<R: DeserializeOwned>(
    client: &RestClient,
    method: HttpMethod,
    path: &str,
    key: &str,
    body: Option<Value>,
    query: Option<Query>,
) -> Result<ResourceResponse<R>, ResourceError> {
    let response = send(client, method, path, body, query).await?;
    ResourceResponse::from_http_response(response, key)
}

/// GET a single value or a collection under an explicit key.
pub(crate) async fn fetch<R: DeserializeOwned>(
    client: &RestClient,
    path: &str,
    key: &str,
    query: Option<Query>,
) -> Result<ResourceResponse<R>, ResourceError> {
    call(client, HttpMethod::Get, path, key, None, query).await
}

/// GET a single value under an explicit key, without its metadata.
pub(crate) async fn get<R: DeserializeOwned>(
    client: &RestClient,
    path: &str,
    key: &str,
    query: Option<Query>,
) -> Result<R, ResourceError> {
    fetch(client, path, key, query)
        .await
        .map(ResourceResponse::into_inner)
}

/// GET a collection of `T` under its plural key.
pub(crate) async fn list<T: Resource>(
    client: &RestClient,
    path: &str,
    query: Option<Query>,
) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
    fetch(client, path, T::PLURAL, query).await
}

/// GET a page of `T` under its plural key, with cursors from the `Link`
/// header.
pub(crate) async fn page<T: Resource>(
    client: &RestClient,
    path: &str,
    query: Option<Query>,
) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
    let response = send(client, HttpMethod::Get, path, None, query).await?;
    ResourceResponse::from_page_response(response, T::PLURAL)
}

/// GET one `T` under its singular key.
pub(crate) async fn find<T: Resource>(
    client: &RestClient,
    path: &str,
    query: Option<Query>,
) -> Result<T, ResourceError> {
    get(client, path, T::KEY, query).await
}

/// GET a `{"count": n}` body.
pub(crate) async fn count(
    client: &RestClient,
    path: &str,
    query: Option<Query>,
) -> Result<u64, ResourceError> {
    get(client, path, "count", query).await
}

/// POST `{"key": payload}` and decode the `T` returned under the same key.
pub(crate) async fn create<T: Resource>(
    client: &RestClient,
    path: &str,
    payload: &T,
) -> Result<T, ResourceError> {
    let body = envelope(T::KEY, payload)?;
    call(client, HttpMethod::Post, path, T::KEY, Some(body), None)
        .await
        .map(ResourceResponse::into_inner)
}

/// PUT `{"key": payload}` and decode the `T` returned under the same key.
pub(crate) async fn update<T: Resource>(
    client: &RestClient,
    path: &str,
    payload: &T,
) -> Result<T, ResourceError> {
    let body = envelope(T::KEY, payload)?;
    call(client, HttpMethod::Put, path, T::KEY, Some(body), None)
        .await
        .map(ResourceResponse::into_inner)
}

/// POST a body and decode the `T` returned under its singular key.
pub(crate) async fn action<T: Resource>(
    client: &RestClient,
    path: &str,
    body: Option<Value>,
    query: Option<Query>,
) -> Result<T, ResourceError> {
    call(client, HttpMethod::Post, path, T::KEY, body, query)
        .await
        .map(ResourceResponse::into_inner)
}

/// DELETE, ignoring the response body.
pub(crate) async fn delete(
    client: &RestClient,
    path: &str,
    query: Option<Query>,
) -> Result<(), ResourceError> {
    send(client, HttpMethod::Delete, path, None, query)
        .await
        .map(|_| ())
}
