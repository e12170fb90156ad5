//! Access scopes granted to the app on the current shop.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ResourceError};

/// One granted scope such as `read_orders`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccessScope {
    pub handle: String,
}

/// Reads `admin/oauth/access_scopes`, which lives outside the versioned API
/// path.
#[derive(Debug, Clone, Copy)]
pub struct AccessScopeService<'a> {
    client: &'a RestClient,
}

impl<'a> AccessScopeService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists the scopes granted to the calling app.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<AccessScope>, ResourceError> {
        service::get(
            self.client,
            "admin/oauth/access_scopes.json",
            "access_scopes",
            None,
        )
        .await
    }
}
