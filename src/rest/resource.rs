//! The [`Resource`] trait shared by every DTO with its own envelope.
//!
//! Shopify wraps payloads in an object keyed by the resource name:
//!
//! ```text
//! GET  orders/450789469.json  ->  {"order":  {...}}
//! GET  orders.json            ->  {"orders": [{...}, ...]}
//! POST orders.json            <-  {"order":  {...}}
//! ```
//!
//! Implementing [`Resource`] names both keys once; the service helpers use
//! them for every request and response.
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::rest::Resource;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Widget {
//!     id: Option<u64>,
//! }
//!
//! impl Resource for Widget {
//!     const KEY: &'static str = "widget";
//!     const PLURAL: &'static str = "widgets";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! assert_eq!(Widget { id: Some(7) }.require_id().unwrap(), 7);
//! assert!(Widget { id: None }.require_id().is_err());
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::rest::ResourceError;

/// A Shopify resource with its own JSON envelope.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The envelope key for a single resource, e.g. `"order"`.
    const KEY: &'static str;

    /// The envelope key for a collection, e.g. `"orders"`.
    const PLURAL: &'static str;

    /// The server-assigned id, if any.
    fn id(&self) -> Option<u64> {
        None
    }

    /// Returns the id needed to address an existing resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no id yet.
    fn require_id(&self) -> Result<u64, ResourceError> {
        self.id()
            .ok_or(ResourceError::MissingId { resource: Self::KEY })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Thing;

    impl Resource for Thing {
        const KEY: &'static str = "thing";
        const PLURAL: &'static str = "things";
    }

    #[test]
    fn test_id_defaults_to_none() {
        assert_eq!(Thing.id(), None);
        assert!(matches!(
            Thing.require_id(),
            Err(ResourceError::MissingId { resource: "thing" })
        ));
    }
}
