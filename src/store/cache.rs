// In-memory resource store.
// Caches records per resource, keyed by primary-key value, and tracks
// per-resource loading/error state for UI consumption.

use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::api::ApiClient;
use crate::error::{Result, SbwmError};
use crate::resource::Resource;

use super::key::CacheKey;

/// One cached collection: records keyed by primary-key value.
pub type Collection = BTreeMap<CacheKey, Value>;

/// Keyed cache over all resources, backed by the API client.
///
/// Actions (`fetch_all`, `fetch_one`, `save`) go through the network and
/// merge results into the cache; getters read the cache synchronously.
/// Errors are recorded per resource and re-thrown for the caller to handle.
pub struct ResourceStore {
    client: ApiClient,
    collections: HashMap<Resource, Collection>,
    loading: HashMap<Resource, bool>,
    errors: HashMap<Resource, Option<String>>,
}

impl ResourceStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            collections: HashMap::new(),
            loading: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    /// The underlying API client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Fetch all records of a resource and replace its cached collection.
    pub async fn fetch_all(&mut self, resource: Resource) -> Result<Vec<Value>> {
        self.begin(resource);
        let result = self.client.list(resource).await;
        self.loading.insert(resource, false);

        let rows = match result {
            Ok(rows) => rows,
            Err(err) => return Err(self.record_error(resource, err)),
        };

        let key_field = resource.primary_key();
        let mut collection = Collection::new();
        for row in &rows {
            match row.get(key_field).and_then(CacheKey::from_value) {
                Some(key) => {
                    collection.insert(key, row.clone());
                }
                None => warn!(%resource, key_field, "skipping row without usable primary key"),
            }
        }
        self.collections.insert(resource, collection);

        Ok(rows)
    }

    /// Fetch a single record and merge it into the cached collection.
    pub async fn fetch_one(
        &mut self,
        resource: Resource,
        key: impl Into<CacheKey>,
    ) -> Result<Value> {
        let key = key.into();
        self.begin(resource);
        let result = self.client.get_one(resource, &key).await;
        self.loading.insert(resource, false);

        let row = match result {
            Ok(row) => row,
            Err(err) => return Err(self.record_error(resource, err)),
        };

        // Index by the key the server reports; fall back to the requested
        // key when the row does not carry its key field.
        let cache_key = row
            .get(resource.primary_key())
            .and_then(CacheKey::from_value)
            .unwrap_or(key);
        self.collections
            .entry(resource)
            .or_default()
            .insert(cache_key, row.clone());

        Ok(row)
    }

    /// Create or update a record where allowed, merging the saved record
    /// into the cache. Read-only view resources are rejected before any
    /// HTTP happens.
    pub async fn save(&mut self, resource: Resource, payload: &Value) -> Result<Value> {
        if resource.read_only() {
            return Err(SbwmError::ReadOnly(resource));
        }

        self.begin(resource);
        let result = self.client.upsert(resource, payload).await;
        self.loading.insert(resource, false);

        let saved = match result {
            Ok(saved) => saved,
            Err(err) => return Err(self.record_error(resource, err)),
        };

        // The saved record must carry its key; for auto-increment creates
        // this is where the assigned ID comes from.
        let Some(cache_key) = saved
            .get(resource.primary_key())
            .and_then(CacheKey::from_value)
        else {
            let err = SbwmError::MissingKey {
                resource,
                key: resource.primary_key(),
            };
            return Err(self.record_error(resource, err));
        };

        self.collections
            .entry(resource)
            .or_default()
            .insert(cache_key, saved.clone());

        Ok(saved)
    }

    /// All cached records of a resource, in key order.
    pub fn list(&self, resource: Resource) -> Vec<&Value> {
        self.collections
            .get(&resource)
            .map(|collection| collection.values().collect())
            .unwrap_or_default()
    }

    /// A cached record by primary-key value.
    pub fn by_id(&self, resource: Resource, key: &CacheKey) -> Option<&Value> {
        self.collections.get(&resource)?.get(key)
    }

    /// Cached records deserialized into a typed record struct.
    pub fn list_as<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        self.list(resource)
            .into_iter()
            .map(|row| serde_json::from_value(row.clone()).map_err(SbwmError::Json))
            .collect()
    }

    /// A cached record deserialized into a typed record struct.
    pub fn by_id_as<T: DeserializeOwned>(
        &self,
        resource: Resource,
        key: &CacheKey,
    ) -> Result<Option<T>> {
        match self.by_id(resource, key) {
            Some(row) => Ok(Some(serde_json::from_value(row.clone())?)),
            None => Ok(None),
        }
    }

    /// Whether an action for this resource is in flight.
    pub fn is_loading(&self, resource: Resource) -> bool {
        self.loading.get(&resource).copied().unwrap_or(false)
    }

    /// The most recent error for this resource, if the last action failed.
    pub fn error(&self, resource: Resource) -> Option<&str> {
        self.errors.get(&resource)?.as_deref()
    }

    /// Drop a cached collection.
    pub fn clear(&mut self, resource: Resource) {
        self.collections.remove(&resource);
    }

    /// Mark an action started: loading set, previous error cleared.
    fn begin(&mut self, resource: Resource) {
        self.loading.insert(resource, true);
        self.errors.insert(resource, None);
    }

    /// Record a failed action and hand the error back for re-throwing.
    fn record_error(&mut self, resource: Resource, err: SbwmError) -> SbwmError {
        self.errors.insert(resource, Some(err.to_string()));
        err
    }
}
