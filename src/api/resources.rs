// Resource-level verbs on the API client.
// Implements list, get-one, and the POST/PUT upsert selection policy.

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SbwmError};
use crate::resource::Resource;
use crate::store::CacheKey;

use super::client::ApiClient;

impl ApiClient {
    /// List all records of a resource.
    pub async fn list(&self, resource: Resource) -> Result<Vec<Value>> {
        let response = self.get_collection(resource).await?;
        let rows: Vec<Value> = response.json().await?;
        Ok(rows)
    }

    /// Get a single record by primary-key value.
    pub async fn get_one(&self, resource: Resource, key: &CacheKey) -> Result<Value> {
        let response = self.get_item(resource, &key.to_string()).await?;
        let row: Value = response.json().await?;
        Ok(row)
    }

    /// Create or update a record, choosing POST vs. PUT from the resource's
    /// key semantics:
    ///
    /// - fixed key (Country ISO, Teacher Abbr, Projectrole ID): always PUT to
    ///   `/{Resource}/{key}`; a missing or empty key is an error.
    /// - auto-increment key: PUT to `/{Resource}/{key}` when the payload
    ///   carries a positive integer key, POST to `/{Resource}` otherwise
    ///   (0 or absent means "new record").
    ///
    /// Returns the saved record as the server reports it.
    pub async fn upsert(&self, resource: Resource, payload: &Value) -> Result<Value> {
        let meta = resource.meta();
        let key_val = payload.get(meta.primary_key);

        let response = if !meta.auto_increment {
            let key = fixed_key(resource, key_val)?;
            debug!(%resource, %key, "upsert via PUT (fixed key)");
            self.put(resource, &key, payload).await?
        } else {
            match key_val.and_then(Value::as_i64) {
                Some(id) if id > 0 => {
                    debug!(%resource, id, "upsert via PUT");
                    self.put(resource, &id.to_string(), payload).await?
                }
                _ => {
                    debug!(%resource, "upsert via POST");
                    self.post(resource, payload).await?
                }
            }
        };

        let saved: Value = response.json().await?;
        Ok(saved)
    }
}

/// Extract a usable fixed-key value: a non-empty string or a number.
fn fixed_key(resource: Resource, key_val: Option<&Value>) -> Result<String> {
    match key_val {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(SbwmError::MissingKey {
            resource,
            key: resource.primary_key(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_key_accepts_strings_and_numbers() {
        let key = fixed_key(Resource::Country, Some(&json!("CH"))).unwrap();
        assert_eq!(key, "CH");

        let key = fixed_key(Resource::Projectrole, Some(&json!(7))).unwrap();
        assert_eq!(key, "7");
    }

    #[test]
    fn test_fixed_key_rejects_missing_values() {
        for value in [None, Some(json!(null)), Some(json!(""))] {
            let err = fixed_key(Resource::Teacher, value.as_ref()).unwrap_err();
            assert!(matches!(
                err,
                SbwmError::MissingKey {
                    resource: Resource::Teacher,
                    key: "Abbr",
                }
            ));
        }
    }
}
