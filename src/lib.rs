//! Client and in-memory cache for the SBW Media projects REST API.
//!
//! The API exposes a fixed set of named resources (projects, tasks, students,
//! timesheets, equipment, …) behind plain REST endpoints. This crate covers
//! two thin layers:
//!
//! - [`api::ApiClient`]: list / get-one / upsert against the backend, with
//!   per-resource POST-vs-PUT selection driven by the [`resource::Resource`]
//!   metadata table, and non-2xx responses normalized into one error shape.
//! - [`store::ResourceStore`]: a per-resource keyed cache over the client,
//!   tracking loading and error flags for a UI layer to read.
//!
//! ```no_run
//! use sbwm::{ApiClient, Resource, ResourceStore};
//!
//! # async fn demo() -> sbwm::Result<()> {
//! let mut store = ResourceStore::new(ApiClient::from_env()?);
//! store.fetch_all(Resource::Project).await?;
//! for row in store.list(Resource::Project) {
//!     println!("{}", row["Name"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod resource;
pub mod store;

pub use api::ApiClient;
pub use error::{Result, SbwmError};
pub use resource::{Resource, ResourceMeta};
pub use store::{CacheKey, ResourceStore};
