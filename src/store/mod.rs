// Resource store module.
// In-memory keyed cache per resource with loading/error state tracking.

pub mod cache;
pub mod key;

pub use cache::{Collection, ResourceStore};
pub use key::CacheKey;
