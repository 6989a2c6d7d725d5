// Projects API integration module.
// Provides the HTTP client, resource-level verbs, and typed record structs.

pub mod client;
pub mod resources;
pub mod types;

pub use client::{ApiClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use types::{Country, EquipmentView, Project, Student, Task, TaskView, Teacher, Timesheet};
