// Typed records for the commonly-used API resources.
// Field shapes are dictated by the remote API; serde maps its PascalCase JSON.
// Resources not listed here travel as plain serde_json::Value bags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A project, possibly nested under a parent project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "ParentID")]
    pub parent_id: u64,
    pub number: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "TypeID")]
    pub type_id: u64,
    #[serde(rename = "CustomerID")]
    pub customer_id: u64,
    pub coach: String,
    pub status: i64,
}

/// A task assigned to a student within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "ProjectID")]
    pub project_id: u64,
    #[serde(rename = "StudentID")]
    pub student_id: u64,
    pub name: String,
    pub start: NaiveDate,
    pub due: NaiveDate,
    /// 0/1 flag as the API stores it.
    pub done: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    pub firstname: String,
    pub year: i64,
    pub fullname: String,
}

/// Time booked by a student on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Timesheet {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "ProjectID")]
    pub project_id: u64,
    #[serde(rename = "StudentID")]
    pub student_id: u64,
    pub date: NaiveDate,
    pub minutes: i64,
    /// 0/1 flag as the API stores it.
    pub approved: i64,
}

/// A teacher, keyed by abbreviation rather than a numeric ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Teacher {
    pub abbr: String,
    pub name: String,
    pub firstname: String,
}

/// A country, keyed by ISO code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    #[serde(rename = "ISO")]
    pub iso: String,
    pub name: String,
}

/// Read-only join row: tasks with project and student names resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskView {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "ProjectID")]
    pub project_id: u64,
    pub project_name: String,
    #[serde(rename = "StudentID")]
    pub student_id: u64,
    pub student_name: String,
    pub task_name: String,
    pub start: NaiveDate,
    pub due: NaiveDate,
    // Lowercase in the view, unlike Task.Done.
    #[serde(rename = "done")]
    pub done: i64,
}

/// Read-only join row: equipment with its type name resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EquipmentView {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    pub number: String,
    pub description: String,
    #[serde(rename = "Type")]
    pub type_name: String,
}
