// Resource metadata table.
// Maps each API resource to its primary-key field, key semantics, and mutability.

use std::fmt;
use std::str::FromStr;

use crate::error::SbwmError;

/// A resource exposed by the projects API.
///
/// The set is fixed by the server; variant names match the URL path segment
/// and the casing the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Address,
    Country,
    Customer,
    CustomerView,
    Department,
    DepartmentMember,
    DepartmentMemberView,
    Equipment,
    EquipmentReservation,
    EquipmentView,
    Equipmenttype,
    Project,
    Projectrole,
    Projecttype,
    Student,
    Studentroleproject,
    Task,
    TaskView,
    Teacher,
    Test,
    Timesheet,
}

/// Per-resource rules driving URL shape and upsert method selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMeta {
    /// Field name of the primary key in record JSON (e.g. "ID", "Abbr", "ISO").
    pub primary_key: &'static str,
    /// Whether the server assigns the key on create.
    pub auto_increment: bool,
    /// Read-only view resources reject writes before any HTTP happens.
    pub read_only: bool,
}

const fn meta(primary_key: &'static str, auto_increment: bool, read_only: bool) -> ResourceMeta {
    ResourceMeta {
        primary_key,
        auto_increment,
        read_only,
    }
}

impl Resource {
    /// All resources the API documents, in table order.
    pub const ALL: [Resource; 21] = [
        Resource::Address,
        Resource::Country,
        Resource::Customer,
        Resource::CustomerView,
        Resource::Department,
        Resource::DepartmentMember,
        Resource::DepartmentMemberView,
        Resource::Equipment,
        Resource::EquipmentReservation,
        Resource::EquipmentView,
        Resource::Equipmenttype,
        Resource::Project,
        Resource::Projectrole,
        Resource::Projecttype,
        Resource::Student,
        Resource::Studentroleproject,
        Resource::Task,
        Resource::TaskView,
        Resource::Teacher,
        Resource::Test,
        Resource::Timesheet,
    ];

    /// URL path segment for this resource (server casing).
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Address => "Address",
            Resource::Country => "Country",
            Resource::Customer => "Customer",
            Resource::CustomerView => "CustomerView",
            Resource::Department => "Department",
            Resource::DepartmentMember => "DepartmentMember",
            Resource::DepartmentMemberView => "DepartmentMemberView",
            Resource::Equipment => "Equipment",
            Resource::EquipmentReservation => "EquipmentReservation",
            Resource::EquipmentView => "EquipmentView",
            Resource::Equipmenttype => "Equipmenttype",
            Resource::Project => "Project",
            Resource::Projectrole => "Projectrole",
            Resource::Projecttype => "Projecttype",
            Resource::Student => "Student",
            Resource::Studentroleproject => "Studentroleproject",
            Resource::Task => "Task",
            Resource::TaskView => "TaskView",
            Resource::Teacher => "Teacher",
            Resource::Test => "Test",
            Resource::Timesheet => "Timesheet",
        }
    }

    /// Metadata per the API docs: primary key name, auto-increment flag,
    /// and whether the resource is a read-only view.
    pub fn meta(self) -> ResourceMeta {
        match self {
            Resource::Address => meta("ID", true, false),
            Resource::Country => meta("ISO", false, false),
            Resource::Customer => meta("ID", true, false),
            Resource::CustomerView => meta("ID", false, true),
            Resource::Department => meta("ID", true, false),
            Resource::DepartmentMember => meta("ID", true, false),
            Resource::DepartmentMemberView => meta("ID", false, true),
            Resource::Equipment => meta("ID", true, false),
            Resource::EquipmentReservation => meta("ID", true, false),
            Resource::EquipmentView => meta("ID", false, true),
            Resource::Equipmenttype => meta("ID", true, false),
            Resource::Project => meta("ID", true, false),
            Resource::Projectrole => meta("ID", false, false),
            Resource::Projecttype => meta("ID", true, false),
            Resource::Student => meta("ID", true, false),
            Resource::Studentroleproject => meta("ID", true, false),
            Resource::Task => meta("ID", true, false),
            Resource::TaskView => meta("ID", false, true),
            Resource::Teacher => meta("Abbr", false, false),
            Resource::Test => meta("test_ID", true, false),
            Resource::Timesheet => meta("ID", true, false),
        }
    }

    /// Primary-key field name in record JSON.
    pub fn primary_key(self) -> &'static str {
        self.meta().primary_key
    }

    /// Whether the server assigns this resource's key.
    pub fn auto_increment(self) -> bool {
        self.meta().auto_increment
    }

    /// Whether writes are rejected for this resource.
    pub fn read_only(self) -> bool {
        self.meta().read_only
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = SbwmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SbwmError::UnknownResource(s.to_string()))
    }
}
