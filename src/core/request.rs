use super::id::StaffId;
use crate::error::{AccessTicketError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Whether an accompanying person is company staff or a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    #[serde(alias = "jawwal")]
    Internal,
    #[serde(alias = "non-jawwal")]
    External,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("internal"),
            Self::External => f.write_str("external"),
        }
    }
}

/// A person accompanying the primary applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalStaff {
    pub id: StaffId,
    #[serde(alias = "type")]
    pub role: StaffRole,
    pub name: String,
    /// ID or passport number, only kept for external staff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
}

impl AdditionalStaff {
    /// Creates a staff entry with a freshly generated id
    pub fn new(role: StaffRole, name: impl Into<String>, id_number: Option<String>) -> Self {
        let mut staff = Self {
            id: StaffId::new(),
            role,
            name: name.into(),
            id_number,
        };
        staff.normalize();
        staff
    }

    pub fn internal(name: impl Into<String>) -> Self {
        Self::new(StaffRole::Internal, name, None)
    }

    pub fn external(name: impl Into<String>, id_number: impl Into<String>) -> Self {
        Self::new(StaffRole::External, name, Some(id_number.into()))
    }

    fn normalize(&mut self) {
        if self.role == StaffRole::Internal {
            self.id_number = None;
        }
    }
}

/// The access form payload: everything a requester fills in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub primary_name: String,
    pub company: String,
    #[serde(default)]
    pub department: String,
    pub purpose: String,
    pub rack: String,
    #[serde(default)]
    pub has_equipment: bool,
    #[serde(default)]
    pub equipment_list: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub additional_staff: Vec<AdditionalStaff>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl AccessRequest {
    /// Checks that every required field is present
    ///
    /// Reports the first missing field in form order.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("primary_name", &self.primary_name),
            ("company", &self.company),
            ("purpose", &self.purpose),
            ("rack", &self.rack),
        ];
        for (field, value) in required {
            if is_blank(value) {
                return Err(AccessTicketError::missing(field));
            }
        }

        let mut seen = HashSet::new();
        for (index, staff) in self.additional_staff.iter().enumerate() {
            if !seen.insert(&staff.id) {
                tracing::debug!(
                    "Staff id {} repeats at additional_staff[{}]",
                    staff.id,
                    index
                );
                return Err(AccessTicketError::missing("additional_staff"));
            }
            if is_blank(&staff.name) {
                return Err(AccessTicketError::missing(format!(
                    "additional_staff[{index}].name"
                )));
            }
            if staff.role == StaffRole::External
                && staff.id_number.as_deref().is_none_or(is_blank)
            {
                return Err(AccessTicketError::missing(format!(
                    "additional_staff[{index}].id_number"
                )));
            }
        }

        Ok(())
    }

    /// Drops data the role rules say must be absent
    pub(crate) fn normalize(&mut self) {
        for staff in &mut self.additional_staff {
            staff.normalize();
        }
    }

    /// The equipment list, when the requester said they are bringing equipment
    #[must_use]
    pub fn equipment(&self) -> Option<&str> {
        self.has_equipment.then_some(self.equipment_list.as_str())
    }
}
