use super::{AccessRequest, AdditionalStaff};

/// Builder for creating `AccessRequest` instances
#[derive(Default)]
pub struct AccessRequestBuilder {
    primary_name: Option<String>,
    company: Option<String>,
    department: Option<String>,
    purpose: Option<String>,
    rack: Option<String>,
    equipment: Option<String>,
    notes: Option<String>,
    additional_staff: Vec<AdditionalStaff>,
}

impl AccessRequestBuilder {
    /// Create a new request builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing request, e.g. the current state of a ticket being edited
    #[must_use]
    pub fn from_request(request: &AccessRequest) -> Self {
        Self {
            primary_name: Some(request.primary_name.clone()),
            company: Some(request.company.clone()),
            department: Some(request.department.clone()),
            purpose: Some(request.purpose.clone()),
            rack: Some(request.rack.clone()),
            equipment: request.has_equipment.then(|| request.equipment_list.clone()),
            notes: Some(request.notes.clone()),
            additional_staff: request.additional_staff.clone(),
        }
    }

    /// Set the primary applicant's name
    #[must_use]
    pub fn primary_name(mut self, name: impl Into<String>) -> Self {
        self.primary_name = Some(name.into());
        self
    }

    /// Set the company
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the department
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set the work purpose
    #[must_use]
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Set the target rack or devices
    #[must_use]
    pub fn rack(mut self, rack: impl Into<String>) -> Self {
        self.rack = Some(rack.into());
        self
    }

    /// Declare equipment being brought in; this also sets the equipment flag
    #[must_use]
    pub fn equipment(mut self, list: impl Into<String>) -> Self {
        self.equipment = Some(list.into());
        self
    }

    /// Clear the equipment flag and list
    #[must_use]
    pub fn no_equipment(mut self) -> Self {
        self.equipment = None;
        self
    }

    /// Set notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Replace the accompanying staff
    #[must_use]
    pub fn additional_staff(mut self, staff: Vec<AdditionalStaff>) -> Self {
        self.additional_staff = staff;
        self
    }

    /// Add a single accompanying person
    #[must_use]
    pub fn staff(mut self, staff: AdditionalStaff) -> Self {
        self.additional_staff.push(staff);
        self
    }

    /// Build the request
    pub fn build(self) -> AccessRequest {
        AccessRequest {
            primary_name: self.primary_name.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            purpose: self.purpose.unwrap_or_default(),
            rack: self.rack.unwrap_or_default(),
            has_equipment: self.equipment.is_some(),
            equipment_list: self.equipment.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            additional_staff: self.additional_staff,
        }
    }
}
