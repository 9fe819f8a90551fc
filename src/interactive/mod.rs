//! Interactive access form
//!
//! Walks the requester through the access form with prompts. Required fields
//! are re-asked until they are filled in.

use crate::core::{AccessRequest, AccessRequestBuilder, AdditionalStaff, StaffRole};
use crate::error::Result;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

/// Prompt-driven access form
pub struct InteractiveForm {
    theme: ColorfulTheme,
}

impl Default for InteractiveForm {
    fn default() -> Self {
        Self::new()
    }
}

fn required(value: &String) -> std::result::Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("This field is required")
    } else {
        Ok(())
    }
}

impl InteractiveForm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Runs the form, pre-filled from `current` when editing
    pub fn fill(&self, current: Option<&AccessRequest>) -> Result<AccessRequest> {
        let blank = AccessRequest::default();
        let current = current.unwrap_or(&blank);

        println!("🔐 Data center access request\n");

        let primary_name = self.text("Primary employee name", &current.primary_name, true)?;
        let company = self.text("Company", &current.company, true)?;
        let department = self.text("Department", &current.department, false)?;
        let purpose = self.text("Work purpose", &current.purpose, true)?;
        let rack = self.text("Target rack / devices", &current.rack, true)?;

        let mut builder = AccessRequestBuilder::new()
            .primary_name(primary_name)
            .company(company)
            .department(department)
            .purpose(purpose)
            .rack(rack);

        if Confirm::with_theme(&self.theme)
            .with_prompt("Bringing equipment in?")
            .default(current.has_equipment)
            .interact()?
        {
            builder = builder.equipment(self.text(
                "Equipment list",
                &current.equipment_list,
                false,
            )?);
        }

        builder = builder.notes(self.text("Notes", &current.notes, false)?);
        builder = builder.additional_staff(self.staff(&current.additional_staff)?);

        Ok(builder.build())
    }

    fn text(&self, prompt: &str, initial: &str, is_required: bool) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if !initial.is_empty() {
            input = input.with_initial_text(initial);
        }
        let value = if is_required {
            input.validate_with(required).interact_text()?
        } else {
            input.allow_empty(true).interact_text()?
        };
        Ok(value)
    }

    fn staff(&self, current: &[AdditionalStaff]) -> Result<Vec<AdditionalStaff>> {
        let mut staff = Vec::new();

        for existing in current {
            if Confirm::with_theme(&self.theme)
                .with_prompt(format!("Keep {} ({})?", existing.name, existing.role))
                .default(true)
                .interact()?
            {
                staff.push(existing.clone());
            }
        }

        let roles = ["Internal staff", "External visitor"];
        while Confirm::with_theme(&self.theme)
            .with_prompt("Add an accompanying person?")
            .default(false)
            .interact()?
        {
            let role = match Select::with_theme(&self.theme)
                .with_prompt("Role")
                .items(&roles)
                .default(0)
                .interact()?
            {
                0 => StaffRole::Internal,
                _ => StaffRole::External,
            };
            let name = self.text("Full name", "", true)?;
            let id_number = match role {
                StaffRole::External => Some(self.text("ID / passport number", "", true)?),
                StaffRole::Internal => None,
            };
            staff.push(AdditionalStaff::new(role, name, id_number));
        }

        Ok(staff)
    }
}
