//! Turning command-line form arguments into access requests

use crate::cli::commands::RequestArgs;
use crate::core::{AccessRequest, AccessRequestBuilder, AdditionalStaff, StaffRole};
use crate::error::{AccessTicketError, Result};

/// Parses `internal:NAME` or `external:NAME:ID`
pub fn parse_staff(entry: &str) -> Result<AdditionalStaff> {
    let invalid = || {
        AccessTicketError::Custom(format!(
            "Invalid staff entry '{entry}'. Use internal:NAME or external:NAME:ID"
        ))
    };

    let (role, rest) = entry.split_once(':').ok_or_else(invalid)?;
    match role.trim().to_lowercase().as_str() {
        "internal" | "jawwal" => Ok(AdditionalStaff::internal(rest.trim())),
        "external" | "non-jawwal" => {
            let (name, id_number) = rest.rsplit_once(':').ok_or_else(invalid)?;
            Ok(AdditionalStaff::new(
                StaffRole::External,
                name.trim(),
                Some(id_number.trim().to_string()),
            ))
        },
        _ => Err(invalid()),
    }
}

/// Applies the given flags on top of `builder`
pub fn apply_args(mut builder: AccessRequestBuilder, args: RequestArgs) -> Result<AccessRequestBuilder> {
    if let Some(name) = args.name {
        builder = builder.primary_name(name);
    }
    if let Some(company) = args.company {
        builder = builder.company(company);
    }
    if let Some(department) = args.department {
        builder = builder.department(department);
    }
    if let Some(purpose) = args.purpose {
        builder = builder.purpose(purpose);
    }
    if let Some(rack) = args.rack {
        builder = builder.rack(rack);
    }
    if let Some(equipment) = args.equipment {
        builder = builder.equipment(equipment);
    }
    if let Some(notes) = args.notes {
        builder = builder.notes(notes);
    }
    for entry in &args.staff {
        builder = builder.staff(parse_staff(entry)?);
    }
    Ok(builder)
}

/// Builds a fresh request from flags alone
pub fn request_from_args(args: RequestArgs) -> Result<AccessRequest> {
    Ok(apply_args(AccessRequestBuilder::new(), args)?.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_internal_staff() {
        let staff = parse_staff("internal: Omar Rayyan").unwrap();
        assert_eq!(staff.role, StaffRole::Internal);
        assert_eq!(staff.name, "Omar Rayyan");
        assert!(staff.id_number.is_none());
    }

    #[test]
    fn test_parse_external_staff() {
        let staff = parse_staff("external:Sarah Connor:P-98827361").unwrap();
        assert_eq!(staff.role, StaffRole::External);
        assert_eq!(staff.name, "Sarah Connor");
        assert_eq!(staff.id_number.as_deref(), Some("P-98827361"));
    }

    #[test]
    fn test_parse_invalid_staff() {
        assert!(parse_staff("Sarah").is_err());
        assert!(parse_staff("external:Sarah").is_err());
        assert!(parse_staff("vendor:Sarah:1").is_err());
    }

    #[test]
    fn test_request_from_args() {
        let args = RequestArgs {
            name: Some("Ahmed".to_string()),
            company: Some("Jawwal".to_string()),
            purpose: Some("maint".to_string()),
            rack: Some("Rack 1".to_string()),
            equipment: Some("Toolkit".to_string()),
            staff: vec!["internal:Omar".to_string()],
            ..RequestArgs::default()
        };

        let request = request_from_args(args).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.equipment(), Some("Toolkit"));
        assert_eq!(request.additional_staff.len(), 1);
    }
}
