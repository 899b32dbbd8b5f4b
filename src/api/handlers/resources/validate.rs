//! Declarative field validation for resource payloads and path parameters.
//!
//! Each rule contributes at most one [`FieldError`]; all violations are
//! collected in rule order so a response lists everything wrong with the
//! request at once.

use super::{
    PRIORITY_MAX, PRIORITY_MIN,
    types::{ResourceInput, ResourcePayload, Status},
};
use crate::api::error::FieldError;

const MSG_NAME_REQUIRED: &str = "Name is required";
const MSG_INVALID_STATUS: &str = "Invalid status";
const MSG_PRIORITY_RANGE: &str = "Priority must be between 1 and 5";
const MSG_ID_POSITIVE: &str = "ID must be a positive integer";

/// Validates and sanitizes a create/update body. `name` and `description`
/// are trimmed; the trimmed values are what gets persisted.
pub(super) fn resource_payload(payload: ResourcePayload) -> Result<ResourceInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    if name.is_empty() {
        errors.push(FieldError {
            field: "name",
            message: MSG_NAME_REQUIRED,
        });
    }

    let description = payload
        .description
        .as_deref()
        .map(str::trim)
        .map(str::to_string);

    let status = match payload.status.as_deref() {
        None => None,
        Some(raw) => match Status::parse(raw) {
            Some(status) => Some(status),
            None => {
                errors.push(FieldError {
                    field: "status",
                    message: MSG_INVALID_STATUS,
                });
                None
            }
        },
    };

    let priority = match payload.priority {
        None => None,
        Some(value) => match i32::try_from(value) {
            Ok(value) if (PRIORITY_MIN..=PRIORITY_MAX).contains(&value) => Some(value),
            _ => {
                errors.push(FieldError {
                    field: "priority",
                    message: MSG_PRIORITY_RANGE,
                });
                None
            }
        },
    };

    if errors.is_empty() {
        Ok(ResourceInput {
            name,
            description,
            status,
            priority,
        })
    } else {
        Err(errors)
    }
}

/// Validates the `id` path parameter: an integer strictly greater than zero.
pub(super) fn path_id(raw: &str) -> Result<i64, FieldError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(FieldError {
            field: "id",
            message: MSG_ID_POSITIVE,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(
        name: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
        priority: Option<i64>,
    ) -> ResourcePayload {
        ResourcePayload {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            status: status.map(str::to_string),
            priority,
        }
    }

    #[test]
    fn test_minimal_valid_payload() {
        let input = resource_payload(payload(Some("DB"), None, None, None)).expect("valid");
        assert_eq!(input.name, "DB");
        assert_eq!(input.description, None);
        assert_eq!(input.status, None);
        assert_eq!(input.priority, None);
    }

    #[test]
    fn test_name_and_description_are_trimmed() {
        let input = resource_payload(payload(
            Some("  Web Server  "),
            Some("  front row  "),
            None,
            None,
        ))
        .expect("valid");
        assert_eq!(input.name, "Web Server");
        assert_eq!(input.description.as_deref(), Some("front row"));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let errors = resource_payload(payload(None, None, None, None)).expect_err("invalid");
        assert_eq!(
            errors,
            vec![FieldError {
                field: "name",
                message: MSG_NAME_REQUIRED,
            }]
        );
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let errors = resource_payload(payload(Some("   "), None, None, None)).expect_err("invalid");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let errors =
            resource_payload(payload(Some("DB"), None, Some("PAUSED"), None)).expect_err("invalid");
        assert_eq!(
            errors,
            vec![FieldError {
                field: "status",
                message: MSG_INVALID_STATUS,
            }]
        );
    }

    #[test]
    fn test_status_accepts_both_values() {
        for (raw, expected) in [("ACTIVE", Status::Active), ("INACTIVE", Status::Inactive)] {
            let input =
                resource_payload(payload(Some("DB"), None, Some(raw), None)).expect("valid");
            assert_eq!(input.status, Some(expected));
        }
    }

    #[test]
    fn test_priority_boundaries() {
        for valid in [1, 5] {
            let input =
                resource_payload(payload(Some("DB"), None, None, Some(valid))).expect("valid");
            assert_eq!(input.priority, Some(i32::try_from(valid).expect("fits")));
        }

        for invalid in [0, 6, 9, -1, i64::from(i32::MAX) + 1] {
            let errors = resource_payload(payload(Some("DB"), None, None, Some(invalid)))
                .expect_err("invalid");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "priority");
            assert_eq!(errors[0].message, MSG_PRIORITY_RANGE);
        }
    }

    #[test]
    fn test_all_errors_are_collected_in_rule_order() {
        let errors = resource_payload(payload(Some(" "), None, Some("BOGUS"), Some(0)))
            .expect_err("invalid");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "status", "priority"]);
    }

    #[test]
    fn test_path_id_accepts_positive_integers() {
        assert_eq!(path_id("1").expect("valid"), 1);
        assert_eq!(path_id("42").expect("valid"), 42);
    }

    #[test]
    fn test_path_id_rejects_non_positive_and_garbage() {
        for raw in ["0", "-1", "abc", "1.5", ""] {
            let err = path_id(raw).expect_err("invalid");
            assert_eq!(err.field, "id");
            assert_eq!(err.message, MSG_ID_POSITIVE);
        }
    }
}
