//! Shared option validation for template generators.
//!
//! Each template may accept a `project_name` override. This baseline
//! validator turns the loosely-typed option bag into a closed, typed result
//! so generators never repeat shape checks. Unrecognized keys are rejected by
//! default - that is a deliberate contract, not an oversight.

use serde_json::Value;

use super::{OptionBag, error::DomainError};

/// The one option key the baseline validator recognizes.
pub const PROJECT_NAME_KEY: &str = "project_name";

/// Normalized options shared by all templates.
///
/// A closed struct: whatever else was in the input bag, this is the entire
/// output. Templates extending the baseline would define their own richer
/// type rather than widening this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedOptions {
    /// Optional friendly name for the generated extension / package.
    /// If omitted, templates fall back to their internal defaults.
    pub project_name: Option<String>,
}

impl ValidatedOptions {
    /// The project name, or the template's fallback when none was supplied.
    pub fn project_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.project_name.as_deref().unwrap_or(default)
    }
}

/// Validate user-supplied options shared by all templates.
///
/// Recognizes exactly one optional key, [`PROJECT_NAME_KEY`], which must be a
/// JSON string. Any other key fails validation, with every offending key
/// listed in the error.
pub fn validate_common_options(opts: &OptionBag) -> Result<ValidatedOptions, DomainError> {
    let mut project_name = None;
    let mut unknown: Vec<&str> = Vec::new();

    for (key, value) in opts {
        if key == PROJECT_NAME_KEY {
            match value {
                Value::String(s) => project_name = Some(s.clone()),
                _ => {
                    return Err(DomainError::OptionNotString {
                        option: PROJECT_NAME_KEY,
                    });
                }
            }
        } else {
            unknown.push(key.as_str());
        }
    }

    if !unknown.is_empty() {
        return Err(DomainError::UnknownOptions {
            keys: unknown.join(", "),
        });
    }

    Ok(ValidatedOptions { project_name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(entries: &[(&str, Value)]) -> OptionBag {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_bag_yields_no_project_name() {
        let opts = validate_common_options(&OptionBag::new()).unwrap();
        assert_eq!(opts, ValidatedOptions { project_name: None });
    }

    #[test]
    fn string_project_name_is_accepted() {
        let opts =
            validate_common_options(&bag(&[(PROJECT_NAME_KEY, json!("my-ext"))])).unwrap();
        assert_eq!(opts.project_name.as_deref(), Some("my-ext"));
    }

    #[test]
    fn non_string_project_name_is_rejected() {
        let err =
            validate_common_options(&bag(&[(PROJECT_NAME_KEY, json!(42))])).unwrap_err();
        assert_eq!(
            err,
            DomainError::OptionNotString {
                option: PROJECT_NAME_KEY
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected_and_all_listed() {
        let err = validate_common_options(&bag(&[
            ("alpha", json!(true)),
            ("beta", json!("x")),
        ]))
        .unwrap_err();
        match err {
            DomainError::UnknownOptions { keys } => {
                assert!(keys.contains("alpha"));
                assert!(keys.contains("beta"));
            }
            other => panic!("expected UnknownOptions, got {other:?}"),
        }
    }

    #[test]
    fn unknown_key_rejected_even_with_valid_project_name() {
        let err = validate_common_options(&bag(&[
            (PROJECT_NAME_KEY, json!("ok")),
            ("stray", json!(1)),
        ]))
        .unwrap_err();
        assert!(matches!(err, DomainError::UnknownOptions { .. }));
    }

    #[test]
    fn output_is_closed_to_recognized_fields_only() {
        // The validator never passes arbitrary input through; the struct has
        // exactly one field, so this is enforced by the type itself.
        let opts =
            validate_common_options(&bag(&[(PROJECT_NAME_KEY, json!("name"))])).unwrap();
        assert_eq!(
            opts,
            ValidatedOptions {
                project_name: Some("name".into())
            }
        );
    }

    #[test]
    fn project_name_or_falls_back() {
        let opts = ValidatedOptions::default();
        assert_eq!(opts.project_name_or("my-extension"), "my-extension");

        let opts = ValidatedOptions {
            project_name: Some("custom".into()),
        };
        assert_eq!(opts.project_name_or("my-extension"), "custom");
    }
}
