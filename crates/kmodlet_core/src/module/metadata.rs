//! Module metadata block and license-tag validation.
//!
//! # Responsibility
//! - Define the static declarations the host reads before any hook runs.
//! - Classify license tags against the fixed host-recognized set.
//!
//! # Invariants
//! - Metadata is immutable after construction; there is no mutation API.
//! - The license tag is a contract with the host, not cosmetic: an empty tag
//!   is invalid, an unrecognized tag is load policy territory (`host`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// License tag for GPL-compatible modules.
pub const LICENSE_GPL: &str = "GPL";
/// License tag pinning GPL version 2.
pub const LICENSE_GPL_V2: &str = "GPL v2";
/// License tag for GPL plus extra rights grants.
pub const LICENSE_GPL_ADDITIONAL: &str = "GPL and additional rights";
/// License tag for dual MIT/GPL modules.
pub const LICENSE_DUAL_MIT_GPL: &str = "Dual MIT/GPL";
/// License tag for dual BSD/GPL modules.
pub const LICENSE_DUAL_BSD_GPL: &str = "Dual BSD/GPL";
/// License tag for dual MPL/GPL modules.
pub const LICENSE_DUAL_MPL_GPL: &str = "Dual MPL/GPL";

const RECOGNIZED_LICENSE_TAGS: &[&str] = &[
    LICENSE_GPL,
    LICENSE_GPL_V2,
    LICENSE_GPL_ADDITIONAL,
    LICENSE_DUAL_MIT_GPL,
    LICENSE_DUAL_BSD_GPL,
    LICENSE_DUAL_MPL_GPL,
];

/// Returns the fixed set of license tags the host recognizes.
pub fn recognized_license_tags() -> &'static [&'static str] {
    RECOGNIZED_LICENSE_TAGS
}

/// Host-side classification of one license tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseClass {
    /// Tag is in the recognized set; the host loads without complaint.
    Recognized,
    /// Tag is unknown to the host; loading is a policy decision and may
    /// taint the running system.
    Unrecognized,
}

/// Static declarations consulted by the host loader before any code runs.
///
/// Set once at build time for a given module, never mutated, destroyed only
/// by unload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    /// License tag, e.g. `GPL`. Must be truthful; see [`LicenseClass`].
    pub license: String,
    /// Free-text author declaration.
    pub author: String,
    /// Free-text one-line module description.
    pub description: String,
}

impl ModuleMetadata {
    pub fn new(
        license: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            license: license.into(),
            author: author.into(),
            description: description.into(),
        }
    }

    /// Validates declaration-level metadata invariants.
    ///
    /// An unrecognized license tag is NOT a validation error here; whether
    /// the host rejects it or loads tainted is host policy.
    pub fn validate(&self) -> Result<(), MetadataValidationError> {
        if self.license.trim().is_empty() {
            return Err(MetadataValidationError::EmptyLicense);
        }
        if self.license.lines().count() > 1 {
            return Err(MetadataValidationError::MultilineLicense(
                self.license.clone(),
            ));
        }
        if self.author.trim().is_empty() {
            return Err(MetadataValidationError::EmptyAuthor);
        }
        if self.description.trim().is_empty() {
            return Err(MetadataValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Classifies the license tag against the recognized set, plus any
    /// extra tags the host configuration vouches for.
    pub fn license_class(&self, extra_recognized: &[String]) -> LicenseClass {
        let tag = self.license.trim();
        if RECOGNIZED_LICENSE_TAGS.contains(&tag)
            || extra_recognized.iter().any(|extra| extra == tag)
        {
            LicenseClass::Recognized
        } else {
            LicenseClass::Unrecognized
        }
    }
}

/// Declaration-level metadata validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValidationError {
    EmptyLicense,
    MultilineLicense(String),
    EmptyAuthor,
    EmptyDescription,
}

impl Display for MetadataValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLicense => write!(f, "metadata license tag must not be empty"),
            Self::MultilineLicense(value) => {
                write!(f, "metadata license tag must be a single line: {value:?}")
            }
            Self::EmptyAuthor => write!(f, "metadata author must not be empty"),
            Self::EmptyDescription => write!(f, "metadata description must not be empty"),
        }
    }
}

impl Error for MetadataValidationError {}

#[cfg(test)]
mod tests {
    use super::{
        recognized_license_tags, LicenseClass, MetadataValidationError, ModuleMetadata,
        LICENSE_DUAL_MIT_GPL, LICENSE_GPL,
    };

    fn valid_metadata() -> ModuleMetadata {
        ModuleMetadata::new(LICENSE_GPL, "Test Author", "A test module")
    }

    #[test]
    fn validates_baseline_metadata() {
        assert!(valid_metadata().validate().is_ok());
    }

    #[test]
    fn rejects_empty_license_tag() {
        let mut metadata = valid_metadata();
        metadata.license = "   ".to_string();
        let err = metadata.validate().unwrap_err();
        assert_eq!(err, MetadataValidationError::EmptyLicense);
    }

    #[test]
    fn rejects_multiline_license_tag() {
        let mut metadata = valid_metadata();
        metadata.license = "GPL\nProprietary".to_string();
        let err = metadata.validate().unwrap_err();
        assert!(matches!(err, MetadataValidationError::MultilineLicense(_)));
    }

    #[test]
    fn rejects_empty_author_and_description() {
        let mut metadata = valid_metadata();
        metadata.author = String::new();
        assert_eq!(
            metadata.validate().unwrap_err(),
            MetadataValidationError::EmptyAuthor
        );

        let mut metadata = valid_metadata();
        metadata.description = "\t".to_string();
        assert_eq!(
            metadata.validate().unwrap_err(),
            MetadataValidationError::EmptyDescription
        );
    }

    #[test]
    fn classifies_recognized_and_unrecognized_tags() {
        let metadata = valid_metadata();
        assert_eq!(metadata.license_class(&[]), LicenseClass::Recognized);

        let mut metadata = valid_metadata();
        metadata.license = "Proprietary".to_string();
        assert_eq!(metadata.license_class(&[]), LicenseClass::Unrecognized);
    }

    #[test]
    fn extra_recognized_tags_extend_the_fixed_set() {
        let mut metadata = valid_metadata();
        metadata.license = "Vendor-Internal".to_string();
        assert_eq!(metadata.license_class(&[]), LicenseClass::Unrecognized);
        assert_eq!(
            metadata.license_class(&["Vendor-Internal".to_string()]),
            LicenseClass::Recognized
        );
    }

    #[test]
    fn recognized_set_contains_classic_tags() {
        let tags = recognized_license_tags();
        assert!(tags.contains(&LICENSE_GPL));
        assert!(tags.contains(&LICENSE_DUAL_MIT_GPL));
    }

    #[test]
    fn metadata_serialization_uses_expected_wire_fields() {
        let json = serde_json::to_value(valid_metadata()).expect("metadata serializes");
        assert_eq!(json["license"], "GPL");
        assert_eq!(json["author"], "Test Author");
        assert_eq!(json["description"], "A test module");
    }
}
