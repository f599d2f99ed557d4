//! Validation functionality
//!
//! Provides validation logic for:
//! - Reference validation (relationship endpoints, identifier uniqueness)
//! - XML well-formedness of exported documents

pub mod references;
pub mod xml;

pub use references::{ReferenceValidationResult, ReferenceValidator};
pub use xml::validate_output_well_formed;
