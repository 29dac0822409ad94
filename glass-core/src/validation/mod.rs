//! Request and layout validation.

mod validate;

pub use validate::{
    has_overlap, out_of_bounds, overlapping_pairs, quick_validate, validate_layout,
    validate_plan, validate_request, ValidationResult,
};
