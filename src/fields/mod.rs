//! Field validators for the non-scored form fields.
//!
//! Each validator returns on the first failing check, so a verdict from
//! this module holds at most one error.

mod confirm;
mod email;
mod name;

pub use confirm::{passwords_match, validate_confirm_password};
pub use email::{
    MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, MAX_LOCAL_LENGTH, is_valid_email, validate_email,
};
pub use name::{MAX_NAME_LENGTH, MIN_NAME_LENGTH, validate_full_name};
