use crate::utils::error::{LookupError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// `C` followed by 4 to 7 digits, anchored at the start only.
static LCSC_PART_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^C\d{4,7}").expect("LCSC part number pattern is valid"));

/// Anything may follow the digits: `C001234extra` is accepted.
pub fn is_lcsc_part_number(candidate: &str) -> bool {
    LCSC_PART_NUMBER.is_match(candidate)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
