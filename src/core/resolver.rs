use crate::core::matcher::SearchMode;
use crate::domain::ports::ClipboardProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::is_lcsc_part_number;

/// `--pn` wins over `--digi_pn`; with neither set the mode is LCSC, so
/// `--lcsc_pn` never changes the outcome.
pub fn resolve_mode(pn: bool, digi_pn: bool) -> SearchMode {
    if pn {
        SearchMode::Manufacturer
    } else if digi_pn {
        SearchMode::DigiKey
    } else {
        SearchMode::Lcsc
    }
}

/// Uses `argument` verbatim when given. Otherwise the trimmed clipboard text
/// must look like an LCSC part number, whatever the search mode.
pub fn resolve_query<C>(argument: Option<&str>, clipboard: &C) -> Result<String>
where
    C: ClipboardProvider + ?Sized,
{
    if let Some(query) = argument.filter(|q| !q.is_empty()) {
        return Ok(query.to_string());
    }

    let content = clipboard.read_text()?;
    let content = content.trim();
    tracing::debug!("Clipboard holds {:?}", content);

    if is_lcsc_part_number(content) {
        Ok(content.to_string())
    } else {
        Err(LookupError::InvalidPartNumber {
            content: content.to_string(),
        })
    }
}
