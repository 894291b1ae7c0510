//! Upper/lower case conversion.
//!
//! Both directions use the full Unicode case mapping of the standard library.
//! There is no locale parameter, so Turkish dotted/dotless `i` follows the
//! default mapping. `to_lower(to_upper(x))` is not guaranteed to return `x`.

use crate::error::Result;
use crate::input::TextInput;

/// Converts text to lower case.
///
/// ```
/// use jarko_text::to_lower;
///
/// assert_eq!(to_lower("José MARÍA").unwrap(), "josé maría");
/// ```
pub fn to_lower(text: impl Into<TextInput>) -> Result<String> {
    let text = text.into().into_text("to_lower")?;
    Ok(text.to_lowercase())
}

/// Converts text to upper case.
///
/// ```
/// use jarko_text::to_upper;
///
/// assert_eq!(to_upper("josé maría").unwrap(), "JOSÉ MARÍA");
/// ```
pub fn to_upper(text: impl Into<TextInput>) -> Result<String> {
    let text = text.into().into_text("to_upper")?;
    Ok(text.to_uppercase())
}
