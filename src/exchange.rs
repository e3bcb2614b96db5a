//! Exchange suffix codes.
//!
//! Security codes carry the listing venue as a suffix (`RB1910.XSGE`, `000001.XSHE`).
//! Futures venues are usually referred to by their short names instead.

/// Maps a code suffix to the short name of its futures exchange.
///
/// Matching is case-insensitive. Unknown or empty codes yield `None`.
///
/// ```
/// assert_eq!(jqdata_rs::exchange::short_name("XSGE"), Some("SHFE"));
/// assert_eq!(jqdata_rs::exchange::short_name("XSHE"), None);
/// ```
pub fn short_name(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "XDCE" => Some("DCE"),
        "XZCE" => Some("CZCE"),
        "XINE" => Some("INE"),
        "CCFX" => Some("CFFEX"),
        "XSGE" => Some("SHFE"),
        _ => None,
    }
}

/// Like [`short_name`], returning `""` for unknown codes.
pub fn short_name_or_empty(code: &str) -> &'static str {
    short_name(code).unwrap_or_default()
}

/// Splits `RB1910.XSGE` into `("RB1910", "XSGE")`.
pub fn split_code(code: &str) -> Option<(&str, &str)> {
    code.rsplit_once('.')
}
