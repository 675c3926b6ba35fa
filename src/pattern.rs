//! Source filename templates
//!
//! Templates use printf-style conversions so existing asset layouts can be
//! described as-is, e.g. `PNG/%s_Front-Walking-Front_%d.png`.
//!
//! Unlike printf, conversions are substituted by name rather than position:
//! `%s` may appear anywhere (or not at all) and so may `%d`, so `%d_%s` and a
//! fixed `static.png` are both accepted.

use crate::error::{AtlasError, Result};

/// Widest `%0Nd` padding; a u32 never needs more than 10 digits.
pub const MAX_PAD_WIDTH: usize = 10;

/// Expand `template` with the character name and frame number.
///
/// Supported conversions: `%s` (character), `%d` (index), `%0Nd` (index
/// zero-padded to width N) and `%%` (literal percent).
pub fn expand(template: &str, character: &str, index: u32) -> Result<String> {
    let mut out = String::with_capacity(template.len() + character.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('%') => out.push('%'),
            Some('s') => out.push_str(character),
            Some('d') => out.push_str(&index.to_string()),
            Some('0') => {
                let mut digits = String::new();
                while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                    digits.push(*d);
                    chars.next();
                }
                if chars.next() != Some('d') || digits.is_empty() {
                    return Err(bad(template, "zero padding must look like %0Nd"));
                }
                let width = digits
                    .parse::<usize>()
                    .ok()
                    .filter(|w| *w <= MAX_PAD_WIDTH)
                    .ok_or_else(|| bad(template, "padding width must be at most 10"))?;
                out.push_str(&format!("{:0width$}", index, width = width));
            }
            Some(other) => {
                return Err(bad(template, &format!("unsupported conversion %{}", other)));
            }
            None => return Err(bad(template, "dangling % at end of template")),
        }
    }

    Ok(out)
}

/// Check a template without producing output.
pub fn validate(template: &str) -> Result<()> {
    expand(template, "", 0).map(|_| ())
}

fn bad(template: &str, message: &str) -> AtlasError {
    AtlasError::Pattern {
        pattern: template.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_character_and_index() {
        let path = expand("PNG/%s_Front-Walking-Front_%d.png", "Knight", 27).unwrap();
        assert_eq!(path, "PNG/Knight_Front-Walking-Front_27.png");
    }

    #[test]
    fn test_expand_zero_padded() {
        assert_eq!(expand("%s_%03d.png", "Orc", 7).unwrap(), "Orc_007.png");
        assert_eq!(expand("%02d", "", 123).unwrap(), "123");
    }

    #[test]
    fn test_expand_literal_percent() {
        assert_eq!(expand("100%%_%d", "x", 1).unwrap(), "100%_1");
    }

    #[test]
    fn test_rejects_unknown_conversion() {
        let err = expand("%s_%f.png", "Knight", 0).unwrap_err();
        assert!(matches!(err, AtlasError::Pattern { .. }));
    }

    #[test]
    fn test_rejects_dangling_percent() {
        assert!(validate("frame_%").is_err());
        assert!(validate("frame_%0").is_err());
        assert!(validate("frame_%05x").is_err());
    }

    #[test]
    fn test_plain_template_passes_through() {
        assert_eq!(expand("static.png", "Knight", 9).unwrap(), "static.png");
    }

    #[test]
    fn test_conversions_in_any_order() {
        assert_eq!(expand("%d_%s.png", "Knight", 4).unwrap(), "4_Knight.png");
    }

    #[test]
    fn test_padding_width_is_capped() {
        assert_eq!(expand("%010d", "", 42).unwrap(), "0000000042");
        assert!(validate("%011d").is_err());
        assert!(validate("%099999999999999999999d").is_err());
    }
}
