//! ANSI color handling: the per-run color map, escape stripping and
//! visible width math.
//!
//! Color slots are referenced from ascii art and module formats as decimal
//! placeholders (`${1}`, `${4}`). Slot 0 is always the reset sequence. The
//! other slots come from a `#/` header embedded as the first line of the
//! ascii art, or from the `ansii_colors` configuration list.

use crate::error::{GalefetchError, Result};
use crate::template;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// The "no color" escape sequence.
pub const RESET: &str = "\x1b[0m";

/// Marker prefix of a color header line inside ascii art.
const HEADER_PREFIX: &str = "#/";

fn sgr_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap())
}

/// Remove SGR escape sequences from `text`.
pub fn strip_ansi(text: &str) -> String {
    sgr_pattern().replace_all(text, "").into_owned()
}

/// Printable width of `line`, ignoring escape sequences.
pub fn visible_width(line: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(line).as_str())
}

/// Foreground escape for a 256-color palette index.
pub fn color_escape(index: u8) -> String {
    format!("\x1b[38;5;{}m", index)
}

/// Split an optional `#/..;..` color header off the first line of ascii art.
/// The header is stripped from the rendered art whether or not its colors end
/// up being used.
pub fn split_color_header(art: &str) -> (Option<&str>, &str) {
    let Some(rest) = art.strip_prefix(HEADER_PREFIX) else {
        return (None, art);
    };
    match rest.split_once('\n') {
        Some((header, body)) => (Some(header), body),
        None => (Some(rest), ""),
    }
}

/// Ordered map from color slot to ANSI escape sequence.
pub struct ColorMap {
    slots: Vec<String>,
}

impl ColorMap {
    /// Build the map for this run. `header` is the embedded art header (minus
    /// its `#/` prefix) when present; `config_colors` are the configured
    /// 256-color indices. The header wins unless `force_config` is set.
    pub fn build(header: Option<&str>, config_colors: &[u8], force_config: bool) -> Result<ColorMap> {
        let mut slots = vec![RESET.to_string()];

        match header {
            Some(fields) if !force_config => {
                for field in fields.split(';') {
                    let index: u8 = field.trim().parse().map_err(|_| {
                        GalefetchError::Config(format!(
                            "invalid ascii art color header field '{}'",
                            field
                        ))
                    })?;
                    slots.push(color_escape(index));
                }
            }
            _ => {
                for &index in config_colors {
                    slots.push(color_escape(index));
                }
            }
        }

        Ok(ColorMap { slots })
    }

    /// Escape sequence for `slot`. Slots beyond the populated range resolve
    /// to reset; color underflow is never fatal.
    pub fn escape(&self, slot: usize) -> &str {
        self.slots.get(slot).map(String::as_str).unwrap_or(RESET)
    }

    /// Expand decimal color-slot placeholders in `text`. Non-numeric names
    /// resolve to empty, matching the module placeholder semantics.
    pub fn apply(&self, text: &str) -> String {
        template::expand(text, |name| {
            Some(match name.parse::<usize>() {
                Ok(slot) => self.escape(slot).to_string(),
                Err(_) => String::new(),
            })
        })
    }
}
