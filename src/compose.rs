//! Two-column assembly of colorized ascii art and module output.
//!
//! Alignment is computed on visible width (escape sequences excluded), never
//! on raw string length. Colors set on one art line are re-asserted on the
//! following art lines because ANSI color state does not reliably survive
//! line boundaries on every terminal this tool targets.

use crate::color::{visible_width, RESET};
use regex::Regex;
use std::sync::OnceLock;

/// Fixed gap between the art column and the information column.
pub const COLUMN_GAP: usize = 5;

fn color_carry_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1b\[38;5;[0-9]+m").unwrap())
}

/// Merge the art column and the content column into one aligned block.
/// Produces `max(ascii_lines.len(), content_lines.len())` rows, trims
/// trailing whitespace-only rows and appends an unconditional reset.
pub fn compose(ascii_lines: &[String], content_lines: &[String]) -> String {
    let max_width = ascii_lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let rows = ascii_lines.len().max(content_lines.len());

    let mut carry = String::new();
    let mut out = String::new();

    for row in 0..rows {
        let mut line = String::new();

        match ascii_lines.get(row) {
            Some(art) => {
                line.push_str(&carry);
                line.push_str(art);
                if let Some(escape) = color_carry_pattern().find_iter(art).last() {
                    carry = escape.as_str().to_string();
                }
                for _ in visible_width(art)..max_width + COLUMN_GAP {
                    line.push(' ');
                }
            }
            None => {
                // Past the end of the art: plain spaces, no color carry.
                for _ in 0..max_width + COLUMN_GAP {
                    line.push(' ');
                }
            }
        }

        if let Some(content) = content_lines.get(row) {
            line.push_str(RESET);
            line.push_str(content);
        }

        out.push_str(&line);
        out.push('\n');
    }

    let mut out = out
        .trim_end_matches(|c| c == '\n' || c == '\t' || c == ' ')
        .to_string();
    out.push_str(RESET);
    out
}
