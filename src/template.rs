//! Shell-style placeholder expansion.
//!
//! Formats use `$NAME` and `${NAME}` placeholders. The resolver decides what
//! a name expands to; returning `None` leaves the placeholder text untouched
//! so a later pass can pick it up. Resolver output is never re-scanned, and
//! anything that does not parse as a placeholder (`$$`, `$ `, an unterminated
//! `${`) is copied through verbatim.

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Expand every placeholder in `template` through `resolver`.
pub fn expand<F>(template: &str, resolver: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(braced) = tail.strip_prefix('{') {
            let Some(end) = braced.find('}') else {
                // Unterminated brace, keep the rest verbatim.
                out.push_str(&rest[pos..]);
                return out;
            };
            let name = &braced[..end];
            // "$" + "{" + name + "}"
            let consumed = pos + 2 + end + 1;
            if name.is_empty() {
                out.push_str(&rest[pos..consumed]);
            } else {
                match resolver(name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[pos..consumed]),
                }
            }
            rest = &rest[consumed..];
        } else {
            let len: usize = tail
                .chars()
                .take_while(|&c| is_name_char(c))
                .map(char::len_utf8)
                .sum();
            if len == 0 {
                // "$$", "$ " or a trailing "$": not a placeholder.
                out.push('$');
                match tail.chars().next() {
                    Some(c) => {
                        out.push(c);
                        rest = &rest[pos + 1 + c.len_utf8()..];
                    }
                    None => rest = "",
                }
            } else {
                let name = &tail[..len];
                match resolver(name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[pos..pos + 1 + len]),
                }
                rest = &rest[pos + 1 + len..];
            }
        }
    }

    out.push_str(rest);
    out
}
