//! Comment stripping for JSON-with-comments documents.
//!
//! `serde_json` only accepts strict JSON.  The config file is written with
//! `//` line comments, so the text is passed through [`strip_line_comments`]
//! before parsing.  Only line comments are recognised; a `//` inside a string
//! literal (for example a URL) is left alone.  A leading UTF-8 byte order
//! mark, as written by Windows Notepad, is dropped as well.

/// Removes a leading byte order mark and every `//` line comment that is not
/// inside a string literal.
///
/// The newline that ends a comment is kept so parser error positions still
/// point at the right line.
pub fn strip_line_comments(input: &str) -> String {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                // Skip to end of line, keep the newline itself.
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}
