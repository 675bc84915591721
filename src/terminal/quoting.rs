//! Quoting for the shells and script hosts commands are embedded in
//!
//! None of these functions fail: any input string, however odd, produces a
//! literal that the target parser reads back as exactly that string. No
//! function here lets an input quote character close the surrounding literal.

/// Double-quoted POSIX shell word: `"..."` with `\ " $ `` ` escaped.
pub fn sh_double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Single-quoted POSIX shell word: `'...'` with `'` written as `'\''`.
pub fn sh_single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// AppleScript string literal: `"..."` with `\` and `"` escaped.
pub fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// PowerShell single-quoted string: `'...'` with `'` doubled.
pub fn powershell_single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Windows Terminal splits its command line into tabs at every bare `;`.
pub fn wt_escape(s: &str) -> String {
    s.replace(';', r"\;")
}

/// Remove characters that Windows command-line parsing cannot carry inside a
/// quoted argument. Only used for window titles, which are cosmetic.
pub fn strip_double_quotes(s: &str) -> String {
    s.replace('"', "'")
}

/// Shell snippet that sets the window title with an OSC 0 sequence.
///
/// The title is a printf argument, not part of the format string, so `%` and
/// `\` in it are printed literally.
pub fn osc_title_command(title: &str) -> String {
    format!(r"printf '\033]0;%s\007' {}", sh_single_quote(title))
}
