/// Escape text for embedding inside a double-quoted AppleScript string.
///
/// Guarantee: `\` becomes `\\` and `"` becomes `\"`. Nothing else is touched.
/// Newlines, tabs, `$`, backticks and other shell metacharacters pass through
/// as-is. The generated script only ever hands the value to the shell through
/// `quoted form of`, so shell metacharacters are inert. A newline is kept
/// inside the AppleScript string and ends up in the path given to `cd`,
/// which then names a folder that does not exist.
pub fn escape_applescript_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}
