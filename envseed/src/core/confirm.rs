//! Overwrite confirmation answers.

/// The only answer that grants an overwrite.
pub const ACCEPT: &str = "y";

/// Interpret one raw line read from the operator.
///
/// Only the line terminator (`\n` or `\r\n`) is stripped; the remainder must
/// be exactly `y`. `None` means end of input and never confirms.
pub fn is_confirmed(raw: Option<&str>) -> bool {
    let Some(line) = raw else {
        return false;
    };
    let answer = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line);
    answer == ACCEPT
}
