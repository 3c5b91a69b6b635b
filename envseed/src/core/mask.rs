//! Secret masking for operator-facing output and logs.

const VISIBLE: usize = 6;

/// Show the first and last six characters around `...`.
///
/// Values too short to hide anything between the two ends are fully hidden.
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= VISIBLE * 2 {
        return "***".to_string();
    }
    let head: String = chars[..VISIBLE].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE..].iter().collect();
    format!("{head}...{tail}")
}
