//! Masking helpers for secrets and personal data in log output.
//!
//! The crate logs through the `log` facade and never installs a logger.
//! Set `REVEAL_PII=true` (or `1`) to print values unmasked while debugging.

use std::sync::OnceLock;

fn reveal_pii() -> bool {
    static REVEAL_PII_CACHE: OnceLock<bool> = OnceLock::new();

    *REVEAL_PII_CACHE.get_or_init(|| {
        std::env::var("REVEAL_PII")
            .map(|v| {
                let val = v.to_lowercase();
                val == "true" || val == "1"
            })
            .unwrap_or(false)
    })
}

/// Masks a string (an API key, a wallet address) showing only its first
/// and last six characters. If REVEAL_PII is set, returns it unchanged.
pub fn mask_string(s: &str) -> String {
    if reveal_pii() {
        return s.to_string();
    }

    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}
