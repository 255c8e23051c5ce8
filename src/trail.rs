//! Trail identifiers correlating records from one shipper.

use rand::Rng;

/// Length of a generated trail in hex characters.
pub const TRAIL_LEN: usize = 32;

/// Generate a fresh trail from several random words.
pub fn generate_trail() -> String {
    let mut rng = rand::thread_rng();
    let words: [u32; 4] = rng.r#gen();
    words.iter().map(|w| format!("{w:08x}")).collect()
}

/// Use `configured` if it is non-empty, otherwise generate one.
pub fn resolve_trail(configured: Option<&str>) -> String {
    match configured {
        Some(trail) if !trail.is_empty() => trail.to_owned(),
        _ => generate_trail(),
    }
}
