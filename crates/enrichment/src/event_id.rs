//! Random event id generation.

use rand::rngs::OsRng;
use rand::Rng;

/// Length of a generated event id.
pub const EVENT_ID_LEN: usize = 5;

/// Generate a random uppercase alphabetic event id.
///
/// Draws from the OS random source. Used for `itsm_event_id` when no
/// forced id is configured; each alert in a batch gets its own draw.
#[must_use]
pub fn generate_event_id() -> String {
    let mut rng = OsRng;
    (0..EVENT_ID_LEN)
        .map(|_| char::from(b'A' + rng.gen_range(0..26)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_length_and_charset() {
        for _ in 0..100 {
            let id = generate_event_id();
            assert_eq!(id.len(), EVENT_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_uppercase()), "{id}");
        }
    }
}
