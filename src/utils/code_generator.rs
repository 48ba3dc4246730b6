//! Short code generation.

use uuid::Uuid;

/// Length of a generated code: a hyphenated UUID.
pub const CODE_LENGTH: usize = 36;

/// Generates a random short code.
///
/// The code is a version 4 UUID (122 random bits) in canonical hyphenated
/// form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`. Collisions are not
/// checked; the key space makes them negligible.
pub fn generate_code() -> String {
    Uuid::new_v4().to_string()
}
