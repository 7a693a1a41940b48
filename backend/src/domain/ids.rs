//! Random identifier issuance for share links.
//!
//! Slugs and owner keys are nanoid-style strings over a 64-symbol alphabet.
//! There is no collision retry; a duplicate insert surfaces as a store
//! error.

use rand::Rng;

/// Alphabet shared by slugs and owner keys (URL-safe, 64 symbols).
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of the public share slug.
pub const SLUG_LEN: usize = 6;

/// Length of the private owner key.
pub const OWNER_KEY_LEN: usize = 12;

/// Generate a public share slug.
pub fn generate_slug() -> String {
    random_id(SLUG_LEN)
}

/// Generate a private owner key.
///
/// The key is a bearer secret: it authorises listing and mutating the
/// owner's recommendations and must never be logged or echoed outside the
/// creation response.
pub fn generate_owner_key() -> String {
    random_id(OWNER_KEY_LEN)
}

fn random_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let index = rng.gen_range(0..ALPHABET.len());
            char::from(ALPHABET[index])
        })
        .collect()
}
