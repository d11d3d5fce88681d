//! Flow domain: deterministic avatar references derived from a character name.

use url::Url;

/// Avatar generation service; the name is passed as the `seed` query parameter.
pub const DEFAULT_AVATAR_ENDPOINT: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Build the avatar address for a name. Same name, same address.
///
/// The name is form-encoded into the `seed` query parameter. Fails only when
/// `endpoint` is not an absolute URL.
pub fn avatar_url(endpoint: &str, name: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(endpoint, &[("seed", name)])
}

/// Stable palette slot for a name, used for the local avatar badge.
/// FNV-1a so the result never changes between builds.
pub fn avatar_palette_index(name: &str, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash % palette_len as u64) as usize
}

/// First character of the name, uppercased, for the badge label.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
