use crate::*;

/// Used to generate a unique prefix in our storage collections (this is to avoid data collisions)
pub(crate) fn hash_string(string: &str) -> CryptoHash {
    env::sha256_array(string.as_bytes())
}

/// Convert a yoctoNEAR amount into a human readable $NEAR string for logs
pub(crate) fn yocto_to_near(yocto: u128) -> f64 {
    yocto as f64 / 1_000_000_000_000_000_000_000_000f64
}

/// Where a paginated view starts. Indices past `u64::MAX` are clamped rather than wrapped so they
/// land past the end of any collection.
pub(crate) fn pagination_start(from_index: Option<U128>) -> u64 {
    from_index
        .map(|i| u64::try_from(i.0).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Convert a page bound to `usize` without truncating on 32 bit targets
pub(crate) fn page_bound(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
