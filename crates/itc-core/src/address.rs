//! Intelchain account address checks.

use bech32::Variant;

/// Human-readable part plus separator of every account address.
pub const ADDRESS_PREFIX: &str = "one1";

/// Whether `address` is a well-formed `one1…` bech32 account address.
///
/// Only the original bech32 checksum is accepted; bech32m strings are not
/// account addresses.
pub fn is_valid_address(address: &str) -> bool {
    if !address.starts_with(ADDRESS_PREFIX) {
        return false;
    }
    matches!(bech32::decode(address), Ok((_, _, Variant::Bech32)))
}
