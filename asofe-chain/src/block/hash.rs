use std::fmt;

use hex::{FromHex, ToHex};

/// A hash of a block header.
///
/// Hashing is done by the block crates, this type only carries the bytes
/// that the chain parameters pin: genesis hashes, checkpoints, and
/// proof-of-work limits.
///
/// Like `zcashd`, hashes are displayed and parsed in big-endian byte order,
/// the reverse of their internal little-endian order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(proptest_derive::Arbitrary))]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Return the hash bytes in big-endian byte-order suitable for printing out byte by byte.
    pub fn bytes_in_display_order(&self) -> [u8; 32] {
        let mut reversed_bytes = self.0;
        reversed_bytes.reverse();
        reversed_bytes
    }

    /// Convert bytes in big-endian byte-order into a [`Hash`].
    pub fn from_bytes_in_display_order(bytes_in_display_order: &[u8; 32]) -> Hash {
        let mut internal_byte_order = *bytes_in_display_order;
        internal_byte_order.reverse();

        Hash(internal_byte_order)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hex::<String>())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("block::Hash")
            .field(&self.encode_hex::<String>())
            .finish()
    }
}

impl ToHex for &Hash {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex_upper()
    }
}

impl ToHex for Hash {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex_upper()
    }
}

impl FromHex for Hash {
    type Error = <[u8; 32] as FromHex>::Error;

    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let hash = <[u8; 32]>::from_hex(hex)?;

        Ok(Self::from_bytes_in_display_order(&hash))
    }
}

impl std::str::FromStr for Hash {
    type Err = hex::FromHexError;

    /// Parses a big-endian hex string, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_round_trip() {
        asofe_test::init();

        let hex = "0000363adb70e2cee5171918dc4ced36fa712abbb057b4807fff56d598b74be4";
        let hash: Hash = hex.parse().expect("hard-coded hash parses");

        assert_eq!(hash.0[31], 0x00);
        assert_eq!(hash.0[0], 0xe4);
        assert_eq!(hash.to_string(), hex);
        assert_eq!(
            format!("0x{hex}").parse::<Hash>().expect("prefixed hash parses"),
            hash
        );
        assert!("0abc".parse::<Hash>().is_err());
    }
}
