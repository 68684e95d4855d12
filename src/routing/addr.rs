//! Dotted-quad address and prefix parsing.
//!
//! # Responsibilities
//! - Parse `a.b.c.d` and `a.b.c.d/len` text into prefix bits
//! - Validate octets (0-255) and prefix length (0-32)
//! - Provide MSB-first bit iteration for trie descent
//!
//! # Design Decisions
//! - Bits are packed into a u32, not materialized as a string
//! - A bare address yields all 32 bits (the full lookup path)
//! - Validation failures are typed errors, never panics

use std::net::Ipv4Addr;
use thiserror::Error;

/// Errors raised while parsing an address or prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// An octet was empty, non-numeric, or outside 0-255.
    #[error("invalid octet in address {0:?}")]
    InvalidOctet(String),

    /// The address did not have exactly four octets.
    #[error("expected four octets in {text:?}, got {found}")]
    OctetCount { text: String, found: usize },

    /// The prefix length was non-numeric or greater than 32.
    #[error("invalid prefix length {0:?}")]
    InvalidPrefixLength(String),
}

/// Up to 32 leading address bits plus their count.
///
/// Bit order is fixed: most significant bit of the first octet first,
/// which is the order the trie consumes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixBits {
    bits: u32,
    len: u8,
}

impl PrefixBits {
    /// Build from an already-parsed address and prefix length.
    ///
    /// Callers must keep `len` within 0-32; `parse` is the checked entry
    /// point for untrusted text.
    pub fn from_network(network: Ipv4Addr, len: u8) -> Self {
        debug_assert!(len <= 32);
        Self {
            bits: u32::from(network),
            len,
        }
    }

    /// Number of significant leading bits.
    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bit at `index`, where 0 is the most significant bit of the
    /// first octet. `index` must be below `len()`.
    pub fn bit(&self, index: u8) -> bool {
        debug_assert!(index < self.len);
        self.bits & (1 << (31 - index)) != 0
    }

    /// Iterate the significant bits in descent order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// The network address with bits past the prefix length zeroed.
    pub fn network(&self) -> Ipv4Addr {
        let mask = u32::MAX
            .checked_shl(u32::from(32 - self.len))
            .unwrap_or(0);
        Ipv4Addr::from(self.bits & mask)
    }
}

/// Parse `a.b.c.d` or `a.b.c.d/len` into prefix bits.
///
/// Without a `/len` suffix the full 32 bits are returned.
pub fn parse(text: &str) -> Result<PrefixBits, AddressError> {
    let (addr_part, len_part) = match text.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (text, None),
    };

    let mut bits: u32 = 0;
    let mut count = 0usize;
    for piece in addr_part.split('.') {
        let octet: u8 = piece
            .parse()
            .map_err(|_| AddressError::InvalidOctet(text.to_string()))?;
        bits = (bits << 8) | u32::from(octet);
        count += 1;
    }
    if count != 4 {
        return Err(AddressError::OctetCount {
            text: text.to_string(),
            found: count,
        });
    }

    let len = match len_part {
        Some(raw) => {
            let len: u8 = raw
                .parse()
                .map_err(|_| AddressError::InvalidPrefixLength(raw.to_string()))?;
            if len > 32 {
                return Err(AddressError::InvalidPrefixLength(raw.to_string()));
            }
            len
        }
        None => 32,
    };

    Ok(PrefixBits { bits, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_address_as_full_path() {
        let bits = parse("203.0.113.9").unwrap();
        assert_eq!(bits.len(), 32);
        assert_eq!(bits.network(), Ipv4Addr::new(203, 0, 113, 9));
    }

    #[test]
    fn parses_prefix_and_masks_host_bits() {
        let bits = parse("10.1.2.3/16").unwrap();
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.network(), Ipv4Addr::new(10, 1, 0, 0));
    }

    #[test]
    fn bit_order_is_msb_first() {
        let bits = parse("128.0.0.1").unwrap();
        assert!(bits.bit(0));
        assert!(!bits.bit(1));
        assert!(bits.bit(31));
    }

    #[test]
    fn roundtrips_dotted_quad() {
        for text in ["0.0.0.0", "10.0.0.5", "192.168.1.255", "255.255.255.255"] {
            let bits = parse(text).unwrap();
            assert_eq!(bits.network().to_string(), text);
        }
    }

    #[test]
    fn rejects_octet_out_of_range() {
        assert!(matches!(parse("256.0.0.1"), Err(AddressError::InvalidOctet(_))));
        assert!(matches!(parse("10.0.-1.1"), Err(AddressError::InvalidOctet(_))));
        assert!(matches!(parse("a.b.c.d"), Err(AddressError::InvalidOctet(_))));
    }

    #[test]
    fn rejects_wrong_octet_count() {
        assert!(matches!(
            parse("10.0.0"),
            Err(AddressError::OctetCount { found: 3, .. })
        ));
        assert!(matches!(
            parse("1.2.3.4.5"),
            Err(AddressError::OctetCount { found: 5, .. })
        ));
    }

    #[test]
    fn rejects_bad_prefix_length() {
        assert!(matches!(
            parse("10.0.0.0/33"),
            Err(AddressError::InvalidPrefixLength(_))
        ));
        assert!(matches!(
            parse("10.0.0.0/x"),
            Err(AddressError::InvalidPrefixLength(_))
        ));
    }

    #[test]
    fn zero_length_prefix_is_empty() {
        let bits = parse("0.0.0.0/0").unwrap();
        assert_eq!(bits.len(), 0);
        assert!(bits.iter().next().is_none());
        assert_eq!(bits.network(), Ipv4Addr::UNSPECIFIED);
    }
}
