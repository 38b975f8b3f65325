//! Packed multi-hop path encoding.
//!
//! A hop path is a tightly packed byte sequence alternating asset
//! identifiers and pool selectors:
//!
//! ```text
//! asset₀ (20 bytes) ‖ selector₀ (3 bytes) ‖ asset₁ (20 bytes) ‖ … ‖ assetₙ
//! ```
//!
//! A well-formed path holds at least two assets and one selector (one
//! hop, 43 bytes).  Construction from raw bytes is deliberately
//! unvalidated — paths arrive from callers as opaque data — and every
//! decoding operation checks the layout it needs, failing with
//! [`RouterError::PathTooShort`] on malformed input.
//!
//! # Decoding Invariant
//!
//! For any well-formed path of *n* hops, applying
//! [`decode_first_hop`](HopPath::decode_first_hop) then
//! [`skip_token`](HopPath::skip_token) exactly *n* times recovers every
//! hop in the original order and consumes the path completely.

use core::fmt;

use crate::domain::{AssetId, Selector};
use crate::error::RouterError;

/// One hop's worth of bytes: an asset identifier plus a selector.
const HOP: usize = AssetId::LEN + Selector::LEN;

/// Minimum length of a well-formed path: two assets and one selector.
const MIN_PATH: usize = HOP + AssetId::LEN;

/// Minimum length of a path holding at least two hops.
const MIN_MULTI_PATH: usize = 2 * HOP + AssetId::LEN;

/// A packed sequence of hops, immutable once constructed for a call.
///
/// # Examples
///
/// ```
/// use meander::domain::{AssetId, Selector};
/// use meander::path::HopPath;
///
/// let a = AssetId::from_bytes([1u8; 20]);
/// let b = AssetId::from_bytes([2u8; 20]);
/// let selector = Selector::from_u32(500).expect("fits");
///
/// let path = HopPath::encode_single_hop(a, selector, b);
/// let (asset_in, asset_out, sel) = path.decode_first_hop().expect("well-formed");
/// assert_eq!((asset_in, asset_out, sel), (a, b, selector));
/// assert!(!path.has_multiple_hops());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HopPath(Vec<u8>);

impl HopPath {
    /// Wraps raw caller-supplied bytes without validation.
    ///
    /// Malformed input is surfaced later by the decoding operations.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Encodes a single-hop path `asset_in ‖ selector ‖ asset_out`.
    #[must_use]
    pub fn encode_single_hop(asset_in: AssetId, selector: Selector, asset_out: AssetId) -> Self {
        let mut bytes = Vec::with_capacity(MIN_PATH);
        bytes.extend_from_slice(&asset_in.as_bytes());
        bytes.extend_from_slice(&selector.as_bytes());
        bytes.extend_from_slice(&asset_out.as_bytes());
        Self(bytes)
    }

    /// Encodes a multi-hop path from its assets and selectors.
    ///
    /// The sequences interleave: `assets[i]` and `assets[i + 1]` are the
    /// endpoints of the hop serviced through `selectors[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PathTooShort`] unless
    /// `assets.len() == selectors.len() + 1` with at least one selector.
    pub fn encode(assets: &[AssetId], selectors: &[Selector]) -> crate::error::Result<Self> {
        if selectors.is_empty() || assets.len() != selectors.len() + 1 {
            return Err(RouterError::PathTooShort);
        }
        let mut bytes = Vec::with_capacity(selectors.len() * HOP + AssetId::LEN);
        for (asset, selector) in assets.iter().zip(selectors.iter()) {
            bytes.extend_from_slice(&asset.as_bytes());
            bytes.extend_from_slice(&selector.as_bytes());
        }
        // assets.len() == selectors.len() + 1, so last() exists.
        if let Some(last) = assets.last() {
            bytes.extend_from_slice(&last.as_bytes());
        }
        Ok(Self(bytes))
    }

    /// Returns the raw encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the encoded length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path holds no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the path still holds two or more hops.
    #[must_use]
    pub fn has_multiple_hops(&self) -> bool {
        self.0.len() >= MIN_MULTI_PATH
    }

    /// Returns the number of complete hops encoded in the path.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        if self.0.len() < MIN_PATH {
            return 0;
        }
        (self.0.len() - AssetId::LEN) / HOP
    }

    /// Decodes the leading hop as `(asset_in, asset_out, selector)`.
    ///
    /// For exact-output paths, which are authored output-to-input, the
    /// caller reinterprets the tuple as `(asset_out, asset_in, selector)`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PathTooShort`] if fewer than one full hop is
    /// present or the length does not align to hop boundaries.
    pub fn decode_first_hop(&self) -> crate::error::Result<(AssetId, AssetId, Selector)> {
        self.check_alignment()?;

        let mut first = [0u8; AssetId::LEN];
        first.copy_from_slice(&self.0[..AssetId::LEN]);

        let mut selector = [0u8; Selector::LEN];
        selector.copy_from_slice(&self.0[AssetId::LEN..HOP]);

        let mut second = [0u8; AssetId::LEN];
        second.copy_from_slice(&self.0[HOP..MIN_PATH]);

        Ok((
            AssetId::from_bytes(first),
            AssetId::from_bytes(second),
            Selector::from_bytes(selector),
        ))
    }

    /// Returns a new path holding only the leading hop.
    ///
    /// Used to scope a settlement context to the hop actually being
    /// executed.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PathTooShort`] on malformed input.
    pub fn first_hop(&self) -> crate::error::Result<Self> {
        self.check_alignment()?;
        Ok(Self(self.0[..MIN_PATH].to_vec()))
    }

    /// Drops the leading asset and selector, making the next hop the new
    /// head.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PathTooShort`] if the remainder would not
    /// hold at least one full hop.
    pub fn skip_token(&self) -> crate::error::Result<Self> {
        if self.0.len() < MIN_MULTI_PATH || (self.0.len() - AssetId::LEN) % HOP != 0 {
            return Err(RouterError::PathTooShort);
        }
        Ok(Self(self.0[HOP..].to_vec()))
    }

    /// Returns the path's first asset identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PathTooShort`] on malformed input.
    pub fn first_asset(&self) -> crate::error::Result<AssetId> {
        let (first, _, _) = self.decode_first_hop()?;
        Ok(first)
    }

    fn check_alignment(&self) -> crate::error::Result<()> {
        if self.0.len() < MIN_PATH || (self.0.len() - AssetId::LEN) % HOP != 0 {
            return Err(RouterError::PathTooShort);
        }
        Ok(())
    }
}

impl fmt::Display for HopPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HopPath({} hops)", self.hop_count())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 20])
    }

    fn selector(value: u32) -> Selector {
        let Ok(s) = Selector::from_u32(value) else {
            panic!("valid selector in test: {value}");
        };
        s
    }

    fn two_hop_path() -> HopPath {
        let Ok(path) = HopPath::encode(
            &[asset(1), asset(2), asset(3)],
            &[selector(500), selector(3_000)],
        ) else {
            panic!("valid two-hop path");
        };
        path
    }

    // -- Encoding -------------------------------------------------------------

    #[test]
    fn single_hop_layout() {
        let path = HopPath::encode_single_hop(asset(1), selector(500), asset(2));
        assert_eq!(path.len(), 43);
        assert_eq!(path.hop_count(), 1);
        assert!(!path.has_multiple_hops());
    }

    #[test]
    fn encode_matches_single_hop_encoding() {
        let Ok(encoded) = HopPath::encode(&[asset(1), asset(2)], &[selector(500)]) else {
            panic!("expected Ok");
        };
        assert_eq!(
            encoded,
            HopPath::encode_single_hop(asset(1), selector(500), asset(2))
        );
    }

    #[test]
    fn encode_rejects_no_selectors() {
        assert_eq!(
            HopPath::encode(&[asset(1), asset(2)], &[]),
            Err(RouterError::PathTooShort)
        );
    }

    #[test]
    fn encode_rejects_mismatched_lengths() {
        assert_eq!(
            HopPath::encode(&[asset(1), asset(2)], &[selector(1), selector(2)]),
            Err(RouterError::PathTooShort)
        );
    }

    // -- Decoding -------------------------------------------------------------

    #[test]
    fn decode_first_hop_of_two() {
        let path = two_hop_path();
        let Ok((a_in, a_out, sel)) = path.decode_first_hop() else {
            panic!("expected Ok");
        };
        assert_eq!(a_in, asset(1));
        assert_eq!(a_out, asset(2));
        assert_eq!(sel, selector(500));
    }

    #[test]
    fn decode_rejects_short_input() {
        let path = HopPath::from_bytes(vec![0u8; 42]);
        assert_eq!(path.decode_first_hop().map(|_| ()), Err(RouterError::PathTooShort));
    }

    #[test]
    fn decode_rejects_misaligned_input() {
        let path = HopPath::from_bytes(vec![0u8; 44]);
        assert_eq!(path.decode_first_hop().map(|_| ()), Err(RouterError::PathTooShort));
    }

    #[test]
    fn decode_rejects_empty_input() {
        let path = HopPath::from_bytes(Vec::new());
        assert_eq!(path.decode_first_hop().map(|_| ()), Err(RouterError::PathTooShort));
        assert_eq!(path.hop_count(), 0);
    }

    // -- skip_token ------------------------------------------------------------

    #[test]
    fn skip_token_advances_to_next_hop() {
        let path = two_hop_path();
        let Ok(rest) = path.skip_token() else {
            panic!("expected Ok");
        };
        assert_eq!(rest.hop_count(), 1);
        let Ok((a_in, a_out, sel)) = rest.decode_first_hop() else {
            panic!("expected Ok");
        };
        assert_eq!(a_in, asset(2));
        assert_eq!(a_out, asset(3));
        assert_eq!(sel, selector(3_000));
    }

    #[test]
    fn skip_token_rejects_single_hop() {
        let path = HopPath::encode_single_hop(asset(1), selector(500), asset(2));
        assert_eq!(path.skip_token().map(|_| ()), Err(RouterError::PathTooShort));
    }

    // -- first_hop / first_asset ------------------------------------------------

    #[test]
    fn first_hop_scopes_to_leading_hop() {
        let path = two_hop_path();
        let Ok(head) = path.first_hop() else {
            panic!("expected Ok");
        };
        assert_eq!(head.hop_count(), 1);
        assert_eq!(
            head,
            HopPath::encode_single_hop(asset(1), selector(500), asset(2))
        );
    }

    #[test]
    fn first_asset_reads_path_head() {
        assert_eq!(two_hop_path().first_asset(), Ok(asset(1)));
    }

    // -- Round trip --------------------------------------------------------------

    #[test]
    fn three_hop_walk_recovers_every_hop() {
        let assets = [asset(1), asset(2), asset(3), asset(4)];
        let selectors = [selector(1), selector(2), selector(3)];
        let Ok(mut path) = HopPath::encode(&assets, &selectors) else {
            panic!("valid path");
        };

        for i in 0..3 {
            let Ok((a_in, a_out, sel)) = path.decode_first_hop() else {
                panic!("expected hop {i}");
            };
            assert_eq!(a_in, assets[i]);
            assert_eq!(a_out, assets[i + 1]);
            assert_eq!(sel, selectors[i]);
            if path.has_multiple_hops() {
                let Ok(rest) = path.skip_token() else {
                    panic!("expected remainder at hop {i}");
                };
                path = rest;
            }
        }
        assert_eq!(path.hop_count(), 1);
        assert!(!path.has_multiple_hops());
    }

    // -- Display -----------------------------------------------------------------

    #[test]
    fn display_reports_hop_count() {
        assert_eq!(format!("{}", two_hop_path()), "HopPath(2 hops)");
    }
}
