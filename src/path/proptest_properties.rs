//! Property-based tests using `proptest` for the path codec.
//!
//! Covers the codec's round-trip property: for any well-formed path of
//! *n* hops, decoding then skipping *n* times recovers every hop in the
//! original order and leaves exactly one hop's worth of remainder.

use proptest::prelude::*;

use crate::domain::{AssetId, Selector};
use crate::path::HopPath;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn asset_strategy() -> impl Strategy<Value = AssetId> {
    proptest::array::uniform20(any::<u8>()).prop_map(AssetId::from_bytes)
}

fn selector_strategy() -> impl Strategy<Value = Selector> {
    proptest::array::uniform3(any::<u8>()).prop_map(Selector::from_bytes)
}

fn hops_strategy() -> impl Strategy<Value = (Vec<AssetId>, Vec<Selector>)> {
    (1usize..=8).prop_flat_map(|hops| {
        (
            proptest::collection::vec(asset_strategy(), hops + 1),
            proptest::collection::vec(selector_strategy(), hops),
        )
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Encoding then walking the path recovers every hop in order.
    #[test]
    fn walk_recovers_all_hops((assets, selectors) in hops_strategy()) {
        let path = HopPath::encode(&assets, &selectors).expect("well-formed encode");
        prop_assert_eq!(path.hop_count(), selectors.len());

        let mut current = path;
        for i in 0..selectors.len() {
            let (a_in, a_out, sel) = current.decode_first_hop().expect("decodable hop");
            prop_assert_eq!(a_in, assets[i]);
            prop_assert_eq!(a_out, assets[i + 1]);
            prop_assert_eq!(sel, selectors[i]);

            if i + 1 < selectors.len() {
                prop_assert!(current.has_multiple_hops());
                current = current.skip_token().expect("remainder holds a hop");
            } else {
                prop_assert!(!current.has_multiple_hops());
            }
        }
        prop_assert_eq!(current.hop_count(), 1);
    }

    /// The encoded length is exactly the packed layout size.
    #[test]
    fn encoded_length_is_packed((assets, selectors) in hops_strategy()) {
        let path = HopPath::encode(&assets, &selectors).expect("well-formed encode");
        prop_assert_eq!(path.len(), selectors.len() * 23 + 20);
    }

    /// Byte inputs that do not align to hop boundaries never decode.
    #[test]
    fn misaligned_bytes_never_decode(len in 0usize..200) {
        prop_assume!(len < 43 || (len - 20) % 23 != 0);
        let path = HopPath::from_bytes(vec![0u8; len]);
        prop_assert!(path.decode_first_hop().is_err());
    }
}
