use super::helpers::*;
use anyhow::Result;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::thread_rng;
use tlwire_schema::build_registry;
use tlwire_types::registry::Registry;
use tlwire_types::types::encode;

/// Decodes objects one after another until `stream` is used up.
fn decode_stream(registry: &Registry, stream: &[u8]) -> Result<Vec<Vec<u8>>> {
    let mut reencoded = vec![];
    let mut pos = 0;
    while pos < stream.len() {
        let (obj, consumed) = registry.decode_any(&stream[pos..])?;
        assert_eq!(registry.skip_len(&stream[pos..])?, consumed);
        reencoded.push(encode(&*obj));
        pos += consumed;
    }
    Ok(reencoded)
}

#[test]
fn back_to_back_objects() -> Result<()> {
    let registry = build_registry()?;
    let mut encodings = gen_objects()
        .iter()
        .map(|obj| encode(&**obj))
        .collect::<Vec<_>>();

    for _ in 0..4 {
        encodings.shuffle(&mut thread_rng());
        let stream = encodings.iter().cloned().concat();
        assert_eq!(decode_stream(&registry, &stream)?, encodings);
    }

    /* Every pair, in both orders. */
    for pair in encodings.iter().permutations(2) {
        let stream = pair.iter().copied().cloned().concat();
        let decoded = decode_stream(&registry, &stream)?;
        assert_eq!(decoded.iter().collect::<Vec<_>>(), pair);
    }

    Ok(())
}

#[test]
fn trailing_bytes_are_left_for_the_caller() -> Result<()> {
    let registry = build_registry()?;
    let mut bytes = encode(&gen_invite_full());
    let len = bytes.len();
    bytes.extend([0xff; 8]);

    let (_, consumed) = registry.decode_any(&bytes)?;
    assert_eq!(consumed, len);
    assert!(registry
        .decode_as::<tlwire_schema::types::ChatInvite>(&bytes)
        .is_err());

    Ok(())
}
