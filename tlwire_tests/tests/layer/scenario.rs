use super::helpers::*;
use anyhow::Result;
use tlwire_schema::types::*;
use tlwire_schema::{build_registry, build_registry_with_limits};
use tlwire_types::error::{DecodeError, Malformation};
use tlwire_types::limits::DecodeLimits;
use tlwire_types::types::encode;

#[test]
fn invite_peek_layout() -> Result<()> {
    let registry = build_registry()?;
    let peek = ChatInvitePeek {
        chat: gen_chat_empty(),
        expires: 3600,
    };

    let bytes = encode(&peek);
    let mut expected = vec![0xb0, 0x5c, 0x69, 0x61];
    expected.extend([0x65, 0x28, 0x56, 0x29]);
    expected.extend(42i64.to_le_bytes());
    expected.extend([0x10, 0x0e, 0, 0]);
    assert_eq!(bytes, expected);

    let (obj, consumed) = registry.decode_any(&bytes)?;
    assert_eq!(consumed, 20);
    assert_eq!(obj.downcast_ref::<ChatInvitePeek>(), Some(&peek));

    Ok(())
}

#[test]
fn check_invite_request_layout() {
    let req = CheckChatInvite {
        hash: String::from("abcde"),
    };
    let bytes = encode(&req);
    let mut expected = vec![0xbb, 0xb1, 0xad, 0x3e];
    expected.extend([5, b'a', b'b', b'c', b'd', b'e', 0, 0]);
    assert_eq!(bytes, expected);
    assert_eq!(CheckChatInvite::RETURNS, AnyChatInvite::TL_NAME);
}

#[test]
fn limits_apply_to_layer_objects() -> Result<()> {
    let chats = encode(&MessagesChats { chats: gen_chats() });
    let registry = build_registry_with_limits(DecodeLimits {
        max_vector_len: 2,
        ..DecodeLimits::default()
    })?;
    let expected = DecodeError::Malformed(Malformation::CountExceedsLimit {
        declared: 5,
        limit: 2,
    });
    assert_eq!(registry.decode_any(&chats).map(|_| ()), Err(expected.clone()));
    assert_eq!(registry.skip_len(&chats), Err(expected));

    let photo = encode(&gen_photo_stripped());
    let registry = build_registry_with_limits(DecodeLimits {
        max_bytes_len: 100,
        ..DecodeLimits::default()
    })?;
    assert_eq!(
        registry.decode_as::<AnyPhotoSize>(&photo),
        Err(DecodeError::Malformed(Malformation::LengthExceedsLimit {
            declared: 700,
            limit: 100,
        }))
    );

    let already = encode(&ChatInviteAlready {
        chat: gen_chat_empty(),
    });
    let shallow = build_registry_with_limits(DecodeLimits {
        max_depth: 1,
        ..DecodeLimits::default()
    })?;
    assert_eq!(
        shallow.decode_any(&already).map(|_| ()),
        Err(DecodeError::Malformed(Malformation::DepthExceedsLimit(1)))
    );
    let deep_enough = build_registry_with_limits(DecodeLimits {
        max_depth: 2,
        ..DecodeLimits::default()
    })?;
    assert_eq!(deep_enough.skip_len(&already)?, already.len());

    Ok(())
}

#[test]
fn registry_is_shared_across_threads() -> Result<()> {
    let registry = build_registry()?;
    let encodings = gen_objects()
        .iter()
        .map(|obj| encode(&**obj))
        .collect::<Vec<_>>();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for bytes in encodings.iter() {
                    let (obj, consumed) = registry.decode_any(bytes).unwrap();
                    assert_eq!(consumed, bytes.len());
                    assert_eq!(&encode(&*obj), bytes);
                }
            });
        }
    });

    Ok(())
}
