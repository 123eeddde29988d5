use super::helpers::*;
use anyhow::Result;
use tlwire_schema::build_registry;
use tlwire_schema::types::*;
use tlwire_types::error::DecodeError;
use tlwire_types::serde::ConstructorId;
use tlwire_types::types::{encode, Object};

#[test]
fn every_object_round_trips() -> Result<()> {
    let registry = build_registry()?;
    for obj in gen_objects() {
        let bytes = encode(&*obj);
        let (decoded, consumed) = registry.decode_any(&bytes)?;
        assert_eq!(consumed, bytes.len(), "{obj:?}");
        assert_eq!(decoded.constructor_id(), obj.constructor_id());
        assert_eq!(decoded.qualified_name(), obj.qualified_name());
        assert_eq!(encode(&*decoded), bytes, "{obj:?}");
    }
    Ok(())
}

#[test]
fn typed_round_trips() -> Result<()> {
    let registry = build_registry()?;

    for chat in gen_chats() {
        assert_eq!(registry.decode_as::<AnyChat>(&encode(&chat))?, chat);
    }

    for invite in [gen_invite_minimal(), gen_invite_full()] {
        assert_eq!(registry.decode_as::<ChatInvite>(&encode(&invite))?, invite);
        let any = AnyChatInvite::from(invite);
        assert_eq!(registry.decode_as::<AnyChatInvite>(&encode(&any))?, any);
    }

    let chats = MessagesChats { chats: gen_chats() };
    assert_eq!(registry.decode_as::<MessagesChats>(&encode(&chats))?, chats);

    for b in [true, false] {
        assert_eq!(registry.decode_as::<bool>(&encode(&b))?, b);
    }

    Ok(())
}

#[test]
fn encoding_is_deterministic_and_aligned() {
    for obj in gen_objects() {
        let bytes = encode(&*obj);
        assert_eq!(bytes, encode(&*obj));
        assert_eq!(bytes.len() % 4, 0, "{obj:?}");
    }
}

#[test]
fn absent_optional_fields_take_no_space() {
    let chat = Chat {
        id: 1,
        title: String::from("abc"),
        ..Chat::default()
    };
    let bare = encode(&chat);
    // id, flags, id, title, participants_count, date, version
    assert_eq!(bare.len(), 4 + 4 + 8 + 4 + 4 + 4 + 4);
    assert_eq!(bare[4..8], [0, 0, 0, 0]);

    let migrated = encode(&Chat {
        migrated_to: Some(2),
        ..chat.clone()
    });
    assert_eq!(migrated.len(), bare.len() + 8);
    assert_eq!(migrated[4..8], [0x40, 0, 0, 0]);

    /* Flag-only fields set a bit and nothing else. */
    let creator = encode(&Chat {
        creator: true,
        deactivated: true,
        ..chat
    });
    assert_eq!(creator.len(), bare.len());
    assert_eq!(creator[4..8], [0x21, 0, 0, 0]);

    let invite = encode(&gen_invite_minimal());
    // id, flags, "Hikers", participants_count, request_needed
    assert_eq!(invite.len(), 4 + 4 + 8 + 4 + 4);
    assert_eq!(invite[4..8], [0, 0, 0, 0]);
}

#[test]
fn every_strict_prefix_fails() -> Result<()> {
    let registry = build_registry()?;
    for obj in gen_objects() {
        let bytes = encode(&*obj);
        for cut in 0..bytes.len() {
            let prefix = &bytes[..cut];
            for res in [
                registry.decode_any(prefix).map(|_| ()),
                registry.skip_len(prefix).map(|_| ()),
            ] {
                match res {
                    Err(DecodeError::Truncated { .. }) | Err(DecodeError::Malformed(_)) => {}
                    other => panic!("{obj:?} cut at {cut}: {other:?}"),
                }
            }
        }
    }
    Ok(())
}

#[test]
fn skip_len_equals_encoded_len() -> Result<()> {
    let registry = build_registry()?;
    for obj in gen_objects() {
        let bytes = encode(&*obj);
        assert_eq!(registry.skip_len(&bytes)?, bytes.len(), "{obj:?}");
    }
    Ok(())
}

#[test]
fn unknown_constructor_is_reported() -> Result<()> {
    let registry = build_registry()?;
    let unknown = ConstructorId(0xdeadbeef);

    let mut top = encode(&gen_chat_empty());
    top[..4].copy_from_slice(&unknown.to_le_bytes());
    assert_eq!(
        registry.decode_any(&top).map(|_| ()),
        Err(DecodeError::UnknownConstructor(unknown))
    );
    assert_eq!(
        registry.skip_len(&top),
        Err(DecodeError::UnknownConstructor(unknown))
    );

    /* Nested one level down. */
    let mut nested = encode(&ChatInviteAlready {
        chat: gen_chat_empty(),
    });
    nested[4..8].copy_from_slice(&unknown.to_le_bytes());
    assert_eq!(
        registry.decode_as::<ChatInviteAlready>(&nested),
        Err(DecodeError::UnknownConstructor(unknown))
    );

    Ok(())
}
