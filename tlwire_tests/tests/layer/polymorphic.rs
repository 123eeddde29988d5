use super::helpers::*;
use anyhow::Result;
use tlwire_schema::build_registry;
use tlwire_schema::types::*;
use tlwire_types::error::DecodeError;
use tlwire_types::types::{encode, KnownType};

#[test]
fn decode_any_yields_the_concrete_type() -> Result<()> {
    let registry = build_registry()?;

    let (obj, _) = registry.decode_any(&encode(&gen_chat_bare()))?;
    assert!(obj.is::<Chat>());
    assert!(!obj.is::<ChatEmpty>());

    let (obj, _) = registry.decode_any(&encode(&gen_channel_forbidden()))?;
    let channel = obj.downcast_ref::<ChannelForbidden>().unwrap();
    assert_eq!(channel.until_date, Some(1_700_000_000));

    let (obj, _) = registry.decode_any(&encode(&gen_photo_stripped()))?;
    let photo = obj.downcast::<PhotoStrippedSize>().unwrap();
    assert_eq!(photo.bytes.len(), 700);

    Ok(())
}

#[test]
fn abstract_fields_keep_their_variant() -> Result<()> {
    let registry = build_registry()?;
    for chat in gen_chats() {
        let peek = ChatInvitePeek {
            chat: chat.clone(),
            expires: 1,
        };
        let decoded = registry.decode_as::<ChatInvitePeek>(&encode(&peek))?;
        assert_eq!(decoded.chat, chat);
    }
    Ok(())
}

#[test]
fn wrong_variant_is_rejected() -> Result<()> {
    let registry = build_registry()?;
    let photo = encode(&gen_photo_empty());

    assert_eq!(
        registry.decode_as::<AnyChat>(&photo),
        Err(DecodeError::UnexpectedVariant {
            abstract_type: AnyChat::TL_NAME,
            got: PhotoSizeEmpty::CONSTRUCTOR_ID,
        })
    );

    /* A photo where a chat belongs, one level down. */
    let mut peek = encode(&ChatInvitePeek {
        chat: gen_chat_empty(),
        expires: 1,
    });
    let chat_len = encode(&gen_chat_empty()).len();
    peek.splice(4..4 + chat_len, photo.iter().copied());
    let expected = DecodeError::UnexpectedVariant {
        abstract_type: AnyChat::TL_NAME,
        got: PhotoSizeEmpty::CONSTRUCTOR_ID,
    };
    assert_eq!(registry.decode_any(&peek).map(|_| ()), Err(expected.clone()));
    assert_eq!(registry.skip_len(&peek), Err(expected));

    Ok(())
}

#[test]
fn truncated_wrong_variant_fails_the_same_everywhere() -> Result<()> {
    let registry = build_registry()?;

    let mut bytes = ChatInviteAlready::CONSTRUCTOR_ID.to_le_bytes().to_vec();
    bytes.extend(encode(&gen_photo_stripped()));
    bytes.truncate(bytes.len() - 4);

    let expected = DecodeError::UnexpectedVariant {
        abstract_type: AnyChat::TL_NAME,
        got: PhotoStrippedSize::CONSTRUCTOR_ID,
    };
    assert_eq!(
        registry.decode_as::<ChatInviteAlready>(&bytes),
        Err(expected.clone())
    );
    assert_eq!(registry.decode_any(&bytes).map(|_| ()), Err(expected.clone()));
    assert_eq!(registry.skip_len(&bytes), Err(expected));
    Ok(())
}

#[test]
fn requests_are_not_variants() -> Result<()> {
    let registry = build_registry()?;
    let variants = registry.variants(AnyChatInvite::TL_NAME).unwrap();
    assert_eq!(variants, AnyChatInvite::VARIANT_IDS);
    assert!(!variants.contains(&CheckChatInvite::CONSTRUCTOR_ID));
    assert_eq!(
        registry.decode_as::<AnyChatInvite>(&encode(&CheckChatInvite {
            hash: String::from("h"),
        })),
        Err(DecodeError::UnexpectedVariant {
            abstract_type: AnyChatInvite::TL_NAME,
            got: CheckChatInvite::CONSTRUCTOR_ID,
        })
    );
    Ok(())
}

#[test]
fn wrong_concrete_type_is_rejected() -> Result<()> {
    let registry = build_registry()?;
    assert_eq!(
        registry.decode_as::<ChatEmpty>(&encode(&gen_chat_bare())),
        Err(DecodeError::TypeMismatch {
            expected: ChatEmpty::CONSTRUCTOR_ID,
            got: Chat::CONSTRUCTOR_ID,
        })
    );
    Ok(())
}

#[test]
fn registry_covers_every_variant() -> Result<()> {
    let registry = build_registry()?;
    for id in AnyChat::VARIANT_IDS
        .iter()
        .chain(AnyPhotoSize::VARIANT_IDS)
        .chain(AnyChatInvite::VARIANT_IDS)
    {
        assert!(registry.contains(*id), "{id}");
    }

    let described = registry.describe();
    assert_eq!(described.lines().count(), registry.len());
    assert!(described
        .lines()
        .any(|line| line == "chatInvitePeek#61695cb0 chat:Chat expires:int = ChatInvite"));

    Ok(())
}
