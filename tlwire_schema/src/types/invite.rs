use crate::types::{AnyChat, AnyPhotoSize};
use tlwire_types::abstract_type;
use tlwire_types::error::DecodeError;
use tlwire_types::schema::{Field, SchemaObject, WireType};
use tlwire_types::serde::{ByteCursor, ConstructorId, FlagsWord, WireWriter, WriteLen};
use tlwire_types::types::{KnownType, Object};

abstract_type! {
    /// What an invite link resolves to.
    pub enum AnyChatInvite as "ChatInvite" {
        Already(ChatInviteAlready),
        Peek(ChatInvitePeek),
        Invite(ChatInvite),
    }
}

/// The user is already a participant of `chat`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ChatInviteAlready {
    pub chat: AnyChat,
}
impl KnownType for ChatInviteAlready {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x5a686d7c);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "chatInviteAlready",
        result_type: AnyChatInvite::TL_NAME,
        fields: &[Field::required("chat", WireType::Object(AnyChat::TL_NAME))],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        self.chat.ser(w)
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let chat = r.decode::<AnyChat>()?;
        Ok(Self { chat })
    }
}

/// A preview of `chat`, valid until `expires` seconds from now.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ChatInvitePeek {
    pub chat: AnyChat,
    pub expires: i32,
}
impl KnownType for ChatInvitePeek {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x61695cb0);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "chatInvitePeek",
        result_type: AnyChatInvite::TL_NAME,
        fields: &[
            Field::required("chat", WireType::Object(AnyChat::TL_NAME)),
            Field::required("expires", WireType::Int32),
        ],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        let mut w_len = self.chat.ser(w);
        w_len += w.write_int32(self.expires);
        w_len
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let chat = r.decode::<AnyChat>()?;
        let expires = r.read_int32()?;
        Ok(Self { chat, expires })
    }
}

/// An invite to a chat the user has not joined.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct ChatInvite {
    pub channel: bool,
    pub broadcast: bool,
    pub public: bool,
    pub megagroup: bool,
    pub title: String,
    pub about: Option<String>,
    pub photo: Option<AnyPhotoSize>,
    pub participants_count: i32,
    /// IDs of a few participants the user may know.
    pub participants: Option<Vec<i64>>,
    pub request_needed: bool,
}
impl ChatInvite {
    const CHANNEL_BIT: u8 = 0;
    const BROADCAST_BIT: u8 = 1;
    const PUBLIC_BIT: u8 = 2;
    const MEGAGROUP_BIT: u8 = 3;
    const PARTICIPANTS_BIT: u8 = 4;
    const ABOUT_BIT: u8 = 5;
    const PHOTO_BIT: u8 = 6;
}
impl KnownType for ChatInvite {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0xcde0ec40);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "chatInvite",
        result_type: AnyChatInvite::TL_NAME,
        fields: &[
            Field::flags(),
            Field::optional("channel", WireType::True, Self::CHANNEL_BIT),
            Field::optional("broadcast", WireType::True, Self::BROADCAST_BIT),
            Field::optional("public", WireType::True, Self::PUBLIC_BIT),
            Field::optional("megagroup", WireType::True, Self::MEGAGROUP_BIT),
            Field::required("title", WireType::String),
            Field::optional("about", WireType::String, Self::ABOUT_BIT),
            Field::optional(
                "photo",
                WireType::Object(AnyPhotoSize::TL_NAME),
                Self::PHOTO_BIT,
            ),
            Field::required("participants_count", WireType::Int32),
            Field::optional(
                "participants",
                WireType::Vector(&WireType::Int64),
                Self::PARTICIPANTS_BIT,
            ),
            Field::required("request_needed", WireType::Bool),
        ],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        let mut flags = FlagsWord::empty();
        flags.set(Self::CHANNEL_BIT, self.channel);
        flags.set(Self::BROADCAST_BIT, self.broadcast);
        flags.set(Self::PUBLIC_BIT, self.public);
        flags.set(Self::MEGAGROUP_BIT, self.megagroup);
        flags.set(Self::PARTICIPANTS_BIT, self.participants.is_some());
        flags.set(Self::ABOUT_BIT, self.about.is_some());
        flags.set(Self::PHOTO_BIT, self.photo.is_some());

        let mut w_len = w.write_flags(flags);
        w_len += w.write_string(&self.title);
        if let Some(about) = &self.about {
            w_len += w.write_string(about);
        }
        if let Some(photo) = &self.photo {
            w_len += photo.ser(w);
        }
        w_len += w.write_int32(self.participants_count);
        if let Some(participants) = &self.participants {
            w_len += w.write_vector(participants, |w, id| w.write_int64(*id));
        }
        w_len += w.write_bool(self.request_needed);
        w_len
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let flags = r.read_flags(Self::SCHEMA)?;
        let title = r.read_string()?;
        let about = match flags.has(Self::ABOUT_BIT) {
            true => Some(r.read_string()?),
            false => None,
        };
        let photo = match flags.has(Self::PHOTO_BIT) {
            true => Some(r.decode::<AnyPhotoSize>()?),
            false => None,
        };
        let participants_count = r.read_int32()?;
        let participants = match flags.has(Self::PARTICIPANTS_BIT) {
            true => Some(r.read_vector(|r| r.read_int64())?),
            false => None,
        };
        let request_needed = r.read_bool()?;
        Ok(Self {
            channel: flags.has(Self::CHANNEL_BIT),
            broadcast: flags.has(Self::BROADCAST_BIT),
            public: flags.has(Self::PUBLIC_BIT),
            megagroup: flags.has(Self::MEGAGROUP_BIT),
            title,
            about,
            photo,
            participants_count,
            participants,
            request_needed,
        })
    }
}
