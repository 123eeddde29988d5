use crate::types::{AnyChat, AnyChatInvite};
use tlwire_types::error::DecodeError;
use tlwire_types::schema::{Field, SchemaObject, WireType};
use tlwire_types::serde::{ByteCursor, ConstructorId, WireWriter, WriteLen};
use tlwire_types::types::{KnownType, Object};

/// `messages.chats#64ff9fd5 chats:Vector<Chat> = messages.Chats`
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct MessagesChats {
    pub chats: Vec<AnyChat>,
}
impl KnownType for MessagesChats {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x64ff9fd5);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "messages.chats",
        result_type: "messages.Chats",
        fields: &[Field::required(
            "chats",
            WireType::Vector(&WireType::Object(AnyChat::TL_NAME)),
        )],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        w.write_vector(&self.chats, |w, chat| chat.ser(w))
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let chats = r.read_vector(|r| r.decode::<AnyChat>())?;
        Ok(Self { chats })
    }
}

/// Request: resolve an invite link hash. Answered with an [`AnyChatInvite`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CheckChatInvite {
    pub hash: String,
}
impl CheckChatInvite {
    /// The abstract type a well-behaved peer answers with.
    pub const RETURNS: &'static str = AnyChatInvite::TL_NAME;
}
impl KnownType for CheckChatInvite {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x3eadb1bb);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "messages.checkChatInvite",
        result_type: Self::RETURNS,
        fields: &[Field::required("hash", WireType::String)],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        w.write_string(&self.hash)
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let hash = r.read_string()?;
        Ok(Self { hash })
    }
}
