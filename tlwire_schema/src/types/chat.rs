use tlwire_types::abstract_type;
use tlwire_types::error::DecodeError;
use tlwire_types::schema::{Field, SchemaObject, WireType};
use tlwire_types::serde::{ByteCursor, ConstructorId, FlagsWord, WireWriter, WriteLen};
use tlwire_types::types::KnownType;

abstract_type! {
    /// Any chat-like peer: basic groups, channels, and the stubs left when either
    /// is inaccessible.
    pub enum AnyChat as "Chat" {
        Empty(ChatEmpty),
        Forbidden(ChatForbidden),
        Chat(Chat),
        ChannelForbidden(ChannelForbidden),
    }
}

/// `chatEmpty#29562865 id:long = Chat`
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ChatEmpty {
    pub id: i64,
}
impl KnownType for ChatEmpty {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x29562865);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "chatEmpty",
        result_type: AnyChat::TL_NAME,
        fields: &[Field::required("id", WireType::Int64)],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        w.write_int64(self.id)
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let id = r.read_int64()?;
        Ok(Self { id })
    }
}

/// `chatForbidden#6592a1a7 id:long title:string = Chat`
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ChatForbidden {
    pub id: i64,
    pub title: String,
}
impl KnownType for ChatForbidden {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x6592a1a7);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "chatForbidden",
        result_type: AnyChat::TL_NAME,
        fields: &[
            Field::required("id", WireType::Int64),
            Field::required("title", WireType::String),
        ],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        let mut w_len = w.write_int64(self.id);
        w_len += w.write_string(&self.title);
        w_len
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let id = r.read_int64()?;
        let title = r.read_string()?;
        Ok(Self { id, title })
    }
}

/// A basic group.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Chat {
    pub creator: bool,
    pub left: bool,
    pub deactivated: bool,
    pub id: i64,
    pub title: String,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
    /// The supergroup this group was upgraded to.
    pub migrated_to: Option<i64>,
}
impl Chat {
    const CREATOR_BIT: u8 = 0;
    const LEFT_BIT: u8 = 2;
    const DEACTIVATED_BIT: u8 = 5;
    const MIGRATED_TO_BIT: u8 = 6;
}
impl KnownType for Chat {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x41cbf256);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "chat",
        result_type: AnyChat::TL_NAME,
        fields: &[
            Field::flags(),
            Field::optional("creator", WireType::True, Self::CREATOR_BIT),
            Field::optional("left", WireType::True, Self::LEFT_BIT),
            Field::optional("deactivated", WireType::True, Self::DEACTIVATED_BIT),
            Field::required("id", WireType::Int64),
            Field::required("title", WireType::String),
            Field::required("participants_count", WireType::Int32),
            Field::required("date", WireType::Int32),
            Field::required("version", WireType::Int32),
            Field::optional("migrated_to", WireType::Int64, Self::MIGRATED_TO_BIT),
        ],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        let mut flags = FlagsWord::empty();
        flags.set(Self::CREATOR_BIT, self.creator);
        flags.set(Self::LEFT_BIT, self.left);
        flags.set(Self::DEACTIVATED_BIT, self.deactivated);
        flags.set(Self::MIGRATED_TO_BIT, self.migrated_to.is_some());

        let mut w_len = w.write_flags(flags);
        w_len += w.write_int64(self.id);
        w_len += w.write_string(&self.title);
        w_len += w.write_int32(self.participants_count);
        w_len += w.write_int32(self.date);
        w_len += w.write_int32(self.version);
        if let Some(migrated_to) = self.migrated_to {
            w_len += w.write_int64(migrated_to);
        }
        w_len
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let flags = r.read_flags(Self::SCHEMA)?;
        let id = r.read_int64()?;
        let title = r.read_string()?;
        let participants_count = r.read_int32()?;
        let date = r.read_int32()?;
        let version = r.read_int32()?;
        let migrated_to = match flags.has(Self::MIGRATED_TO_BIT) {
            true => Some(r.read_int64()?),
            false => None,
        };
        Ok(Self {
            creator: flags.has(Self::CREATOR_BIT),
            left: flags.has(Self::LEFT_BIT),
            deactivated: flags.has(Self::DEACTIVATED_BIT),
            id,
            title,
            participants_count,
            date,
            version,
            migrated_to,
        })
    }
}

/// A channel or supergroup the user was banned from.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct ChannelForbidden {
    pub broadcast: bool,
    pub megagroup: bool,
    pub id: i64,
    pub access_hash: i64,
    pub title: String,
    /// Unix time the ban lifts. Absent for permanent bans.
    pub until_date: Option<i32>,
}
impl ChannelForbidden {
    const BROADCAST_BIT: u8 = 5;
    const MEGAGROUP_BIT: u8 = 8;
    const UNTIL_DATE_BIT: u8 = 16;
}
impl KnownType for ChannelForbidden {
    const CONSTRUCTOR_ID: ConstructorId = ConstructorId(0x17d493d5);
    const SCHEMA: &'static SchemaObject = &SchemaObject {
        constructor_id: Self::CONSTRUCTOR_ID,
        qualified_name: "channelForbidden",
        result_type: AnyChat::TL_NAME,
        fields: &[
            Field::flags(),
            Field::optional("broadcast", WireType::True, Self::BROADCAST_BIT),
            Field::optional("megagroup", WireType::True, Self::MEGAGROUP_BIT),
            Field::required("id", WireType::Int64),
            Field::required("access_hash", WireType::Int64),
            Field::required("title", WireType::String),
            Field::optional("until_date", WireType::Int32, Self::UNTIL_DATE_BIT),
        ],
    };

    fn ser_body(&self, w: &mut WireWriter) -> WriteLen {
        let mut flags = FlagsWord::empty();
        flags.set(Self::BROADCAST_BIT, self.broadcast);
        flags.set(Self::MEGAGROUP_BIT, self.megagroup);
        flags.set(Self::UNTIL_DATE_BIT, self.until_date.is_some());

        let mut w_len = w.write_flags(flags);
        w_len += w.write_int64(self.id);
        w_len += w.write_int64(self.access_hash);
        w_len += w.write_string(&self.title);
        if let Some(until_date) = self.until_date {
            w_len += w.write_int32(until_date);
        }
        w_len
    }
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let flags = r.read_flags(Self::SCHEMA)?;
        let id = r.read_int64()?;
        let access_hash = r.read_int64()?;
        let title = r.read_string()?;
        let until_date = match flags.has(Self::UNTIL_DATE_BIT) {
            true => Some(r.read_int32()?),
            false => None,
        };
        Ok(Self {
            broadcast: flags.has(Self::BROADCAST_BIT),
            megagroup: flags.has(Self::MEGAGROUP_BIT),
            id,
            access_hash,
            title,
            until_date,
        })
    }
}
