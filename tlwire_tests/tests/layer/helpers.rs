use tlwire_schema::types::*;
use tlwire_types::types::Object;

pub fn gen_chat_empty() -> AnyChat {
    AnyChat::from(ChatEmpty { id: 42 })
}
pub fn gen_chat_forbidden() -> AnyChat {
    AnyChat::from(ChatForbidden {
        id: -100,
        title: String::from("Kicked"),
    })
}
pub fn gen_chat_bare() -> AnyChat {
    AnyChat::from(Chat {
        id: 7,
        title: String::from("Book club"),
        participants_count: 12,
        date: 1_600_000_000,
        version: 3,
        ..Chat::default()
    })
}
pub fn gen_chat_full() -> AnyChat {
    AnyChat::from(Chat {
        creator: true,
        left: true,
        deactivated: true,
        id: i64::MAX,
        title: "é".repeat(200),
        participants_count: i32::MAX,
        date: 0,
        version: -1,
        migrated_to: Some(1_000_000_000_123),
    })
}
pub fn gen_channel_forbidden() -> AnyChat {
    AnyChat::from(ChannelForbidden {
        broadcast: true,
        megagroup: false,
        id: 99,
        access_hash: -0x1234_5678_9abc,
        title: String::from("News"),
        until_date: Some(1_700_000_000),
    })
}

pub fn gen_chats() -> Vec<AnyChat> {
    vec![
        gen_chat_empty(),
        gen_chat_forbidden(),
        gen_chat_bare(),
        gen_chat_full(),
        gen_channel_forbidden(),
    ]
}

pub fn gen_photo_empty() -> AnyPhotoSize {
    AnyPhotoSize::from(PhotoSizeEmpty {
        kind: String::from("s"),
    })
}
pub fn gen_photo_stripped() -> AnyPhotoSize {
    AnyPhotoSize::from(PhotoStrippedSize {
        kind: String::from("i"),
        bytes: (0..=255u8).cycle().take(700).collect(),
    })
}

pub fn gen_invite_minimal() -> ChatInvite {
    ChatInvite {
        title: String::from("Hikers"),
        participants_count: 3,
        ..ChatInvite::default()
    }
}
pub fn gen_invite_full() -> ChatInvite {
    ChatInvite {
        channel: true,
        broadcast: true,
        public: true,
        megagroup: true,
        title: String::from("Hikers"),
        about: Some(String::from("Weekend trails")),
        photo: Some(gen_photo_stripped()),
        participants_count: 3,
        participants: Some(vec![1, 2, 3]),
        request_needed: true,
    }
}

/// At least one instance of every layer constructor, most in several shapes.
pub fn gen_objects() -> Vec<Box<dyn Object>> {
    let mut objs: Vec<Box<dyn Object>> = vec![];
    for chat in gen_chats() {
        objs.push(Box::new(ChatInviteAlready { chat: chat.clone() }));
        objs.push(Box::new(ChatInvitePeek {
            chat: chat.clone(),
            expires: 3600,
        }));
        objs.push(Box::new(chat));
    }
    objs.push(Box::new(gen_photo_empty()));
    objs.push(Box::new(gen_photo_stripped()));
    objs.push(Box::new(gen_invite_minimal()));
    objs.push(Box::new(gen_invite_full()));
    objs.push(Box::new(ChatInvite {
        photo: Some(gen_photo_empty()),
        participants: Some(vec![]),
        ..gen_invite_minimal()
    }));
    objs.push(Box::new(MessagesChats { chats: vec![] }));
    objs.push(Box::new(MessagesChats { chats: gen_chats() }));
    objs.push(Box::new(CheckChatInvite {
        hash: String::from("AAAAAEHbEkejzxUjAUCfYg"),
    }));
    objs
}
