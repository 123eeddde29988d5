mod chat;
mod invite;
mod messages;
mod photo;

pub use chat::*;
pub use invite::*;
pub use messages::*;
pub use photo::*;
