//! The compiled-in layer: every constructor this build understands.
//!
//! Constructor IDs and field layouts are stable within [`LAYER`] only.

pub mod types;

use anyhow::Result;
use tlwire_types::limits::DecodeLimits;
use tlwire_types::registry::{Registry, RegistryBuilder};
use tracing::info;
use types::*;

pub const LAYER: u32 = 158;

/// Builds the registry with decode limits taken from the environment, falling back to
/// the defaults. See [`DecodeLimits::from_env`].
pub fn build_registry() -> Result<Registry> {
    build_registry_with_limits(DecodeLimits::from_env()?)
}

pub fn build_registry_with_limits(limits: DecodeLimits) -> Result<Registry> {
    let mut builder = RegistryBuilder::new(LAYER).limits(limits);

    /* Chat */
    builder.register::<ChatEmpty>()?;
    builder.register::<ChatForbidden>()?;
    builder.register::<Chat>()?;
    builder.register::<ChannelForbidden>()?;

    /* PhotoSize */
    builder.register::<PhotoSizeEmpty>()?;
    builder.register::<PhotoStrippedSize>()?;

    /* ChatInvite */
    builder.register::<ChatInviteAlready>()?;
    builder.register::<ChatInvitePeek>()?;
    builder.register::<ChatInvite>()?;

    /* messages */
    builder.register::<MessagesChats>()?;
    builder.register::<CheckChatInvite>()?;

    /* Abstract types */
    builder.register_abstract::<AnyChat>()?;
    builder.register_abstract::<AnyPhotoSize>()?;
    builder.register_abstract::<AnyChatInvite>()?;

    let registry = builder.build();
    info!(layer = LAYER, constructors = registry.len(), "layer loaded");
    Ok(registry)
}
