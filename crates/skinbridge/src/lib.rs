//! # skinbridge
//!
//! Cross-server propagation and authorization of player skins over a
//! shared plugin-messaging channel.
//!
//! A proxy in front of a server cluster forwards two kinds of message
//! to its backends: authoritative instant skin updates, and requests
//! to authorize a skin change. This crate implements the backend side:
//! decode the payload, decide, apply or reply. Everything the decision
//! needs from the host — player lookup, permission evaluation, the
//! actual skin application — comes in through the [`ServerBridge`]
//! trait, so the crate has no opinion about which game server it runs
//! inside.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use skinbridge::{BridgeConfig, SkinChannelHandler};
//!
//! // Implement ServerBridge for your server, then:
//! // let handler = SkinChannelHandler::new(
//! //     MyBridge::new(server),
//! //     BridgeConfig::for_plugin("ChangeSkin"),
//! // );
//! // ...and for every payload on the channel:
//! // handler.handle(&sender, &payload)?;
//! ```
//!
//! Wire-level types live in the `skinbridge-protocol` crate and are
//! re-exported here for convenience.

mod bridge;
mod config;
mod error;
mod handler;
mod skin;

pub use bridge::ServerBridge;
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use handler::SkinChannelHandler;
pub use skin::{SkinError, SkinModel};

pub use skinbridge_protocol::{
    PermissionCheck, PermissionResponse, SkinMessage, SkinUpdate, WireError,
};
