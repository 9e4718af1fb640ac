//! Host capability hook for the channel handler.
//!
//! skinbridge doesn't know what a "player" is — that's your game
//! server's business (a Bukkit `Player`, a Sponge `ServerPlayer`, a
//! test double, whatever). It defines the [`ServerBridge`] trait
//! instead: the handful of capabilities the protocol needs from the
//! host, parameterized over the host's own player type.
//!
//! The handler calls these during the processing of a single message
//! and never stores a `Player` beyond it. Any of them may block on the
//! host side (a synchronous registry lookup, say) — the host owns its
//! threading model, this core imposes no locking of its own.

use uuid::Uuid;

use crate::SkinModel;

/// The capabilities the channel handler consumes from its host.
///
/// # Trait bounds
///
/// - `Send + Sync` → the handler can be shared across the host's
///   worker threads; it is stateless, so concurrent calls are fine.
/// - `'static` → the bridge owns what it needs and lives as long as
///   the handler.
///
/// # Example
///
/// ```rust
/// use skinbridge::{ServerBridge, SkinModel};
/// use uuid::Uuid;
///
/// /// A host with a single hardcoded player, for illustration.
/// struct OnePlayerHost;
///
/// impl ServerBridge for OnePlayerHost {
///     type Player = Uuid;
///
///     fn send_message(&self, _player: &Uuid, _channel: &str, _data: &[u8]) {}
///
///     fn lookup_player_exact(&self, name: &str) -> Option<Uuid> {
///         (name == "Notch")
///             .then(|| Uuid::parse_str("069a79f4-44e9-4726-a5be-fca90e38aaf5").unwrap())
///     }
///
///     fn player_id(&self, player: &Uuid) -> Uuid {
///         *player
///     }
///
///     fn has_permission(&self, _player: &Uuid, _node: &str) -> bool {
///         true
///     }
///
///     fn has_whitelist_entitlement(&self, _player: &Uuid, _target: Uuid) -> bool {
///         false
///     }
///
///     fn apply_skin(&self, _receiver: Option<&Uuid>, _skin: Option<SkinModel>) {}
/// }
/// ```
pub trait ServerBridge: Send + Sync + 'static {
    /// The host's player representation.
    type Player;

    /// Sends a raw payload to `player` on the named channel.
    ///
    /// Delivery is fire-and-forget from this core's perspective; the
    /// requesting side re-issues if no response arrives in time.
    fn send_message(&self, player: &Self::Player, channel: &str, data: &[u8]);

    /// Looks up a currently connected player by exact name.
    fn lookup_player_exact(&self, name: &str) -> Option<Self::Player>;

    /// The player's account UUID.
    fn player_id(&self, player: &Self::Player) -> Uuid;

    /// Evaluates a permission node (e.g. `myplugin.command.setskin`)
    /// against the host's permission engine.
    fn has_permission(&self, player: &Self::Player, node: &str) -> bool;

    /// Checks the allow-list gate for a restricted skin: may `player`
    /// wear the skin of `target_profile`? Only consulted when a
    /// request carries the whitelist flag.
    fn has_whitelist_entitlement(
        &self,
        player: &Self::Player,
        target_profile: Uuid,
    ) -> bool;

    /// Applies (or clears, on `None` skin) a player's visible skin.
    ///
    /// `receiver` is `None` when the named target of an update is not
    /// currently connected — the host decides whether that's a no-op,
    /// a queue-for-join, or something else.
    fn apply_skin(&self, receiver: Option<&Self::Player>, skin: Option<SkinModel>);
}
