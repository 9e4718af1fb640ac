//! The channel handler: dispatch, instant updates, permission checks.
//!
//! Each inbound payload is one synchronous unit of work:
//!
//!   1. Decode the sub-channel tag → branch
//!   2. UpdateSkin → resolve the receiver, build the skin, apply
//!   3. PermissionsCheck → decide, reply with Success or Failure
//!
//! The handler holds no mutable state, so one instance serves every
//! worker thread the host throws at it. Racing messages for the same
//! player are not coordinated here; the channel's per-message order is
//! the only ordering guarantee callers get.

use uuid::Uuid;

use skinbridge_protocol::{
    PermissionCheck, PermissionResponse, SkinMessage, SkinUpdate,
};

use crate::{BridgeConfig, BridgeError, ServerBridge, SkinModel};

/// Handles the skin sub-protocol on a shared plugin-messaging channel.
///
/// Generic over a [`ServerBridge`] so the same handler runs against
/// any host's player type — including a mock bridge in tests.
pub struct SkinChannelHandler<B: ServerBridge> {
    bridge: B,
    config: BridgeConfig,
}

impl<B: ServerBridge> SkinChannelHandler<B> {
    /// Creates a handler over the given host bridge.
    pub fn new(bridge: B, config: BridgeConfig) -> Self {
        Self { bridge, config }
    }

    /// The host bridge this handler runs against.
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// The handler's configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Handles one raw payload received from `sender`.
    ///
    /// Payloads with an unrecognized sub-channel tag are silently
    /// ignored — the channel is shared and other tags belong to other
    /// sub-protocols.
    ///
    /// # Errors
    /// [`BridgeError::Wire`] on a truncated or malformed payload (no
    /// reply is sent); [`BridgeError::Skin`] when an instant update
    /// carries an invalid skin claim. A permission check with an
    /// invalid claim is answered with `PermissionsFailure` instead of
    /// an error — the requester is waiting on a reply.
    pub fn handle(
        &self,
        sender: &B::Player,
        payload: &[u8],
    ) -> Result<(), BridgeError> {
        match SkinMessage::decode(payload)? {
            SkinMessage::UpdateSkin(update) => {
                tracing::info!(
                    "received instant update from the proxy; this path is \
                     reserved for propagating an operator-issued skin change"
                );
                self.apply_update(sender, update)
            }
            SkinMessage::PermissionsCheck(check) => {
                self.check_permissions(sender, check)
            }
            SkinMessage::Unknown => Ok(()),
        }
    }

    /// The `"UpdateSkin"` path: a single authoritative update, already
    /// verified upstream. No permission check happens here.
    fn apply_update(
        &self,
        sender: &B::Player,
        update: SkinUpdate,
    ) -> Result<(), BridgeError> {
        match update {
            SkinUpdate::Clear => {
                self.bridge.apply_skin(Some(sender), None);
                Ok(())
            }
            SkinUpdate::Set {
                encoded_texture,
                signature,
                player_name,
            } => {
                let receiver = self.bridge.lookup_player_exact(&player_name);
                if receiver.is_none() {
                    // Not an error: the host's apply capability decides
                    // what an absent receiver means.
                    tracing::debug!(%player_name, "update receiver is not connected");
                }
                tracing::info!(%player_name, "instant skin update");

                let skin = SkinModel::from_encoded(&encoded_texture, &signature)?;
                self.bridge.apply_skin(receiver.as_ref(), Some(skin));
                Ok(())
            }
        }
    }

    /// The `"PermissionsCheck"` path: decide, then send exactly one
    /// response to the requester on the configured channel.
    fn check_permissions(
        &self,
        requester: &B::Player,
        check: PermissionCheck,
    ) -> Result<(), BridgeError> {
        let allowed = self.decide(requester, &check)?;
        tracing::debug!(request_id = check.request_id, allowed, "permission check decided");

        let response = if allowed {
            PermissionResponse::granted(&check)
        } else {
            PermissionResponse::Failure
        };
        let payload = response.encode()?;
        self.bridge.send_message(requester, &self.config.channel, &payload);
        Ok(())
    }

    /// Resolves a request to ALLOW (`true`) or DENY (`false`).
    ///
    /// The skin claim is validated first: a claim that doesn't hold
    /// together is an implicit DENY, privileged or not. After that the
    /// privileged flag short-circuits to ALLOW — it is trusted as
    /// supplied, not re-derived. The receiver UUID is only parsed on
    /// the non-privileged path, where the self/other distinction needs
    /// it; an unparsable UUID there is a decode error.
    fn decide(
        &self,
        requester: &B::Player,
        check: &PermissionCheck,
    ) -> Result<bool, BridgeError> {
        let target_skin = match SkinModel::from_encoded(
            &check.encoded_texture,
            &check.signature,
        ) {
            Ok(skin) => skin,
            Err(e) => {
                tracing::warn!(
                    request_id = check.request_id,
                    error = %e,
                    "denying permission check with an invalid skin claim"
                );
                return Ok(false);
            }
        };

        if check.privileged {
            return Ok(true);
        }

        let receiver = Uuid::parse_str(&check.receiver_uuid).map_err(|source| {
            BridgeError::InvalidReceiverUuid {
                value: check.receiver_uuid.clone(),
                source,
            }
        })?;

        Ok(self.authorize(
            requester,
            receiver,
            target_skin.profile_id(),
            check.requires_whitelist,
        ))
    }

    /// The standard authorization algorithm.
    ///
    /// Base node: `<ns>.command.setskin` when the requester is the
    /// receiver, `<ns>.command.setskin.other` otherwise. When the
    /// whitelist flag is set, the entitlement check for the skin's
    /// embedded profile must also pass — both gates, not either.
    pub fn authorize(
        &self,
        requester: &B::Player,
        receiver: Uuid,
        target_profile: Uuid,
        requires_whitelist: bool,
    ) -> bool {
        let own_skin = self.bridge.player_id(requester) == receiver;
        let node = if own_skin {
            self.config.setskin_node()
        } else {
            self.config.setskin_other_node()
        };

        let has_node = self.bridge.has_permission(requester, &node);
        if requires_whitelist {
            has_node
                && self
                    .bridge
                    .has_whitelist_entitlement(requester, target_profile)
        } else {
            has_node
        }
    }
}
