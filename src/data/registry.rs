//! Ordered channel collection with the single active-channel selection.

use super::channel::{Channel, ChannelId};
use super::gain::Gain;
use crate::error::{Result, ViewerError};

/// What the session must do after a registry mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEffect {
    None,
    /// Cursor and measurement state no longer belongs to a visible active channel.
    ClearCursors,
}

/// Invariants: at least one channel, `active < channels.len()`, and at least one
/// channel visible after every public operation.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
    active: ChannelId,
}

impl ChannelRegistry {
    pub fn new(mut channels: Vec<Channel>) -> Result<Self> {
        if channels.is_empty() {
            return Err(ViewerError::NoChannels);
        }
        if !channels.iter().any(|c| c.visible) {
            log::debug!("no channel visible at construction, showing '{}'", channels[0].name);
            channels[0].visible = true;
        }
        let active = channels.iter().position(|c| c.visible).unwrap_or(0);
        Ok(Self { channels, active })
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn get(&self, id: ChannelId) -> Result<&Channel> {
        self.channels.get(id).ok_or(ViewerError::UnknownChannel(id))
    }

    fn get_mut(&mut self, id: ChannelId) -> Result<&mut Channel> {
        self.channels
            .get_mut(id)
            .ok_or(ViewerError::UnknownChannel(id))
    }

    pub fn active_id(&self) -> ChannelId {
        self.active
    }

    pub fn active(&self) -> &Channel {
        &self.channels[self.active]
    }

    pub fn active_visible(&self) -> bool {
        self.active().visible
    }

    pub fn visible_count(&self) -> usize {
        self.channels.iter().filter(|c| c.visible).count()
    }

    /// Show or hide a channel.
    ///
    /// Hiding the active channel asks for a cursor reset. Hiding the last
    /// visible channel is overridden and it stays visible, but the reset still
    /// applies when that channel is the active one.
    pub fn set_visible(&mut self, id: ChannelId, visible: bool) -> Result<RegistryEffect> {
        let was_visible = self.get(id)?.visible;
        if visible || !was_visible || self.visible_count() > 1 {
            self.get_mut(id)?.visible = visible;
        } else {
            log::debug!("keeping '{}' visible: last visible channel", self.channels[id].name);
        }
        if !visible && id == self.active {
            Ok(RegistryEffect::ClearCursors)
        } else {
            Ok(RegistryEffect::None)
        }
    }

    pub fn set_gain(&mut self, id: ChannelId, gain: Gain) -> Result<()> {
        self.get_mut(id)?.gain = gain;
        Ok(())
    }

    /// Make `id` the active channel, forcing it visible if needed.
    ///
    /// Always requests a cursor reset, even when `id` is already active.
    pub fn set_active(&mut self, id: ChannelId) -> Result<RegistryEffect> {
        let channel = self.get_mut(id)?;
        if !channel.visible {
            log::debug!("activating hidden channel '{}', showing it", channel.name);
            channel.visible = true;
        }
        self.active = id;
        Ok(RegistryEffect::ClearCursors)
    }
}
