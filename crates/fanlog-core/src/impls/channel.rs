//! ChannelBuilder - `InputEvent` 用の builder
//!
//! 構築時に固定したチャネル id を持ち、形状ごとにルールを 1 つ定義する:
//! - `StructuredMessage`: `[length, width, height, 0, 0, 0]` on the channel
//! - `TextMessage`: `"input data: length: {}, width: {}, height: {}"`

use crate::domain::{ChannelId, InputEvent, StructuredMessage, TextMessage};
use crate::ports::BuildMessage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelBuilder {
    channel: ChannelId,
}

impl ChannelBuilder {
    pub const fn new(channel: ChannelId) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }
}

impl BuildMessage<StructuredMessage, InputEvent> for ChannelBuilder {
    fn build(&self, event: &InputEvent) -> StructuredMessage {
        StructuredMessage::from_array(self.channel, [event.length, event.width, event.height])
    }
}

impl BuildMessage<TextMessage, InputEvent> for ChannelBuilder {
    fn build(&self, event: &InputEvent) -> TextMessage {
        crate::text_message!(
            "input data: length: {}, width: {}, height: {}",
            event.length,
            event.width,
            event.height
        )
    }
}
