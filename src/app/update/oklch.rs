use super::super::messages::OklchChannel;
use super::super::state::App;
use super::Effect;
use crate::oklch::{clamp_chroma, clamp_hue, clamp_lightness, parse_field};
use tracing::debug;

impl App {
    /// Slider moves snap lightness and hue to whole steps.
    pub(super) fn handle_oklch_changed(&mut self, channel: OklchChannel, value: f32) {
        let value = match channel {
            OklchChannel::Lightness | OklchChannel::Hue => value.round(),
            OklchChannel::Chroma => value,
        };
        self.set_oklch_channel(channel, value);
        self.oklch.sync_inputs();
    }

    /// Keep what was typed; only a parseable value moves the colour.
    pub(super) fn handle_oklch_input_changed(&mut self, channel: OklchChannel, raw: String) {
        let parsed = parse_field(&raw);
        *self.oklch.input_mut(channel) = raw;
        if let Some(value) = parsed {
            self.set_oklch_channel(channel, value);
        }
    }

    pub(super) fn handle_copy_oklch(&mut self, effects: &mut Vec<Effect>) {
        let css = self.oklch.color.css();
        debug!(%css, "Copying colour");
        effects.push(Effect::CopyToClipboard(css));
    }

    fn set_oklch_channel(&mut self, channel: OklchChannel, value: f32) {
        let color = &mut self.oklch.color;
        match channel {
            OklchChannel::Lightness => color.lightness = clamp_lightness(value),
            OklchChannel::Chroma => color.chroma = clamp_chroma(value),
            OklchChannel::Hue => color.hue = clamp_hue(value),
        }
    }
}
