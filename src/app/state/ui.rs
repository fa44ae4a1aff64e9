use crate::app::messages::OklchChannel;
use crate::oklch::Oklch;

/// OKLCH demo model: the colour plus the raw text of each numeric field.
pub struct OklchState {
    pub(in crate::app) color: Oklch,
    pub(in crate::app) lightness_input: String,
    pub(in crate::app) chroma_input: String,
    pub(in crate::app) hue_input: String,
}

impl Default for OklchState {
    fn default() -> Self {
        let mut state = Self {
            color: Oklch::default(),
            lightness_input: String::new(),
            chroma_input: String::new(),
            hue_input: String::new(),
        };
        state.sync_inputs();
        state
    }
}

impl OklchState {
    /// Rewrite every field from the current colour.
    pub(in crate::app) fn sync_inputs(&mut self) {
        self.lightness_input = self.color.lightness.to_string();
        self.chroma_input = self.color.chroma.to_string();
        self.hue_input = self.color.hue.to_string();
    }

    pub(in crate::app) fn input_mut(&mut self, channel: OklchChannel) -> &mut String {
        match channel {
            OklchChannel::Lightness => &mut self.lightness_input,
            OklchChannel::Chroma => &mut self.chroma_input,
            OklchChannel::Hue => &mut self.hue_input,
        }
    }
}
