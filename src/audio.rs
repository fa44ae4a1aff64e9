//! Background music for the site, played through `rodio`.
//!
//! The output stream is opened lazily on the first play request and kept for
//! the rest of the session. A track that has run out starts over on the next
//! play.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct BackgroundAudio {
    track: PathBuf,
    volume: f32,
    player: Option<Player>,
}

struct Player {
    _stream: OutputStream,
    sink: Sink,
}

impl Player {
    fn open(volume: f32) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        sink.pause();
        sink.set_volume(volume);
        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    fn queue_track(&self, track: &Path) -> Result<()> {
        let file =
            File::open(track).with_context(|| format!("Opening track {}", track.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Decoding track {}", track.display()))?;
        self.sink.append(source);
        Ok(())
    }
}

impl BackgroundAudio {
    pub fn new(track: impl Into<PathBuf>, volume: f32) -> Self {
        Self {
            track: track.into(),
            volume: volume.clamp(0.0, 2.0),
            player: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.player
            .as_ref()
            .map(|p| !p.sink.is_paused() && !p.sink.empty())
            .unwrap_or(false)
    }

    /// Play if paused, pause if playing. Returns whether audio is now
    /// playing. A failed start leaves playback paused.
    pub fn toggle(&mut self) -> Result<bool> {
        if self.is_playing() {
            self.pause();
            Ok(false)
        } else {
            self.play()?;
            Ok(true)
        }
    }

    fn play(&mut self) -> Result<()> {
        if self.player.is_none() {
            debug!(track = %self.track.display(), "Opening background audio");
            self.player = Some(Player::open(self.volume)?);
        }
        let Some(player) = self.player.as_mut() else {
            return Ok(());
        };
        if player.sink.empty() {
            player.queue_track(&self.track)?;
        }
        player.sink.play();
        info!(track = %self.track.display(), "Background audio playing");
        Ok(())
    }

    pub fn pause(&mut self) {
        if let Some(player) = &self.player {
            player.sink.pause();
            info!("Background audio paused");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        let audio = BackgroundAudio::new("missing.mp3", 1.0);
        assert!(!audio.is_playing());
    }

    #[test]
    fn failed_start_stays_paused() {
        let mut audio = BackgroundAudio::new("/nonexistent/overfunction/track.mp3", 1.0);
        assert!(audio.toggle().is_err());
        assert!(!audio.is_playing());
    }
}
