//! Paging transitions: smooth scroll animation, or an instant jump when the
//! desktop asks for reduced motion.

use crate::config::MotionPreference;
use anyhow::{Context, Result, bail};
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::debug;

/// Length of a smooth paging scroll.
pub const DEFAULT_SCROLL_ANIMATION: Duration = Duration::from_millis(320);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Pick the paging transition. `probe` reports whether the environment asks
/// for reduced motion; a failed probe means "no signal" and keeps animations.
pub fn resolve_behavior(
    preference: MotionPreference,
    probe: impl FnOnce() -> Result<bool>,
) -> ScrollBehavior {
    match preference {
        MotionPreference::Reduce => ScrollBehavior::Instant,
        MotionPreference::Animate => ScrollBehavior::Smooth,
        MotionPreference::System => match probe() {
            Ok(true) => ScrollBehavior::Instant,
            Ok(false) => ScrollBehavior::Smooth,
            Err(err) => {
                debug!("Reduced-motion probe unavailable, keeping animations: {err:#}");
                ScrollBehavior::Smooth
            }
        },
    }
}

/// Ask the desktop whether animations are disabled.
///
/// GNOME exposes this as `org.gnome.desktop.interface enable-animations`.
pub fn probe_system_reduced_motion() -> Result<bool> {
    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "enable-animations"])
        .output()
        .context("Running gsettings")?;
    if !output.status.success() {
        bail!("gsettings exited with {}", output.status);
    }
    let value = String::from_utf8_lossy(&output.stdout);
    parse_enable_animations(&value)
}

fn parse_enable_animations(raw: &str) -> Result<bool> {
    match raw.trim() {
        "false" => Ok(true),
        "true" => Ok(false),
        other => bail!("unexpected enable-animations value {other:?}"),
    }
}

/// A horizontal scroll in flight between two offsets.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Offset to show at `now`, easing out towards the target.
    pub fn sample(&self, now: Instant) -> f32 {
        if self.duration.is_zero() || self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn explicit_preferences_skip_the_probe() {
        let probe = || -> Result<bool> { panic!("probe should not run") };
        assert_eq!(
            resolve_behavior(MotionPreference::Reduce, probe),
            ScrollBehavior::Instant
        );
        assert_eq!(
            resolve_behavior(MotionPreference::Animate, || Ok(true)),
            ScrollBehavior::Smooth
        );
    }

    #[test]
    fn system_preference_follows_probe() {
        assert_eq!(
            resolve_behavior(MotionPreference::System, || Ok(true)),
            ScrollBehavior::Instant
        );
        assert_eq!(
            resolve_behavior(MotionPreference::System, || Ok(false)),
            ScrollBehavior::Smooth
        );
    }

    #[test]
    fn failed_probe_keeps_animations() {
        assert_eq!(
            resolve_behavior(MotionPreference::System, || Err(anyhow!("no desktop"))),
            ScrollBehavior::Smooth
        );
    }

    #[test]
    fn parses_gsettings_output() {
        assert!(parse_enable_animations("false\n").unwrap());
        assert!(!parse_enable_animations("true").unwrap());
        assert!(parse_enable_animations("maybe").is_err());
    }

    #[test]
    fn animation_eases_to_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 800.0, start, Duration::from_millis(300));
        assert_eq!(anim.sample(start), 0.0);
        let mid = anim.sample(start + Duration::from_millis(150));
        assert!(mid > 400.0 && mid < 800.0, "ease-out should be past halfway: {mid}");
        assert_eq!(anim.sample(start + Duration::from_millis(300)), 800.0);
        assert!(anim.is_finished(start + Duration::from_millis(301)));
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(800.0, 0.0, start, Duration::ZERO);
        assert_eq!(anim.sample(start), 0.0);
        assert!(anim.is_finished(start));
    }
}
