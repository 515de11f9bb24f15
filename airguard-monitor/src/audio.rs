//! Alarm audio
//!
//! ## Degrading to Silence
//!
//! The alarm sound is a file on disk. If it is missing, unreadable or empty
//! the monitor must keep evaluating; it just cannot make noise. Loading
//! therefore returns `Option<AlarmAsset>` and logs a warning instead of
//! failing, and [`AlarmOutput`] turns every transition into a no-op while it
//! has no asset.
//!
//! ## Player Seam
//!
//! Actual playback belongs to whatever UI hosts the monitor. It implements
//! [`AlarmPlayer`]; the monitor only ever calls it on an
//! [`AlarmTransition`], never per evaluation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use airguard_core::{AlarmMode, AlarmTransition};

/// Alarm sound loaded into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmAsset {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl AlarmAsset {
    /// Read the whole file
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        if bytes.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "alarm asset is empty"));
        }

        Ok(Self { path: path.to_path_buf(), bytes })
    }

    /// Read the file, or log why not and return `None`
    pub fn load_or_silent(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(asset) => {
                log::debug!("Loaded alarm asset {} ({} bytes)", path.display(), asset.bytes.len());
                Some(asset)
            }
            Err(e) => {
                log::warn!("Alarm asset {} unavailable, alarms will be silent: {}", path.display(), e);
                None
            }
        }
    }

    /// Wrap bytes that are already in memory
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self { path: path.into(), bytes }
    }

    /// Where the sound came from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encoded sound data
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Something that can play the alarm sound
pub trait AlarmPlayer {
    /// Start playing `asset`, replacing any current tone
    fn start(&mut self, mode: AlarmMode, asset: &AlarmAsset);

    /// Stop any current tone
    fn stop(&mut self);
}

/// Player that never makes a sound
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlayer;

impl AlarmPlayer for NullPlayer {
    fn start(&mut self, _mode: AlarmMode, _asset: &AlarmAsset) {}

    fn stop(&mut self) {}
}

/// Player plus the sound it plays
#[derive(Debug)]
pub struct AlarmOutput<P> {
    player: P,
    asset: Option<AlarmAsset>,
}

impl<P: AlarmPlayer> AlarmOutput<P> {
    /// Pair a player with an optional asset
    pub fn new(player: P, asset: Option<AlarmAsset>) -> Self {
        Self { player, asset }
    }

    /// Whether transitions will reach the player
    pub fn is_audible(&self) -> bool {
        self.asset.is_some()
    }

    /// Apply one transition to the player
    pub fn apply(&mut self, transition: AlarmTransition) {
        let Some(asset) = &self.asset else {
            if transition != AlarmTransition::None {
                log::debug!("No alarm asset, ignoring {:?}", transition);
            }
            return;
        };

        match transition {
            AlarmTransition::None => {}
            AlarmTransition::Start(mode) => {
                log::info!("Starting {:?} alarm", mode);
                self.player.start(mode, asset);
            }
            AlarmTransition::Stop => {
                log::info!("Stopping alarm");
                self.player.stop();
            }
        }
    }

    /// The wrapped player
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Take back the wrapped player
    pub fn into_player(self) -> P {
        self.player
    }
}
