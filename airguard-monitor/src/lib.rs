//! Polling room monitor for AirGuard
//!
//! Wraps the pure classifier from `airguard-core` with the pieces an
//! interactive session needs:
//!
//! - [`config`]: JSON configuration with sensible defaults
//! - [`source`]: where each tick's inputs come from
//! - [`audio`]: alarm asset loading and the player seam
//! - [`timer`]: fixed-interval re-evaluation
//! - [`report`]: text rendering of an evaluation
//! - [`monitor`]: the session tying them together
//!
//! ```
//! use airguard_core::{Inputs, Status};
//! use airguard_monitor::{
//!     audio::NullPlayer, monitor::Monitor, source::FixedSource, timer::CountingTicker,
//!     MonitorConfig,
//! };
//!
//! let config = MonitorConfig::from_json_str(r#"{ "alarm_asset": "missing.mp3" }"#)?;
//! let mut monitor = Monitor::new(&config, FixedSource::new(Inputs::default()), NullPlayer);
//!
//! let mut ticker = CountingTicker::default();
//! assert_eq!(monitor.run(&mut ticker, Some(3)), 3);
//! assert_eq!(monitor.last_evaluation().unwrap().assessment.status, Status::Normal);
//! # Ok::<(), airguard_monitor::MonitorError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod audio;
pub mod config;
pub mod errors;
pub mod monitor;
pub mod report;
pub mod source;
pub mod timer;

pub use config::MonitorConfig;
pub use errors::{MonitorError, MonitorResult};
pub use monitor::Monitor;
