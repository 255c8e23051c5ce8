//! Helpers shared by the integration test binaries. Not every binary uses
//! every helper.
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod recording;

pub use recording::{Recorder, RecordingConnector};
