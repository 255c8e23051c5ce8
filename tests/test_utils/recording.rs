//! In-memory transport double.
//!
//! `RecordingConnector` hands out connections that capture every POST
//! instead of touching the network, and counts how many connections were
//! opened and dropped.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use loggly_shipper::{ClientSettings, Connection, Connector, DeliveryError};

/// A captured `(url, body)` pair.
pub type Post = (String, String);

/// Shared view of everything the double observed.
#[derive(Clone, Default)]
pub struct Recorder {
    connects: Arc<AtomicUsize>,
    releases: Arc<AtomicUsize>,
    posts: Arc<Mutex<Vec<Post>>>,
    settings: Arc<Mutex<Option<ClientSettings>>>,
}

impl Recorder {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().expect("posts lock").clone()
    }

    pub fn settings(&self) -> Option<ClientSettings> {
        *self.settings.lock().expect("settings lock")
    }
}

pub struct RecordingConnector {
    recorder: Recorder,
    fail_with: Option<DeliveryError>,
    refuse: bool,
}

impl RecordingConnector {
    pub fn new() -> (Self, Recorder) {
        let recorder = Recorder::default();
        let connector = Self {
            recorder: recorder.clone(),
            fail_with: None,
            refuse: false,
        };
        (connector, recorder)
    }

    /// Every POST on connections from this connector fails with `err`.
    pub fn failing_with(mut self, err: DeliveryError) -> Self {
        self.fail_with = Some(err);
        self
    }

    /// `connect` itself fails.
    pub fn refusing(mut self) -> Self {
        self.refuse = true;
        self
    }
}

impl Connector for RecordingConnector {
    fn connect(&self, settings: &ClientSettings) -> Result<Box<dyn Connection>, DeliveryError> {
        if self.refuse {
            return Err(DeliveryError::Connect("refused by test".into()));
        }
        self.recorder.connects.fetch_add(1, Ordering::SeqCst);
        *self.recorder.settings.lock().expect("settings lock") = Some(*settings);
        Ok(Box::new(RecordingConnection {
            recorder: self.recorder.clone(),
            fail_with: self.fail_with.clone(),
        }))
    }
}

struct RecordingConnection {
    recorder: Recorder,
    fail_with: Option<DeliveryError>,
}

impl Connection for RecordingConnection {
    fn post_json(&mut self, url: &str, body: &str) -> Result<(), DeliveryError> {
        self.recorder
            .posts
            .lock()
            .expect("posts lock")
            .push((url.to_owned(), body.to_owned()));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Drop for RecordingConnection {
    fn drop(&mut self) {
        self.recorder.releases.fetch_add(1, Ordering::SeqCst);
    }
}
