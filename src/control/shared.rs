//! Latest-value cells shared between the sensor, UI and audio threads.
//!
//! Each cell holds exactly one value. Writers overwrite, readers see the most
//! recent write; there is no queue and no lock. The audio thread can read
//! these every block without ever waiting on another thread.

use std::sync::{
    atomic::{AtomicBool, AtomicU32, Ordering},
    Arc,
};

/// A shared `f32`, stored as its bit pattern in an `AtomicU32`.
#[derive(Debug, Clone)]
pub struct SharedScalar(Arc<AtomicU32>);

impl SharedScalar {
    pub fn new(value: f32) -> Self {
        Self(Arc::new(AtomicU32::new(value.to_bits())))
    }

    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for SharedScalar {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A shared `bool`.
#[derive(Debug, Clone, Default)]
pub struct SharedFlag(Arc<AtomicBool>);

impl SharedFlag {
    pub fn new(value: bool) -> Self {
        Self(Arc::new(AtomicBool::new(value)))
    }

    #[inline]
    pub fn load(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn store(&self, value: bool) {
        self.0.store(value, Ordering::Relaxed);
    }
}
