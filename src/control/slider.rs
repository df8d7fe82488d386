use crate::dsp::convert::db_to_amplitude;

/// The master level control: a decibel slider clamped to [-60, 0] dB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecibelSlider {
    db: f32,
}

impl DecibelSlider {
    pub const MIN_DB: f32 = -60.0;
    pub const MAX_DB: f32 = 0.0;
    pub const DEFAULT_DB: f32 = 0.0;

    pub fn new() -> Self {
        Self {
            db: Self::DEFAULT_DB,
        }
    }

    /// Set the level, clamping into range. NaN is ignored.
    pub fn set(&mut self, db: f32) {
        if db.is_nan() {
            return;
        }
        self.db = db.clamp(Self::MIN_DB, Self::MAX_DB);
    }

    /// Move the slider by `delta_db`.
    pub fn nudge(&mut self, delta_db: f32) {
        self.set(self.db + delta_db);
    }

    pub fn db(&self) -> f32 {
        self.db
    }

    pub fn amplitude(&self) -> f32 {
        db_to_amplitude(self.db)
    }
}

impl Default for DecibelSlider {
    fn default() -> Self {
        Self::new()
    }
}
