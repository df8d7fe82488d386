use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::control::{bus::SensorBus, reading::Publish, shared::SharedFlag};

#[derive(Debug, Error)]
pub enum SensorError {
    #[error("unable to initialise {sensor}: {reason}")]
    Init { sensor: &'static str, reason: String },
    #[error("failed to start sensor poller thread")]
    Spawn(#[from] std::io::Error),
    #[error("sensor poller thread panicked")]
    PollerPanicked,
}

/// A polled touch sensor driver.
///
/// `read` is called from the poller thread only. It may block briefly (bus
/// transactions) but must not be called from the audio thread.
pub trait TouchSensor: Send {
    type Reading: Publish;

    /// Human-readable sensor name for diagnostics.
    fn name(&self) -> &'static str;

    /// Bring the sensor up. Called once, before polling starts.
    fn setup(&mut self) -> Result<(), SensorError>;

    /// Take one reading.
    fn read(&mut self) -> Self::Reading;
}

/// Low-priority loop that samples both sensors and publishes their readings.
pub struct SensorPoller {
    bus: SensorBus,
    interval: Duration,
}

impl SensorPoller {
    /// Time between polls.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(12);

    pub fn new(bus: SensorBus) -> Self {
        Self {
            bus,
            interval: Self::DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Read both sensors once and publish the results.
    pub fn poll_once<B: TouchSensor, S: TouchSensor>(&self, bar: &mut B, square: &mut S) {
        bar.read().publish(&self.bus);
        square.read().publish(&self.bus);
    }

    /// Set up both sensors, then poll them on a background thread.
    ///
    /// Setup failures are logged and returned before any thread is started.
    pub fn spawn<B, S>(self, mut bar: B, mut square: S) -> Result<PollerHandle, SensorError>
    where
        B: TouchSensor + 'static,
        S: TouchSensor + 'static,
    {
        setup_sensor(&mut bar)?;
        setup_sensor(&mut square)?;

        let stop = SharedFlag::new(false);
        let thread = thread::Builder::new().name("sensor-poller".into()).spawn({
            let stop = stop.clone();
            move || {
                while !stop.load() {
                    self.poll_once(&mut bar, &mut square);
                    thread::sleep(self.interval);
                }
                debug!("sensor poller stopped");
            }
        })?;

        Ok(PollerHandle {
            stop,
            thread: Some(thread),
        })
    }
}

fn setup_sensor<T: TouchSensor>(sensor: &mut T) -> Result<(), SensorError> {
    match sensor.setup() {
        Ok(()) => {
            info!(sensor = sensor.name(), "touch sensor ready");
            Ok(())
        }
        Err(err) => {
            error!(sensor = sensor.name(), %err, "touch sensor setup failed");
            Err(err)
        }
    }
}

/// Owns the poller thread. Dropping the handle stops and joins it.
pub struct PollerHandle {
    stop: SharedFlag,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Raise the stop flag and join the thread.
    ///
    /// A poller that died from a panic is reported here. Calling `stop`
    /// again after that returns `Ok`.
    pub fn stop(&mut self) -> Result<(), SensorError> {
        self.stop.store(true);
        match self.thread.take().map(JoinHandle::join) {
            Some(Err(_)) => {
                error!("sensor poller panicked");
                Err(SensorError::PollerPanicked)
            }
            _ => Ok(()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        // Already logged by stop
        let _ = self.stop();
    }
}
