// Purpose: everything that crosses a thread boundary on its way to or from
// the audio callback. Sensor polling and the UI write here; the renderer only
// ever reads a `ControlSnapshot`.

pub mod bus;
pub mod gesture;
pub mod reading;
pub mod sensor;
pub mod shared;
pub mod slider;

pub use bus::{ControlSnapshot, SensorBus, StatusBus, StatusSnapshot};
pub use reading::{BarReading, RawTouch, SquareReading};
pub use sensor::{PollerHandle, SensorError, SensorPoller, TouchSensor};
pub use slider::DecibelSlider;
