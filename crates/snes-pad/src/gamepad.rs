//! The polling surface shared by every controller backend

use crate::report::GamepadReport;

/// A controller the host can poll
///
/// The host calls [`init`](Gamepad::init) once, then on every tick
/// [`update`](Gamepad::update), [`changed`](Gamepad::changed) and, when
/// something changed, [`get_report`](Gamepad::get_report). All calls come
/// from one execution context.
///
/// Object safe, so a host can hold a `&mut dyn Gamepad<Error = E>`.
pub trait Gamepad {
    type Error;

    /// Configure the lines and take the first sample
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Take a fresh sample
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Whether the latest sample differs from the last report
    fn changed(&self) -> Result<bool, Self::Error>;

    /// Write the latest sample into `dst` and mark it as reported
    ///
    /// The sample is marked as reported even when `dst` is `None`, which
    /// clears a pending [`changed`](Gamepad::changed).
    fn get_report(&mut self, dst: Option<&mut GamepadReport>) -> Result<(), Self::Error>;
}
