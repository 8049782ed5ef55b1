//! Status listener port: observers of the security service.

use catpoint_domain::error::CatpointError;
use catpoint_domain::status::AlarmStatus;

/// Receives callbacks from the security service.
///
/// Only [`notify`](Self::notify) is required; the other callbacks default to
/// no-ops so a listener implements just what it displays. A returned error
/// stops the fan-out and is handed back to whoever drove the service.
pub trait StatusListener {
    /// The alarm status was written.
    fn notify(&mut self, status: AlarmStatus) -> Result<(), CatpointError>;

    /// An image was classified.
    fn cat_detected(&mut self, _detected: bool) -> Result<(), CatpointError> {
        Ok(())
    }

    /// One or more sensors changed, were reset, added or removed.
    fn sensor_status_changed(&mut self) -> Result<(), CatpointError> {
        Ok(())
    }
}
