use crate::drivers::{Facts, NetworkDriver};
use crate::error::DriverError;

/// An open driver that is closed on every exit path.
///
/// `close` consumes the session and reports the close result; any session
/// dropped without it (early return, `?`, panic unwinding) is closed from
/// `Drop` and a failure there is only logged.
pub struct Session {
    driver: Option<Box<dyn NetworkDriver>>,
    address: String,
}

impl Session {
    /// Open `driver`. If opening fails the driver is still closed before
    /// the error is returned.
    pub fn open(mut driver: Box<dyn NetworkDriver>, address: &str) -> Result<Self, DriverError> {
        tracing::debug!(address, "opening session");
        if let Err(e) = driver.open() {
            if let Err(close_err) = driver.close() {
                tracing::warn!(address, error = %close_err, "failed to close session after open error");
            }
            return Err(e);
        }

        Ok(Session {
            driver: Some(driver),
            address: address.to_string(),
        })
    }

    pub fn get_facts(&mut self) -> Result<Facts, DriverError> {
        match self.driver.as_mut() {
            Some(driver) => driver.get_facts(),
            None => Err(DriverError::NotOpen),
        }
    }

    pub fn close(mut self) -> Result<(), DriverError> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), DriverError> {
        match self.driver.take() {
            Some(mut driver) => {
                tracing::debug!(address = %self.address, "closing session");
                driver.close()
            }
            None => Ok(()),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            tracing::warn!(address = %self.address, error = %e, "failed to close session");
        }
    }
}
