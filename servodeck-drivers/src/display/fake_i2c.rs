//! I2C bus that records writes

extern crate std;

use std::vec::Vec;

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// Records every write as `(address, bytes)`; fails all transfers when `fail` is set
#[derive(Debug, Default)]
pub struct RecordingI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
}

impl RecordingI2c {
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }
}

impl ErrorType for RecordingI2c {
    type Error = ErrorKind;
}

impl I2c for RecordingI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        for operation in operations.iter() {
            if let Operation::Write(bytes) = operation {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}
