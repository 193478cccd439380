use std::cell::Cell;
use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Lanc bus which loops the lanc output back to the lanc input.
///
/// The output pin goes through an inverting driver, the input pin reads the bus as is.
pub struct Wire {
    high: Cell<bool>,
}

impl Wire {
    /// Starts low, which is what an idle (high) output pin leaves on the bus
    pub fn create() -> Self {
        return Wire {
            high: Cell::new(false),
        };
    }

    pub fn is_high(&self) -> bool {
        self.high.get()
    }

    /// Input pin reading the bus
    pub fn pin(&self) -> WirePin<'_> {
        WirePin { wire: self }
    }

    /// Output pin driving the bus through the inverting stage
    pub fn driver(&self) -> DriverPin<'_> {
        DriverPin { wire: self }
    }
}

pub struct WirePin<'a> {
    wire: &'a Wire,
}

impl<'a> ErrorType for WirePin<'a> {
    type Error = Infallible;
}

impl<'a> InputPin for WirePin<'a> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.wire.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.wire.high.get())
    }
}

pub struct DriverPin<'a> {
    wire: &'a Wire,
}

impl<'a> ErrorType for DriverPin<'a> {
    type Error = Infallible;
}

impl<'a> OutputPin for DriverPin<'a> {
    /// Releases the bus
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.wire.high.set(true);
        Ok(())
    }

    /// Pulls the bus down
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.wire.high.set(false);
        Ok(())
    }
}
