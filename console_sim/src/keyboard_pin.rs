use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use keyboard_query::{DeviceQuery, DeviceState};

/// Key which behaves like a button wired to a pull-up input: held key reads low
pub struct KeyboardPin {
    device_state: DeviceState,
    key_code: u16,
}

impl KeyboardPin {
    /// Factory function to create a [KeyboardPin]
    pub fn create(key_code: u16) -> KeyboardPin {
        let device_state = DeviceState::new();
        return KeyboardPin {
            device_state,
            key_code,
        };
    }

    fn is_held(&self) -> bool {
        let keys = &self.device_state.get_keys();
        return keys.contains(&self.key_code);
    }
}

impl ErrorType for KeyboardPin {
    type Error = Infallible;
}

impl InputPin for KeyboardPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!self.is_held())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.is_held())
    }
}
