//! Adapters from `embedded-hal` GPIO to the board traits.
//!
//! `embedded-hal` reads take `&mut self` while the board traits are read through
//! shared references, so the pins live in a `RefCell`.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use no_std_compat::cell::{Cell, RefCell};

use crate::bsp::line::Line;
use crate::bsp::pin::Pin;
use crate::pinout::{Polarity, Role};

/// Button between the pin and the ground, with the pull-up enabled
pub struct PullUpButton<I: InputPin> {
    pin: RefCell<I>,
}

impl<I: InputPin> PullUpButton<I> {
    pub fn new(pin: I) -> Self {
        PullUpButton {
            pin: RefCell::new(pin),
        }
    }

    pub fn release(self) -> I {
        self.pin.into_inner()
    }
}

impl<I: InputPin> Pin for PullUpButton<I> {
    /// A failed read counts as released
    fn is_down(&self) -> bool {
        match self.pin.borrow_mut().is_low() {
            Ok(low) => low,
            Err(error) => {
                log::warn!("button read failed: {:?}", error);
                false
            }
        }
    }
}

/// Output pin which applies a polarity to the logical state.
///
/// Reading back returns the last state written, not the state of the wire.
pub struct PolarityOutput<O: OutputPin> {
    pin: RefCell<O>,
    polarity: Polarity,
    active: Cell<bool>,
}

impl<O: OutputPin> PolarityOutput<O> {
    /// Starts inactive, the pin is driven accordingly right away
    pub fn new(pin: O, polarity: Polarity) -> Self {
        let output = PolarityOutput {
            pin: RefCell::new(pin),
            polarity,
            active: Cell::new(false),
        };
        output.set_active(false);
        output
    }

    /// Takes the polarity from the pinout
    pub fn for_role(role: Role, pin: O) -> Self {
        log::debug!("{} on pin {} ({:?})", role, role.pin(), role.polarity());
        Self::new(pin, role.polarity())
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn release(self) -> O {
        self.pin.into_inner()
    }
}

impl<O: OutputPin> Line for PolarityOutput<O> {
    fn set_active(&self, active: bool) {
        let state = PinState::from(self.polarity.level(active));
        if let Err(error) = self.pin.borrow_mut().set_state(state) {
            log::warn!("line write failed: {:?}", error);
            return;
        }
        self.active.set(active);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Input pin which applies a polarity to the level it reads
pub struct PolarityInput<I: InputPin> {
    pin: RefCell<I>,
    polarity: Polarity,
}

impl<I: InputPin> PolarityInput<I> {
    pub fn new(pin: I, polarity: Polarity) -> Self {
        PolarityInput {
            pin: RefCell::new(pin),
            polarity,
        }
    }

    pub fn for_role(role: Role, pin: I) -> Self {
        log::debug!("{} on pin {} ({:?})", role, role.pin(), role.polarity());
        Self::new(pin, role.polarity())
    }

    pub fn release(self) -> I {
        self.pin.into_inner()
    }
}

impl<I: InputPin> Line for PolarityInput<I> {
    fn set_active(&self, _active: bool) {
        log::warn!("cannot drive an input line");
    }

    /// A failed read counts as inactive
    fn is_active(&self) -> bool {
        match self.pin.borrow_mut().is_high() {
            Ok(high) => self.polarity.is_active(high),
            Err(error) => {
                log::warn!("line read failed: {:?}", error);
                false
            }
        }
    }
}
