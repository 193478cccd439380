#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::convert::Infallible;

    use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin, OutputPin};

    use lanc_control::bsp::line::Line;
    use lanc_control::bsp::pin::Pin;
    use lanc_control::hal::{PolarityInput, PolarityOutput, PullUpButton};
    use lanc_control::pinout::{Polarity, Role};

    #[test]
    fn pull_up_button_is_down_when_low() {
        let high = Cell::new(true);
        let button = PullUpButton::new(TestInput { high: &high });
        assert!(!button.is_down());

        high.set(false);
        assert!(button.is_down());
    }

    #[test]
    fn failed_read_counts_as_released() {
        let button = PullUpButton::new(BrokenPin);
        assert!(!button.is_down());

        let line = PolarityInput::new(BrokenPin, Polarity::Normal);
        assert!(!line.is_active());
    }

    #[test]
    fn lanc_out_is_driven_inverted() {
        let high = Cell::new(false);
        let lanc_out = PolarityOutput::for_role(Role::LancOut, TestOutput { high: &high });
        assert_eq!(lanc_out.polarity(), Polarity::Inverted);

        // idle line is driven high right away
        assert!(!lanc_out.is_active());
        assert!(high.get());

        lanc_out.set_active(true);
        assert!(lanc_out.is_active());
        assert!(!high.get());

        lanc_out.set_active(false);
        assert!(high.get());
    }

    #[test]
    fn normal_output_follows_logical_state() {
        let high = Cell::new(true);
        let output = PolarityOutput::new(TestOutput { high: &high }, Polarity::Normal);
        assert!(!high.get());

        output.set_active(true);
        assert!(high.get());
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let output = PolarityOutput::new(BrokenPin, Polarity::Inverted);
        output.set_active(true);
        assert!(!output.is_active());
    }

    #[test]
    fn lanc_in_reads_level_as_is() {
        let high = Cell::new(false);
        let lanc_in = PolarityInput::for_role(Role::LancIn, TestInput { high: &high });
        assert!(!lanc_in.is_active());

        high.set(true);
        assert!(lanc_in.is_active());

        // input lines cannot be driven
        lanc_in.set_active(false);
        assert!(high.get());
    }

    #[test]
    fn inverted_input_reads_low_as_active() {
        let high = Cell::new(false);
        let line = PolarityInput::new(TestInput { high: &high }, Polarity::Inverted);
        assert!(line.is_active());
    }

    #[test]
    fn lanc_in_reads_back_what_lanc_out_sent() {
        // idle output pin is high, the driver keeps the bus low
        let bus = Cell::new(false);
        let lanc_out = PolarityOutput::for_role(Role::LancOut, InvertingDriver { bus: &bus });
        let lanc_in = PolarityInput::for_role(Role::LancIn, TestInput { high: &bus });

        assert!(!lanc_out.is_active());
        assert_eq!(lanc_out.is_active(), lanc_in.is_active());
        assert!(!bus.get());

        lanc_out.set_active(true);
        assert!(lanc_in.is_active());
        assert_eq!(lanc_out.is_active(), lanc_in.is_active());
        assert!(bus.get());

        lanc_out.set_active(false);
        assert!(!lanc_in.is_active());
        assert_eq!(lanc_out.is_active(), lanc_in.is_active());
    }

    #[test]
    fn pins_can_be_released() {
        let high = Cell::new(true);
        let button = PullUpButton::new(TestInput { high: &high });
        let mut pin = button.release();
        assert_eq!(pin.is_high(), Ok(true));
    }

    struct TestInput<'a> {
        high: &'a Cell<bool>,
    }

    impl<'a> ErrorType for TestInput<'a> {
        type Error = Infallible;
    }

    impl<'a> InputPin for TestInput<'a> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high.get())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high.get())
        }
    }

    struct TestOutput<'a> {
        high: &'a Cell<bool>,
    }

    impl<'a> ErrorType for TestOutput<'a> {
        type Error = Infallible;
    }

    impl<'a> OutputPin for TestOutput<'a> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high.set(true);
            Ok(())
        }
    }

    /// Transistor stage between the lanc output pin and the bus: high pin pulls the bus low
    struct InvertingDriver<'a> {
        bus: &'a Cell<bool>,
    }

    impl<'a> ErrorType for InvertingDriver<'a> {
        type Error = Infallible;
    }

    impl<'a> OutputPin for InvertingDriver<'a> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.bus.set(true);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.bus.set(false);
            Ok(())
        }
    }

    /// Pin whose every access fails, like a disconnected expander
    struct BrokenPin;

    #[derive(Debug)]
    struct PinError;

    impl Error for PinError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for BrokenPin {
        type Error = PinError;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, PinError> {
            Err(PinError)
        }

        fn is_low(&mut self) -> Result<bool, PinError> {
            Err(PinError)
        }
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), PinError> {
            Err(PinError)
        }

        fn set_high(&mut self) -> Result<(), PinError> {
            Err(PinError)
        }
    }
}
