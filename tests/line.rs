mod tests {
    use core::convert::Infallible;
    use std::cell::RefCell;

    use embedded_hal::digital::{ErrorType, OutputPin};
    use myrtio_chainable_led::{BusLine, HalLine, LineId};

    struct FakePin<'a> {
        writes: &'a RefCell<Vec<bool>>,
    }

    impl ErrorType for FakePin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for FakePin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.writes.borrow_mut().push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.writes.borrow_mut().push(true);
            Ok(())
        }
    }

    #[test]
    fn test_hal_line_forwards_levels() {
        let writes = RefCell::new(Vec::new());
        let mut line = HalLine::new(FakePin { writes: &writes });

        assert!(line.is_ready());
        assert_eq!(line.configure_output(), Ok(()));
        line.set(true);
        line.set(false);
        line.set(true);

        assert_eq!(*writes.borrow(), [true, false, true]);
    }

    #[test]
    fn test_line_id_names() {
        assert_eq!(LineId::Clock.as_str(), "clock");
        assert_eq!(LineId::Data.to_string(), "data");
    }
}
