mod tests {
    use myrtio_chainable_led::config::{DEFAULT_CADENCE, DEFAULT_CLOCK_HALF_PERIOD_NS};
    use myrtio_chainable_led::{ChainConfig, Duration, InitError, LineId};

    #[test]
    fn test_default_timings() {
        let config = ChainConfig::default();
        assert_eq!(config.cadence, Duration::from_secs(2));
        assert_eq!(config.clock_half_period_ns, 10_000);
        assert_eq!(config.clock_half_period_ns, DEFAULT_CLOCK_HALF_PERIOD_NS);
    }

    #[test]
    fn test_builders_touch_one_field() {
        let config = ChainConfig::DEFAULT.with_cadence(Duration::from_millis(500));
        assert_eq!(config.cadence, Duration::from_millis(500));
        assert_eq!(config.clock_half_period_ns, DEFAULT_CLOCK_HALF_PERIOD_NS);

        let config = ChainConfig::DEFAULT.with_clock_half_period_ns(250);
        assert_eq!(config.clock_half_period_ns, 250);
        assert_eq!(config.cadence, DEFAULT_CADENCE);
    }

    #[test]
    fn test_init_error_display() {
        let err: InitError<&str> = InitError::NotReady(LineId::Clock);
        assert_eq!(err.to_string(), "clock line not ready");

        let err = InitError::Configure {
            line: LineId::Data,
            source: "busy",
        };
        assert_eq!(err.to_string(), "data line configuration failed: busy");
    }

    #[test]
    fn test_init_error_is_error() {
        let err: InitError<&str> = InitError::NotReady(LineId::Data);
        let err: &dyn core::error::Error = &err;
        assert_eq!(err.to_string(), "data line not ready");
    }
}
