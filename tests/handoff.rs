mod tests {
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_time::{Duration, Timer};
    use myrtio_chainable_led::{Dropped, HandoffSlot, Rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_offer_to_empty_slot() {
        let slot = HandoffSlot::new();
        assert!(!slot.is_full());
        assert_eq!(slot.offer(RED), Ok(()));
        assert!(slot.is_full());
        assert_eq!(slot.try_take(), Some(RED));
        assert_eq!(slot.try_take(), None);
        assert!(!slot.is_full());
    }

    #[test]
    fn test_offer_to_full_slot_drops_new_value() {
        let slot = HandoffSlot::new();
        slot.offer(RED).unwrap();
        assert_eq!(slot.offer(BLUE), Err(Dropped(BLUE)));
        assert_eq!(slot.try_take(), Some(RED));
        assert_eq!(slot.try_take(), None);
    }

    #[test]
    fn test_take_returns_pending_value() {
        let slot = HandoffSlot::new();
        slot.offer(BLUE).unwrap();
        assert_eq!(block_on(slot.take()), BLUE);
        assert!(!slot.is_full());
    }

    #[test]
    fn test_take_waits_for_offer() {
        let slot = HandoffSlot::new();
        let sender = slot.sender();
        let receiver = slot.receiver();

        let (taken, offered) = block_on(join(receiver.take(), async {
            Timer::after(Duration::from_millis(5)).await;
            sender.offer(RED)
        }));

        assert_eq!(offered, Ok(()));
        assert_eq!(taken, RED);
        assert_eq!(receiver.try_take(), None);
    }

    #[test]
    fn test_slot_in_static() {
        static SLOT: HandoffSlot<Rgb> = HandoffSlot::new();

        SLOT.sender().offer(RED).unwrap();
        assert_eq!(SLOT.receiver().try_take(), Some(RED));
    }
}
