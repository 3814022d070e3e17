//! Single-slot handoff between one producer and one consumer.
//!
//! Built on `critical-section`, so it is interrupt and thread safe and can
//! live in a `static`. Offers never wait: when the slot is already full the
//! new value is handed back to the caller and the pending one stays.

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::Poll;

use critical_section::Mutex;
use embassy_sync::waitqueue::WakerRegistration;

/// Value that did not fit because the slot was full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropped<T>(pub T);

struct SlotState<T> {
    pending: Option<T>,
    consumer: WakerRegistration,
}

/// Capacity-1 slot.
pub struct HandoffSlot<T> {
    inner: Mutex<RefCell<SlotState<T>>>,
}

impl<T> HandoffSlot<T> {
    /// Create a new empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(SlotState {
                pending: None,
                consumer: WakerRegistration::new(),
            })),
        }
    }

    /// Get the producer handle for this slot.
    pub const fn sender(&self) -> SlotSender<'_, T> {
        SlotSender { slot: self }
    }

    /// Get the consumer handle for this slot.
    pub const fn receiver(&self) -> SlotReceiver<'_, T> {
        SlotReceiver { slot: self }
    }

    /// Put a value into the slot without waiting.
    ///
    /// Returns `Err(Dropped(value))` if a value is already pending.
    pub fn offer(&self, value: T) -> Result<(), Dropped<T>> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if state.pending.is_some() {
                return Err(Dropped(value));
            }
            state.pending = Some(value);
            state.consumer.wake();
            Ok(())
        })
    }

    /// Take the pending value, if any.
    pub fn try_take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pending.take())
    }

    /// Wait until a value is pending and take it.
    pub async fn take(&self) -> T {
        poll_fn(|cx| {
            critical_section::with(|cs| {
                let mut state = self.inner.borrow(cs).borrow_mut();
                match state.pending.take() {
                    Some(value) => Poll::Ready(value),
                    None => {
                        state.consumer.register(cx.waker());
                        Poll::Pending
                    }
                }
            })
        })
        .await
    }

    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().pending.is_some())
    }
}

impl<T> Default for HandoffSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`HandoffSlot`].
pub struct SlotSender<'a, T> {
    slot: &'a HandoffSlot<T>,
}

impl<T> SlotSender<'_, T> {
    /// See [`HandoffSlot::offer`].
    pub fn offer(&self, value: T) -> Result<(), Dropped<T>> {
        self.slot.offer(value)
    }
}

impl<T> Clone for SlotSender<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotSender<'_, T> {}

/// Consumer side of a [`HandoffSlot`].
pub struct SlotReceiver<'a, T> {
    slot: &'a HandoffSlot<T>,
}

impl<T> SlotReceiver<'_, T> {
    /// See [`HandoffSlot::take`].
    pub async fn take(&self) -> T {
        self.slot.take().await
    }

    /// See [`HandoffSlot::try_take`].
    pub fn try_take(&self) -> Option<T> {
        self.slot.try_take()
    }
}

impl<T> Clone for SlotReceiver<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotReceiver<'_, T> {}
