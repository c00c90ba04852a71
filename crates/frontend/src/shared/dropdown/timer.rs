use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Один отложенный вызов на компонент.
///
/// Новый `schedule` отменяет предыдущий; при размонтировании таймер
/// снимается (сброс `Timeout` вызывает `clearTimeout`).
#[derive(Clone, Copy)]
pub struct TimerSlot {
    slot: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TimerSlot {
    pub fn new() -> Self {
        let slot = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            let _ = slot.try_update_value(|t| {
                t.take();
            });
        });
        Self { slot }
    }

    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, callback);
        // предыдущий таймер сбрасывается заменой
        let _ = self.slot.try_update_value(|t| {
            *t = Some(timeout);
        });
    }

    pub fn cancel(&self) {
        let _ = self.slot.try_update_value(|t| {
            t.take();
        });
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
