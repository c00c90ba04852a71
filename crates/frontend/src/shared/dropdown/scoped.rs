/// Слот для ресурса, который должен существовать, пока истинно условие
/// (например, слушатели событий, пока список открыт).
///
/// Освобождение происходит в `Drop` удерживаемого значения, поэтому любой путь
/// выхода (закрытие, размонтирование) снимает ресурс ровно один раз.
#[derive(Debug)]
pub struct Scoped<T> {
    held: Option<T>,
}

impl<T> Default for Scoped<T> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<T> Scoped<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Приводит слот к состоянию `active`: захватывает ресурс через
    /// `acquire`, если его ещё нет, или отпускает, если он больше не нужен.
    pub fn sync(&mut self, active: bool, acquire: impl FnOnce() -> Option<T>) {
        match (active, self.held.is_some()) {
            (true, false) => self.held = acquire(),
            (false, true) => self.release(),
            _ => {}
        }
    }

    pub fn release(&mut self) {
        self.held.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dropdown::machine::DropdownMachine;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Считает живые «слушатели»
    struct Probe {
        live: Rc<Cell<i32>>,
    }

    impl Probe {
        fn attach(live: &Rc<Cell<i32>>, acquired: &Rc<Cell<u32>>) -> Self {
            live.set(live.get() + 1);
            acquired.set(acquired.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn acquires_once_and_releases_on_deactivate() {
        let live = Rc::new(Cell::new(0));
        let acquired = Rc::new(Cell::new(0));
        let mut slot = Scoped::new();

        slot.sync(true, || Some(Probe::attach(&live, &acquired)));
        slot.sync(true, || Some(Probe::attach(&live, &acquired)));
        assert_eq!(live.get(), 1);
        assert_eq!(acquired.get(), 1);

        slot.sync(false, || Some(Probe::attach(&live, &acquired)));
        assert_eq!(live.get(), 0);
        assert!(!slot.is_held());
    }

    #[test]
    fn open_close_cycles_never_leak_or_duplicate() {
        let live = Rc::new(Cell::new(0));
        let acquired = Rc::new(Cell::new(0));
        let mut slot = Scoped::new();
        let mut m = DropdownMachine::new();

        for i in 0..25 {
            m.toggle(false);
            slot.sync(m.is_open(), || Some(Probe::attach(&live, &acquired)));
            assert_eq!(live.get(), 1);

            // close through different paths
            match i % 3 {
                0 => {
                    m.toggle(false);
                }
                1 => {
                    m.select_plain("v", false);
                }
                _ => {
                    m.select_status(Some("a"), "b", true, false);
                    let ticket = m.settle(Ok(())).unwrap();
                    m.finish_close(ticket);
                }
            }
            slot.sync(m.is_open(), || Some(Probe::attach(&live, &acquired)));
            assert_eq!(live.get(), 0);
        }
        assert_eq!(acquired.get(), 25);
    }

    #[test]
    fn dropping_slot_releases_resource() {
        let live = Rc::new(Cell::new(0));
        let acquired = Rc::new(Cell::new(0));
        {
            let mut slot = Scoped::new();
            slot.sync(true, || Some(Probe::attach(&live, &acquired)));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn failed_acquire_is_retried_on_next_sync() {
        let live = Rc::new(Cell::new(0));
        let acquired = Rc::new(Cell::new(0));
        let mut slot: Scoped<Probe> = Scoped::new();

        slot.sync(true, || None);
        assert!(!slot.is_held());
        slot.sync(true, || Some(Probe::attach(&live, &acquired)));
        assert!(slot.is_held());
        assert_eq!(live.get(), 1);
    }
}
