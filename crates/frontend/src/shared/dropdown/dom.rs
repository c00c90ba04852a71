//! DOM-обвязка: измерение кнопки, проверка попадания клика и
//! слушатели событий, которые снимаются при `Drop`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, Node};

use super::geometry::{AnchorRect, ScrollOffset};

/// Слушатель события; при уничтожении снимается с цели
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback_and_bool(
                event,
                closure.as_ref().unchecked_ref(),
                capture,
            )
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            capture,
            closure,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Набор слушателей открытого списка: resize, scroll (capture) и
/// mousedown вне списка
pub struct OverlayListeners {
    _guards: Vec<EventListenerGuard>,
}

impl OverlayListeners {
    pub fn attach(
        on_reposition: impl Fn() + Clone + 'static,
        on_pointer_down: impl Fn(Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let reposition_resize = on_reposition.clone();
        let resize = EventListenerGuard::new(window.as_ref(), "resize", false, move |_| {
            reposition_resize()
        })?;
        // capture: прокрутка любого предка тоже сдвигает кнопку
        let scroll = EventListenerGuard::new(document.as_ref(), "scroll", true, move |_| {
            on_reposition()
        })?;
        let pointer = EventListenerGuard::new(document.as_ref(), "mousedown", false, move |ev| {
            on_pointer_down(ev)
        })?;

        Some(Self {
            _guards: vec![resize, scroll, pointer],
        })
    }
}

pub fn anchor_rect(el: &Element) -> AnchorRect {
    let rect = el.get_bounding_client_rect();
    AnchorRect {
        left: rect.left(),
        bottom: rect.bottom(),
        width: rect.width(),
    }
}

pub fn scroll_offset() -> ScrollOffset {
    web_sys::window()
        .map(|w| ScrollOffset {
            x: w.scroll_x().unwrap_or(0.0),
            y: w.scroll_y().unwrap_or(0.0),
        })
        .unwrap_or_default()
}

/// Лежит ли цель события внутри контейнера.
/// Список рендерится в `<body>`, отдельно от кнопки, поэтому
/// вызывающий проверяет оба узла.
pub fn event_within(ev: &Event, container: Option<&Element>) -> bool {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return false;
    };
    container.is_some_and(|c| c.contains(Some(&target)))
}
