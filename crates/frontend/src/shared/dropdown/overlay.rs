use leptos::html;
use leptos::prelude::*;

use super::dom::{anchor_rect, event_within, scroll_offset, OverlayListeners};
use super::geometry::{DropdownVariant, OverlayPosition};
use super::machine::DropdownMachine;
use super::scoped::Scoped;

/// Реактивное состояние одного выпадающего списка
#[derive(Clone, Copy)]
pub struct OverlayHandle {
    pub machine: RwSignal<DropdownMachine>,
    pub position: RwSignal<OverlayPosition>,
    pub anchor_ref: NodeRef<html::Div>,
    pub overlay_ref: NodeRef<html::Div>,
    pub is_open: Memo<bool>,
}

impl OverlayHandle {
    pub fn reposition(&self, variant: DropdownVariant) {
        if let Some(anchor) = self.anchor_ref.get_untracked() {
            let el: web_sys::Element = anchor.into();
            self.position.set(OverlayPosition::compute(
                anchor_rect(&el),
                scroll_offset(),
                variant,
            ));
        }
    }

    pub fn toggle(&self, disabled: bool) {
        self.machine.update(|m| {
            m.toggle(disabled);
        });
    }
}

/// Создаёт состояние списка и привязывает слушатели окна к фазе `Open`.
///
/// Слушатели захватываются при открытии и снимаются при любом закрытии
/// или размонтировании компонента.
pub fn use_overlay(variant: DropdownVariant) -> OverlayHandle {
    let machine = RwSignal::new(DropdownMachine::new());
    let is_open = Memo::new(move |_| machine.with(|m| m.is_open()));
    let handle = OverlayHandle {
        machine,
        position: RwSignal::new(OverlayPosition::default()),
        anchor_ref: NodeRef::new(),
        overlay_ref: NodeRef::new(),
        is_open,
    };

    let listeners = StoredValue::new_local(Scoped::<OverlayListeners>::new());

    Effect::new(move |_| {
        let open = is_open.get();
        if open {
            handle.reposition(variant);
        }
        listeners.update_value(|slot| {
            slot.sync(open, || {
                log::debug!("dropdown: attaching overlay listeners");
                OverlayListeners::attach(
                    move || handle.reposition(variant),
                    move |ev| {
                        let anchor = handle
                            .anchor_ref
                            .get_untracked()
                            .map(web_sys::Element::from);
                        let overlay = handle
                            .overlay_ref
                            .get_untracked()
                            .map(web_sys::Element::from);
                        let inside_anchor = event_within(&ev, anchor.as_ref());
                        let inside_overlay = event_within(&ev, overlay.as_ref());
                        handle.machine.update(|m| {
                            m.dismiss_outside(inside_anchor, inside_overlay);
                        });
                    },
                )
            });
        });
    });

    on_cleanup(move || {
        listeners.try_update_value(|slot| slot.release());
    });

    handle
}
