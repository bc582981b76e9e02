//! Global search hotkey handling.
//!
//! The window listener is held as an owned handle and unregistered when the
//! handle drops, so re-keying or tearing the component down cannot leak a
//! listener.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Owned registration of a window `keydown` listener.
///
/// Dropping the handle removes the listener.
pub struct HotkeyHandle {
    closure: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl HotkeyHandle {
    /// Register a Ctrl+`code` listener that focuses `target` on a match.
    ///
    /// The browser default for the combination is suppressed. Focusing is a
    /// no-op while `target` has no mounted element. Returns `None` when no
    /// window is available or the listener cannot be attached.
    pub fn register(code: String, target: NodeRef<Input>) -> Option<Self> {
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                if ev.ctrl_key() && ev.code() == code {
                    ev.prevent_default();
                    if let Some(input) = target.get_untracked() {
                        let _ = input.focus();
                    }
                }
            },
        );

        let window = web_sys::window()?;
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { closure })
    }
}

impl Drop for HotkeyHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Installs the search-focus hotkey for as long as the component is mounted.
///
/// The registration follows `code`: changing the key code replaces the
/// previous listener.
#[component]
#[allow(clippy::unused_unit)]
pub fn SearchHotkey(
    /// `KeyboardEvent.code` to match together with Ctrl.
    code: Signal<String>,
    /// Input element that receives focus on a match.
    target: NodeRef<Input>,
) -> impl IntoView {
    let registration = StoredValue::new_local(None::<HotkeyHandle>);

    Effect::new(move |_| {
        let handle = HotkeyHandle::register(code.get(), target);
        if handle.is_none() {
            log::warn!("search hotkey unavailable: no window to listen on");
        }
        registration.update_value(|slot| *slot = handle);
    });

    on_cleanup(move || {
        registration.update_value(|slot| {
            slot.take();
        });
    });
}
