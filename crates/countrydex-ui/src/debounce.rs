//! Debounced signal utility.
//!
//! Mirrors the search box's quiescence behavior: dependent work only runs
//! once the input has stopped changing for the configured interval.

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;

/// Derive a signal that follows `source` after `delay_ms` of quiescence.
///
/// Every change of `source` schedules a timer and cancels the previously
/// pending one, so at most one timer is pending per call site. The pending
/// timer is released when the owning scope is torn down.
pub fn use_debounced(source: Signal<String>, delay_ms: u64) -> Signal<String> {
    let (debounced, set_debounced) = signal(source.get_untracked());
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    // Identical writes to the source do not count as changes.
    let changes = Memo::new(move |_| source.get());

    Effect::new(move |prev: Option<String>| {
        let value = changes.get();

        // First run seeds the initial value; nothing is pending yet.
        if prev.is_none() {
            return value;
        }

        pending.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });

        let settled = value.clone();
        match set_timeout_with_handle(
            move || set_debounced.set(settled),
            Duration::from_millis(delay_ms),
        ) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => log::error!("failed to schedule debounce timer: {err:?}"),
        }

        value
    });

    on_cleanup(move || {
        pending.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    });

    debounced.into()
}
