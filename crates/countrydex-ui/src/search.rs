//! Search box component.

use leptos::html;
use leptos::prelude::*;

/// Search input with a loading spinner.
///
/// The raw query updates on every keystroke; debouncing is the caller's
/// concern so the input itself stays responsive.
#[component]
pub fn SearchBox(
    /// Placeholder text for the input.
    #[prop(default = "Search for countries".to_string())]
    placeholder: String,
    /// Signal holding the raw query.
    query: RwSignal<String>,
    /// Whether a fetch is in flight.
    #[prop(default = false.into())]
    loading: Signal<bool>,
    /// Node reference exposed so the hotkey can focus the input.
    #[prop(optional)]
    node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    view! {
      <div class="countrydex-search-box">
        <input
          node_ref=node_ref
          type="text"
          class="countrydex-search-input"
          placeholder=placeholder
          aria-label="Search"
          prop:value=move || query.get()
          on:input=move |ev| {
            let value = event_target_value(&ev);
            query.set(value);
          }
        />
        <Show when=move || loading.get()>
          <span class="countrydex-search-spinner" role="status" aria-label="Loading"></span>
        </Show>
      </div>
    }
}
