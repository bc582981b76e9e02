//! Root application component for the country lookup page.
//!
//! [`CountryLookup`] owns all UI state: the raw and settled search values,
//! the fetched result set, the loading flag, the pagination offset, and the
//! sort order. Fetches are keyed by a request generation so a slow reply can
//! never overwrite the result of a later search.

use countrydex_api::CountriesClient;
use countrydex_core::{AppConfig, Country, SortOrder};
use countrydex_ui::{CountryTable, Pagination, SearchBox, SearchHotkey, use_debounced};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Title text="Country Lookup" />

      <Router>
        <main class="countrydex-main">
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=CountryLookup />
          </Routes>
        </main>
      </Router>
    }
}

/// Decision taken for a settled search value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchAction {
    /// Empty search: clear the result set without touching the network.
    Clear,
    /// Non-empty search: issue one fetch.
    Fetch,
}

fn action_for(query: &str) -> SearchAction {
    if query.is_empty() {
        SearchAction::Clear
    } else {
        SearchAction::Fetch
    }
}

/// The single page of the app: search box, results table, pagination.
#[component]
fn CountryLookup() -> impl IntoView {
    let config = AppConfig::from_build_env();
    if let Err(err) = config.validate() {
        log::error!("invalid configuration: {err}");
    }
    let page_size = config.page_size;

    let countries = RwSignal::new(Vec::<Country>::new());
    let search_key = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let offset = RwSignal::new(0usize);
    let sort_order = RwSignal::new(SortOrder::Unset);

    let search_ref = NodeRef::<leptos::html::Input>::new();
    let settled = use_debounced(search_key.into(), config.search_delay_ms);

    let client = StoredValue::new(CountriesClient::new(&config.api_base_url));
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let query = settled.get();

        // Any newer run invalidates whatever is still in flight.
        let request = generation.get_value() + 1;
        generation.set_value(request);

        match action_for(&query) {
            SearchAction::Clear => {
                countries.set(Vec::new());
                offset.set(0);
                is_loading.set(false);
            }
            SearchAction::Fetch => {
                is_loading.set(true);
                let client = client.get_value();
                spawn_local(async move {
                    let result = client.search_name(&query).await;

                    if generation.try_get_value() != Some(request) {
                        log::debug!("dropping stale reply for {query:?}");
                        return;
                    }

                    match result {
                        Ok(list) => {
                            log::debug!("search {query:?} matched {} countries", list.len());
                            countries.set(list);
                            offset.set(0);
                        }
                        Err(err) => log::error!("country search failed: {err}"),
                    }
                    is_loading.set(false);
                });
            }
        }
    });

    let hotkey_code = config.hotkey_code.clone();

    view! {
      <div class="countrydex-panel">
        <SearchHotkey code=Signal::from(hotkey_code) target=search_ref />

        <div class="countrydex-toolbar">
          <SearchBox query=search_key loading=is_loading.into() node_ref=search_ref />
        </div>

        <CountryTable
          countries=countries
          sort_order=sort_order
          offset=offset.into()
          page_size=page_size
          loading=is_loading.into()
          query=settled
        />

        <Show when=move || !countries.get().is_empty()>
          <Pagination
            offset=offset
            total=Signal::derive(move || countries.get().len())
            page_size=page_size
          />
        </Show>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_clears_without_fetching() {
        assert_eq!(action_for(""), SearchAction::Clear);
    }

    #[test]
    fn test_non_empty_search_fetches() {
        assert_eq!(action_for("fra"), SearchAction::Fetch);
        assert_eq!(action_for(" "), SearchAction::Fetch);
    }
}
