//! Results table and its empty-state placeholder.

use countrydex_core::config::DEFAULT_PAGE_SIZE;
use countrydex_core::country::Country;
use countrydex_core::paging;
use countrydex_core::sort::{SortOrder, sorted_by_name};
use leptos::prelude::*;

/// Message shown in place of rows while the result set is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePlaceholder {
    /// A fetch is in flight.
    Loading,
    /// A settled non-empty search produced nothing.
    NotFound,
    /// Nothing has been searched yet.
    StartSearching,
}

impl TablePlaceholder {
    /// Pick the placeholder for the current loading/search state.
    #[must_use]
    pub fn for_state(loading: bool, has_query: bool) -> Self {
        if loading {
            TablePlaceholder::Loading
        } else if has_query {
            TablePlaceholder::NotFound
        } else {
            TablePlaceholder::StartSearching
        }
    }

    /// User-facing message.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            TablePlaceholder::Loading => "Loading...",
            TablePlaceholder::NotFound => "Not found",
            TablePlaceholder::StartSearching => "Start searching",
        }
    }
}

/// Empty-state row content.
#[component]
pub fn NoContent(
    /// Whether a fetch is in flight.
    loading: Signal<bool>,
    /// The settled search value backing the result set.
    query: Signal<String>,
) -> impl IntoView {
    let message =
        move || TablePlaceholder::for_state(loading.get(), !query.get().is_empty()).message();

    view! { <div class="countrydex-no-content">{message}</div> }
}

/// Paged, sortable results table.
///
/// Shows the page slice `[offset, offset + page_size)` with 1-based row
/// numbers continuing across pages. Activating the sort button writes a
/// newly ordered sequence back to `countries` and flips `sort_order`.
#[component]
pub fn CountryTable(
    /// The full result set.
    countries: RwSignal<Vec<Country>>,
    /// Sort state of the name column.
    sort_order: RwSignal<SortOrder>,
    /// Start index of the visible page.
    offset: Signal<usize>,
    /// Rows per page.
    #[prop(default = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    /// Whether a fetch is in flight.
    loading: Signal<bool>,
    /// The settled search value backing the result set.
    query: Signal<String>,
) -> impl IntoView {
    let on_sort = move |_| {
        let next = sort_order.get().toggled();
        countries.set(sorted_by_name(&countries.get(), next));
        sort_order.set(next);
    };

    let visible_rows = move || {
        let list = countries.get();
        let start = offset.get();
        paging::page_slice(&list, start, page_size)
            .iter()
            .enumerate()
            .map(|(index, country)| (paging::row_number(start, index), country.clone()))
            .collect::<Vec<_>>()
    };

    view! {
      <div class="countrydex-table-wrap">
        <table class="countrydex-table">
          <thead>
            <tr>
              <th scope="col">"No."</th>
              <th scope="col">
                <div class="countrydex-sort-header">
                  "Country Name"
                  <button
                    type="button"
                    class="countrydex-sort-button"
                    aria-label="Sort by name"
                    on:click=on_sort
                  >
                    "⇅"
                  </button>
                </div>
              </th>
              <th scope="col">"Country Flag"</th>
            </tr>
          </thead>
          <tbody>
            <Show
              when=move || !countries.get().is_empty()
              fallback=move || {
                view! {
                  <tr>
                    <td colspan="3" class="countrydex-placeholder-cell">
                      <NoContent loading=loading query=query />
                    </td>
                  </tr>
                }
              }
            >

              <For
                each=visible_rows
                key=|(_, country)| country.name.common.clone()
                children=move |(row, country)| {
                  view! {
                    <tr>
                      <td class="countrydex-cell-number">{row}</td>
                      <td class="countrydex-cell-name">{country.name.common.clone()}</td>
                      <td class="countrydex-cell-flag">{country.flag.clone()}</td>
                    </tr>
                  }
                }
              />

            </Show>
          </tbody>
        </table>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_loading_wins() {
        assert_eq!(
            TablePlaceholder::for_state(true, true),
            TablePlaceholder::Loading
        );
        assert_eq!(
            TablePlaceholder::for_state(true, false),
            TablePlaceholder::Loading
        );
    }

    #[test]
    fn test_placeholder_not_found_needs_query() {
        assert_eq!(
            TablePlaceholder::for_state(false, true),
            TablePlaceholder::NotFound
        );
    }

    #[test]
    fn test_placeholder_start_searching_on_empty_query() {
        assert_eq!(
            TablePlaceholder::for_state(false, false),
            TablePlaceholder::StartSearching
        );
    }

    #[test]
    fn test_placeholder_messages() {
        assert_eq!(TablePlaceholder::Loading.message(), "Loading...");
        assert_eq!(TablePlaceholder::NotFound.message(), "Not found");
        assert_eq!(
            TablePlaceholder::StartSearching.message(),
            "Start searching"
        );
    }
}
