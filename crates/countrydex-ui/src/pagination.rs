//! Pagination controls for the results table.

use countrydex_core::config::DEFAULT_PAGE_SIZE;
use countrydex_core::paging;
use leptos::prelude::*;

/// 0-based indices of the page buttons to render.
fn page_indices(total: usize, page_size: usize) -> Vec<usize> {
    (0..paging::page_count(total, page_size)).collect()
}

/// Previous/next controls plus one numbered button per page.
///
/// Page button `i` moves the offset to `i * page_size`; previous and next
/// step by one page and are disabled at the ends. The owner decides whether
/// to render the control at all (it is hidden for an empty result set).
#[component]
pub fn Pagination(
    /// Start index of the visible page; the control writes page changes here.
    offset: RwSignal<usize>,
    /// Total number of results.
    total: Signal<usize>,
    /// Rows per page.
    #[prop(default = DEFAULT_PAGE_SIZE)]
    page_size: usize,
) -> impl IntoView {
    let prev_disabled = move || !paging::has_prev(offset.get());
    let next_disabled = move || !paging::has_next(total.get(), offset.get(), page_size);

    let on_prev = move |_| offset.set(offset.get().saturating_sub(page_size));
    let on_next = move |_| {
        if paging::has_next(total.get(), offset.get(), page_size) {
            offset.set(offset.get() + page_size);
        }
    };

    view! {
      <div class="countrydex-pagination">
        <nav class="countrydex-pagination-nav" aria-label="Pagination">
          <button
            type="button"
            class="countrydex-page-step"
            disabled=prev_disabled
            on:click=on_prev
          >
            <span aria-hidden="true">"«"</span>
            <span class="countrydex-sr-only">"Previous"</span>
          </button>

          <For
            each=move || page_indices(total.get(), page_size)
            key=|index| *index
            children=move |index| {
              let is_current =
                Memo::new(move |_| paging::current_page(offset.get(), page_size) == index);

              view! {
                <button
                  type="button"
                  class="countrydex-page-number"
                  class:active=is_current
                  aria-current=move || { if is_current.get() { Some("page") } else { None } }
                  on:click=move |_| offset.set(paging::page_start(index, page_size))
                >
                  {index + 1}
                </button>
              }
            }
          />

          <button
            type="button"
            class="countrydex-page-step"
            disabled=next_disabled
            on:click=on_next
          >
            <span class="countrydex-sr-only">"Next"</span>
            <span aria-hidden="true">"»"</span>
          </button>
        </nav>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_indices_counts_pages() {
        assert_eq!(page_indices(25, 10), vec![0, 1, 2]);
        assert_eq!(page_indices(10, 10), vec![0]);
        assert_eq!(page_indices(1, 10), vec![0]);
    }

    #[test]
    fn test_page_indices_empty_result_set() {
        assert!(page_indices(0, 10).is_empty());
    }
}
