//! Countrydex UI Components
//!
//! Leptos components and signal utilities for the country lookup frontend.
//!
//! # Components
//!
//! ## Search
//! - [`SearchBox`] - Text input with loading spinner
//! - [`SearchHotkey`] - Global Ctrl+key shortcut that focuses the search box
//!
//! ## Table
//! - [`CountryTable`] - Paged, sortable results table
//! - [`NoContent`] - Placeholder for the empty result set
//! - [`Pagination`] - Prev/next controls and numbered page buttons
//!
//! # Utilities
//! - [`use_debounced`] - Signal that settles after an input stops changing
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use countrydex_ui::{SearchBox, use_debounced};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let query = RwSignal::new(String::new());
//!     let settled = use_debounced(query.into(), 500);
//!
//!     view! {
//!         <SearchBox query=query loading=false.into() />
//!         <p>{move || settled.get()}</p>
//!     }
//! }
//! ```

pub mod debounce;
pub mod hotkey;
pub mod pagination;
pub mod search;
pub mod table;

pub use debounce::use_debounced;
pub use hotkey::{HotkeyHandle, SearchHotkey};
pub use pagination::Pagination;
pub use search::SearchBox;
pub use table::{CountryTable, NoContent, TablePlaceholder};
