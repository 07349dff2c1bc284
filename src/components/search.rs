use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::config::SEARCH_DEBOUNCE_MS;
use crate::components::context::{CatalogMsg, CatalogState};
use crate::components::debounce::{BrowserTimer, Debouncer};
use crate::components::gen_funcs::is_dismiss_key;

#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let (_state, dispatch) = use_store::<CatalogState>();
    let input_ref = use_node_ref();
    // What is in the box right now; the store only sees it once typing pauses.
    let raw_query = use_state(String::new);
    let debouncer = use_mut_ref(|| Debouncer::new(BrowserTimer, SEARCH_DEBOUNCE_MS));

    let clear_search = {
        let raw_query = raw_query.clone();
        let debouncer = debouncer.clone();
        let dispatch = dispatch.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_: ()| {
            debouncer.borrow_mut().cancel();
            raw_query.set(String::new());
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
                if let Err(e) = input.focus() {
                    log::debug!("Could not focus search input: {:?}", e);
                }
            }
            dispatch.apply(CatalogMsg::ClearQuery);
        })
    };

    let on_input = {
        let raw_query = raw_query.clone();
        let debouncer = debouncer.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let query = input.value();
            raw_query.set(query.clone());

            let dispatch = dispatch.clone();
            debouncer
                .borrow_mut()
                .schedule(move || dispatch.apply(CatalogMsg::ApplyQuery(query)));
        })
    };

    let on_keydown = {
        let clear_search = clear_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_dismiss_key(&e.key()) {
                clear_search.emit(());
            }
        })
    };

    let on_clear_click = {
        let clear_search = clear_search.clone();
        Callback::from(move |_: MouseEvent| clear_search.emit(()))
    };

    html! {
        <div class="search-container">
            <svg class="search-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="11" cy="11" r="8"></circle>
                <path d="m21 21-4.35-4.35"></path>
            </svg>
            <input
                ref={input_ref}
                type="text"
                id="searchInput"
                class="search-input"
                placeholder="Search by topic or date..."
                autocomplete="off"
                aria-label="Search episodes"
                value={(*raw_query).clone()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            if !raw_query.is_empty() {
                <button
                    id="clearSearch"
                    class="clear-search"
                    type="button"
                    aria-label="Clear search"
                    onclick={on_clear_click}
                >
                    { "\u{00d7}" }
                </button>
            }
        </div>
    }
}
