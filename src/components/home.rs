use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlMediaElement, KeyboardEvent};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::audio::PlayerModal;
use crate::components::config::{MODAL_OPEN_BODY_CLASS, PAGE_TAGLINE, PAGE_TITLE};
use crate::components::context::CatalogState;
use crate::components::episode_grid::EpisodeGrid;
use crate::components::gen_funcs::{is_dismiss_key, set_body_class};
use crate::components::search::SearchBar;

#[function_component(Home)]
pub fn home() -> Html {
    let (state, dispatch) = use_store::<CatalogState>();
    let media_ref = use_node_ref();
    let is_open = state.modal.is_open();

    {
        let total = state.catalog.len();
        use_effect_with((), move |_| {
            log::info!("{} ready with {} episodes", PAGE_TITLE, total);
            || ()
        });
    }

    let on_activate = {
        let dispatch = dispatch.clone();
        let media_ref = media_ref.clone();
        Callback::from(move |index: usize| {
            let Some(media) = media_ref.cast::<HtmlMediaElement>() else {
                log::warn!("Playback element is not mounted");
                return;
            };
            dispatch.reduce_mut(move |state| {
                state.open_episode(index, &media);
            });
        })
    };

    let on_dismiss = {
        let dispatch = dispatch.clone();
        let media_ref = media_ref.clone();
        Callback::from(move |_: ()| {
            let Some(media) = media_ref.cast::<HtmlMediaElement>() else {
                return;
            };
            dispatch.reduce_mut(move |state| {
                state.close_modal(&media);
            });
        })
    };

    // Escape closes the player, and the page underneath stays put while it is showing.
    {
        let on_dismiss = on_dismiss.clone();
        use_effect_with(is_open, move |is_open| {
            set_body_class(MODAL_OPEN_BODY_CLASS, *is_open);

            let listener = if *is_open {
                window().and_then(|w| w.document()).map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if is_dismiss_key(&event.key()) {
                            on_dismiss.emit(());
                        }
                    })
                })
            } else {
                None
            };

            move || drop(listener)
        });
    }

    html! {
        <>
            <header class="site-header">
                <div class="header-content">
                    <h1 class="site-title">{ PAGE_TITLE }</h1>
                    <p class="site-tagline">{ PAGE_TAGLINE }</p>
                </div>
                <SearchBar />
            </header>
            <main class="main-content">
                <EpisodeGrid {on_activate} />
            </main>
            <PlayerModal {media_ref} {on_dismiss} />
        </>
    }
}
