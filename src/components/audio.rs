use web_sys::HtmlMediaElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::context::{CatalogMsg, CatalogState};
use crate::components::gen_funcs::{format_time, media_kind};

#[derive(Properties, PartialEq, Debug, Clone)]
pub struct PlayerModalProps {
    /// The one playback element every episode is loaded into.
    pub media_ref: NodeRef,
    pub on_dismiss: Callback<()>,
}

#[function_component(PlayerModal)]
pub fn player_modal(props: &PlayerModalProps) -> Html {
    let (state, dispatch) = use_store::<CatalogState>();
    let is_open = state.modal.is_open();

    let on_close_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    // The overlay sits behind the content box, so any click that reaches it is outside the dialog.
    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let on_time_update = {
        let media_ref = props.media_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(media) = media_ref.cast::<HtmlMediaElement>() {
                dispatch.apply(CatalogMsg::RecordPosition(media.current_time()));
            }
        })
    };

    let (title, date, kind) = match state.modal.episode() {
        Some(episode) => (
            episode.topic.clone(),
            episode.date.clone(),
            media_kind(&episode.media_path).label(),
        ),
        None => (String::new(), String::new(), ""),
    };

    html! {
        <div
            id="videoModal"
            class={classes!("video-modal", is_open.then_some("active"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!is_open).to_string()}
            aria-labelledby="modalTitle"
        >
            <div id="modalOverlay" class="modal-overlay" onclick={on_backdrop_click}></div>
            <div class="modal-content">
                <button
                    id="modalClose"
                    class="modal-close"
                    type="button"
                    aria-label="Close player"
                    onclick={on_close_click}
                >
                    { "\u{00d7}" }
                </button>
                <div class="modal-video-container">
                    <video
                        ref={props.media_ref.clone()}
                        id="modalVideo"
                        controls=true
                        preload="metadata"
                        ontimeupdate={on_time_update}
                    ></video>
                </div>
                <div class="modal-info">
                    <h2 id="modalTitle" class="modal-title">{ title }</h2>
                    <p class="modal-meta">
                        <span id="modalDate">{ date }</span>
                        if is_open {
                            <>
                                <span class="modal-kind">{ kind }</span>
                                <span class="modal-position">{ format_time(state.modal.position()) }</span>
                            </>
                        }
                    </p>
                </div>
            </div>
        </div>
    }
}
