use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::catalog::{EpisodeRecord, FilteredView};
use crate::components::context::CatalogState;
use crate::components::gen_components::{empty_message, play_icon};
use crate::components::gen_funcs::is_activation_key;

/// Which of the two mutually exclusive result displays a view gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsLayout {
    Grid,
    NoResults,
}

impl ResultsLayout {
    pub fn for_view(view: &FilteredView) -> Self {
        if view.is_empty() {
            ResultsLayout::NoResults
        } else {
            ResultsLayout::Grid
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EpisodeGridProps {
    /// Emits the catalog position of the card that was activated.
    pub on_activate: Callback<usize>,
}

#[function_component(EpisodeGrid)]
pub fn episode_grid(props: &EpisodeGridProps) -> Html {
    let (state, _dispatch) = use_store::<CatalogState>();
    let count = state.view.len();

    html! {
        <section class="episodes-section">
            <div class="results-bar">
                <span id="videoCount" class="video-count">{ count.to_string() }</span>
                <span class="video-count-label">{ if count == 1 { " episode" } else { " episodes" } }</span>
            </div>
            {
                match ResultsLayout::for_view(&state.view) {
                    ResultsLayout::NoResults => empty_message(
                        "No episodes found",
                        "Try a different search term or clear the search.",
                    ),
                    ResultsLayout::Grid => html! {
                        <div id="videoGrid" class="video-grid">
                            { for state.view.records(&state.catalog).enumerate().map(|(position, (index, episode))| html! {
                                <EpisodeCard
                                    key={index.to_string()}
                                    {index}
                                    {position}
                                    episode={episode.clone()}
                                    on_activate={props.on_activate.clone()}
                                />
                            })}
                        </div>
                    },
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct EpisodeCardProps {
    pub index: usize,
    pub position: usize,
    pub episode: EpisodeRecord,
    pub on_activate: Callback<usize>,
}

#[function_component(EpisodeCard)]
fn episode_card(props: &EpisodeCardProps) -> Html {
    let index = props.index;
    let episode = &props.episode;

    let onclick = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| on_activate.emit(index))
    };

    let onkeydown = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                on_activate.emit(index);
            }
        })
    };

    html! {
        <article
            class="video-card"
            data-index={props.position.to_string()}
            tabindex="0"
            role="button"
            aria-label={format!("Play: {}", episode.topic)}
            {onclick}
            {onkeydown}
        >
            <div class="video-thumbnail">
                <span class="date-badge">{ &episode.date }</span>
                <div class="thumbnail-placeholder">
                    { play_icon() }
                    <span class="thumbnail-text">{ "Click to play" }</span>
                </div>
            </div>
            <div class="card-content">
                <p class="card-date">{ &episode.date }</p>
                <p class="card-topic">{ &episode.topic }</p>
            </div>
        </article>
    }
}
