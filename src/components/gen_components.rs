use yew::prelude::*;

pub fn empty_message(header: &str, paragraph: &str) -> Html {
    html! {
        <div id="noResults" class="no-results">
            <svg class="no-results-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="11" cy="11" r="8"></circle>
                <path d="m21 21-4.35-4.35"></path>
            </svg>
            <h3>{ header }</h3>
            <p>{ paragraph }</p>
        </div>
    }
}

pub fn play_icon() -> Html {
    html! {
        <div class="play-icon">
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
                <path d="M8 5v14l11-7z"></path>
            </svg>
        </div>
    }
}
