// Custom Mods
mod components;

#[cfg(test)]
mod tests;

use components::home::Home;
use components::logging;

// Yew Imports
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <YewduxRoot>
            <Home />
        </YewduxRoot>
    }
}

fn main() {
    logging::init();
    yew::Renderer::<Main>::new().render();
}
