mod components;
mod geometry;
mod model;
mod state;
mod surface;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
