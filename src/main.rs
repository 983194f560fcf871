use sliding_puzzle::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
