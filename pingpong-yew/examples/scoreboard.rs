use pingpong_yew::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Ping-Pong Scoreboard");

    yew::Renderer::<App>::new().render();
}
