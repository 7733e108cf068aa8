#[cfg(target_arch = "wasm32")]
fn main() {
    launch_globe::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("launch-globe runs in the browser: build it with `trunk serve`");
}
