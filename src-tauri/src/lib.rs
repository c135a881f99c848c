mod api;
mod app;
mod overlay;
mod system;
mod utils;

pub fn run() {
    app::run();
}
