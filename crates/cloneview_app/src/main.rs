//! Cloneview app shell: terminal front end for the clone preview client.
mod app;
mod effects;
mod logging;
mod render;

fn main() -> anyhow::Result<()> {
    app::run()
}
