//! A POSIX-compatible `grep` with a parallel, worker-pool search engine.

fn main() {
    env_logger::init();
    std::process::exit(grepr::app::Application::run());
}
