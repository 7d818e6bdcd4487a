//! Diet Analyzer Frontend Entry Point

fn main() {
    console_error_panic_hook::set_once();
    diet_analyzer_ui::web::start();
}
