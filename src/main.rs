use ferrofetch::{collect_all, config, display};

fn main() {
    let config = config::load_config();
    let info = collect_all();
    display::render(&config, &info);
}
