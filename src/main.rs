/// Headless huepick demo entry point.
///
/// Usage: `huepick-demo [config.json]`
fn main() {
    use huepick::DemoConfig;

    let config = match std::env::args_os().nth(1) {
        Some(path) => match DemoConfig::load(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    match huepick::run(&config) {
        Ok(report) => {
            println!("{}", huepick_ui::format_color(report.final_color));
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}
