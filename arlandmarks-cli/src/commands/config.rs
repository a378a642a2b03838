//! `config` command: print the resolved configuration.

use std::error::Error;

use arlandmarks::config::AppConfig;

pub fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let path = AppConfig::default_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<no user config directory>".to_string());

    println!("Config file:          {}", path);
    println!();
    println!("[datasource]");
    println!("url                 = {}", display_or(&config.datasource.url, "<not set>"));
    println!("api_key             = {}", masked(&config.datasource.api_key));
    println!();
    println!("[weather]");
    println!("api_key             = {}", masked(&config.weather.api_key));
    println!();
    println!("[session]");
    println!("radius_meters       = {}", config.session.radius_meters);
    println!("min_movement_meters = {}", config.session.min_movement_meters);

    Ok(())
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn masked(key: &str) -> &'static str {
    if key.is_empty() {
        "<not set>"
    } else {
        "<set>"
    }
}
