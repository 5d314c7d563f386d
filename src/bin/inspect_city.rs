use std::io;

use anyhow::{Context, Result};

use bikeshare_explorer::console::write_report;
use bikeshare_explorer::data::load_data;
use bikeshare_explorer::models::FilterSelection;
use bikeshare_explorer::stats::all_reports;
use bikeshare_explorer::Config;

fn main() -> Result<()> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "Chicago".to_string());
    let config = Config::discover()?;

    let city = config
        .city(&name)
        .with_context(|| format!("Unknown city '{}'", name))?
        .clone();
    println!("Inspecting {} in {:?}\n", city.name, config.city_path(&city));

    let selection = FilterSelection::new(city, None, None);
    let data = load_data(&config, &selection)?;
    println!("Loaded {} trips (demographics: {})", data.len(), data.has_demographics);

    let mut out = io::stdout().lock();
    for report in all_reports(&data, &selection) {
        write_report(&mut out, &report)?;
    }
    Ok(())
}
