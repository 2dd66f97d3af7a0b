//! Configuration validation utility
//!
//! Usage: cargo run --bin validate-config lookup.toml

use std::env;
use std::process;

use lookup_config::ConfigLoader;

fn main() {
	let args: Vec<String> = env::args().collect();

	if args.len() != 2 {
		eprintln!("Usage: {} <config-file>", args[0]);
		process::exit(1);
	}

	let config_path = &args[1];

	println!("Validating configuration file: {}", config_path);

	match ConfigLoader::new().with_file(config_path).load() {
		Ok(config) => {
			println!("Configuration is valid!");
			println!("Log level: {}", config.service.log_level);
			println!("Listen address: {}:{}", config.service.host, config.service.port);
			println!("Shutdown timeout: {}ms", config.service.shutdown_timeout_ms);
			println!("Sort on load: {}", config.index.sort_on_load);
		}
		Err(e) => {
			eprintln!("Configuration validation failed:");
			eprintln!("{}", e);
			process::exit(1);
		}
	}
}
