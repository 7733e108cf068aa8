use std::env;
use std::fs;
use std::path::Path;

/// Keys read with `option_env!` in src/config.rs
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "MAPBOX_ACCESS_TOKEN",
    "LAUNCHES_URL",
    "GLOBE_STYLE_URL",
    "GLOBE_CENTER_LAT",
    "GLOBE_CENTER_LNG",
    "GLOBE_INITIAL_ZOOM",
    "GLOBE_INITIAL_PITCH",
    "GLOBE_SECONDS_PER_REVOLUTION",
];

fn main() {
    // Load .env (KEY=VALUE per line) into the compile-time environment
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // the real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env and set MAPBOX_ACCESS_TOKEN.");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
