use std::env;
use std::fs;
use std::path::Path;

/// Keys read by `src/config.rs` through `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "VIACEP_BASE_URL",
    "ENABLE_LOGGING",
    "POLL_INTERVAL_MS",
    "MOBILE_BREAKPOINT_PX",
    "NOTIFICATION_TIMEOUT_MS",
    "DEFAULT_MAP_ZOOM",
    "MAP_TILE_URL",
];

/// `KEY=value` with optional quotes. Blank lines and `#` comments yield None.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=GreenTech: no .env, built-in defaults apply (see .env.example)");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=GreenTech: could not read .env: {}", e);
            return;
        }
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=GreenTech: ignoring unknown .env key {}", key);
            continue;
        }
        // a variable set in the build environment wins over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
