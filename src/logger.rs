use std::io::Write;

use chrono::Local;
use env_logger::Env;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Log to stderr as `[timestamp] LEVEL message`; stdout is left for the
/// confirmation lines. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", timestamp(), record.level(), record.args()))
        .try_init();
}
