// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
       _        _       _                _ _   _
  ___ | | _____| |_ ___| |__   ___ _ __(_) |_(_) ___
 / __|| |/ / _ \ __/ __| '_ \ / __| '__| | __| |/ __|
 \__ \|   <  __/ || (__| | | | (__| |  | | |_| | (__
 |___/|_|\_\___|\__\___|_| |_|\___|_|  |_|\__|_|\___|

    AI Art Feedback Relay
"#;
    println!("{}", banner);
}
