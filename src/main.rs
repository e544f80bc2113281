//! Terminal demo driving the slider engine without the 3-D scene.
//!
//! Each typed character is treated as one discrete key press, exactly as
//! the windowed front end would deliver it.

use std::io::{self, BufRead, Write};

use beacon::{AppConfig, BeaconApp, KeyCode};

fn main() {
    let config = AppConfig::default();
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();

    println!("beacon - RGB/HSV slider engine demo");
    println!("Keys: 1/2 red, 3/4 green, 5/6 blue, f/g hue, h/j saturation, k/l value");
    println!("Type keys and press enter; 'q' quits.");
    println!();

    let mut app = BeaconApp::new(&config);
    print_state(&app);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        // EOF ends the session like 'q'
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        for c in line.trim().chars() {
            if c.eq_ignore_ascii_case(&'q') {
                return;
            }
            if let Some(key) = KeyCode::from_char(c) {
                app.on_key_press(key);
            }
        }
        print_state(&app);
    }
}

fn print_state(app: &BeaconApp) {
    let manager = app.manager();
    let rgb = manager.rgb();
    let hsv = manager.hsv();
    let color = manager.lighthouse_color();
    println!(
        "RGB ({}, {}, {})  HSV ({}, {}%, {}%)  lighthouse ({:.2}, {:.2}, {:.2})",
        rgb.red, rgb.green, rgb.blue, hsv.hue, hsv.saturation, hsv.value, color.r, color.g, color.b
    );
}
