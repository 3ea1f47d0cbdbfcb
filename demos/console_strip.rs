//! Runs the full strip lifecycle against a console-backed strip.
//!
//! Shows red, switches to a fade, then stops from a timer thread the way a
//! SIGINT handler would, and resets the strip on shutdown.
//!
//! ```text
//! RUST_LOG=info cargo run --example console_strip -- 3
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rgb_strip::{Color, LedStrip, RED, Renderer, StdDelay, StopSignal, StripAction, StripConfig};

/// Maximum strip length this demo renders
const MAX_LEDS: usize = 64;

/// Strip that prints every frame as packed hex colors
struct ConsoleStrip;

impl LedStrip for ConsoleStrip {
    type Error = core::convert::Infallible;

    fn render(&mut self, frame: &[Color]) -> Result<(), Self::Error> {
        let line: Vec<String> = frame.iter().map(Color::to_string).collect();
        println!("{}", line.join(" "));
        Ok(())
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        println!("(strip off)");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seconds: u64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(2);

    let config = StripConfig::builder().led_count(8).frame_delay_ms(250).build()?;
    let mut renderer = Renderer::<_, _, MAX_LEDS>::new(ConsoleStrip, StdDelay, config)?;

    renderer.handle_action(StripAction::SetColor(RED))?;
    renderer.handle_action(StripAction::Fade(Color::from_rgb(120, 0, 40)))?;

    let stop = Arc::new(StopSignal::new());
    let timer = {
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(seconds));
            stop.stop();
        })
    };

    let frames = renderer.run(&stop)?;
    log::info!("rendered {} frames", frames);

    renderer.shutdown()?;
    timer.join().ok();
    Ok(())
}
