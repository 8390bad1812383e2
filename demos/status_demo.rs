// SPDX-License-Identifier: MPL-2.0

//! Scripted status-announcement demo.
//!
//! Walks the three preset device variants through their typical
//! lifecycles and prints every announcement to the console:
//!
//! 1. **EchoSub**: audio-only speaker, power cycled on and off
//! 2. **FireTV**: audio+video box, power cycled on and off
//! 3. **Kindle**: battery reader, plugged, unplugged, drained, powered on
//!
//! # Usage
//!
//! ```bash
//! cargo run --example status_demo
//!
//! # With debug logging of state mutations
//! RUST_LOG=powercast=debug cargo run --example status_demo
//! ```

use powercast::{Announce, ConsoleSink, Device, Result};
use tracing_subscriber::EnvFilter;

fn demo_speaker(sink: &mut ConsoleSink) {
    println!("--- Echo Sub ---");

    let mut speaker = Device::audio_only("EchoSub");
    println!("Echo Sub instantiated");
    speaker.announce(sink);

    speaker.power_on();
    println!("Echo Sub turned on");
    speaker.announce(sink);

    speaker.power_off();
    println!("Echo Sub turned off");
    speaker.announce(sink);
}

fn demo_tv(sink: &mut ConsoleSink) {
    println!("--- Fire TV ---");

    let mut tv = Device::audio_video("FireTV");
    println!("Fire TV instantiated");
    tv.announce(sink);

    tv.power_on();
    println!("Fire TV turned on");
    tv.announce(sink);

    tv.power_off();
    println!("Fire TV turned off");
    tv.announce(sink);
}

fn demo_reader(sink: &mut ConsoleSink) -> Result<()> {
    println!("--- Kindle ---");

    let mut reader = Device::battery_audio_video("Kindle");
    println!("Kindle instantiated");
    reader.announce(sink);

    reader.plug()?;
    println!("Kindle plugged in");
    reader.announce(sink);

    reader.unplug()?;
    println!("Kindle unplugged");
    reader.announce(sink);

    reader.update_charge(-0.01)?;
    println!("Kindle lost some charge");
    reader.announce(sink);

    reader.power_on();
    println!("Kindle turned on");
    reader.announce(sink);

    reader.plug()?;
    println!("Kindle plugged in");
    reader.announce(sink);

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sink = ConsoleSink::new();

    println!("DEMOS");
    println!();
    demo_speaker(&mut sink);
    demo_tv(&mut sink);
    demo_reader(&mut sink)?;

    Ok(())
}
