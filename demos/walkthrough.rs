// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walkthrough of the home model, printing the home after every step.
//!
//! Run with `cargo run --example walkthrough`. Library logs are printed at
//! debug level.

use hearth_lib::config::HomeConfig;
use hearth_lib::{DeviceType, Home, Setting};

fn render(home: &Home) {
    for (label, device) in home.labels().iter().zip(home) {
        println!("  {label:<26} {device}");
    }
    println!("  {}", home.total_activated_label());
    println!();
}

fn main() -> hearth_lib::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut home = Home::from_config(&HomeConfig::demo())?;
    println!("Initial home:");
    render(&home);

    home.toggle_at(0)?;
    println!("Toggled device 1:");
    render(&home);

    if let Err(e) = home.configure_at(0, Setting::ConsumptionRate(200)) {
        println!("Consumption rate rejected: {e}");
    }
    home.configure_at(1, Setting::ConsumptionRate(95))?;
    home.configure_at(3, Setting::wash_mode("Eco"))?;
    println!("Configured devices 2 and 4:");
    render(&home);

    let washer = home.device_at(4)?.id();
    home.delete_at(2)?;
    let position = home.index_of(washer)? + 1;
    println!("Deleted device 3, the last washer is now device {position}:");
    render(&home);

    let device_type: DeviceType = "Smart Plug".parse()?;
    home.add(device_type.create());
    home.turn_on_all();
    println!("Added a plug and turned everything on:");
    render(&home);

    home.turn_off_all();
    println!("Turned everything off:");
    render(&home);

    Ok(())
}
