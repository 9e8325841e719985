//! Lift Cycle
//!
//! This example runs one full cycle of the lift prop against the simulated rig.
//!
//! Key concepts:
//! - Loading a config from JSON and validating it at build time
//! - Driving the sequencer with a single frame clock via `advance`
//! - Reading back the transition log and the status line
//!
//! Run with: cargo run --example lift_cycle

use bikelift::config::LiftConfig;
use bikelift::core::LiftState;
use bikelift::host::SimulatedRig;
use bikelift::sequencer::SequencerBuilder;

const CONFIG: &str = r#"{
    "top_position": 3.1,
    "speed": 2.5,
    "state_duration": 1.5,
    "on_camera_position": [0.0, 0.0, 0.0],
    "off_camera_position": [0.0, 0.0, -4.0]
}"#;

fn main() {
    let config = match LiftConfig::from_json(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bad config: {e}");
            return;
        }
    };

    let mut sequencer = match SequencerBuilder::new()
        .config(config)
        .host(SimulatedRig::new())
        .build()
    {
        Ok(sequencer) => sequencer,
        Err(e) => {
            eprintln!("cannot start: {e}");
            return;
        }
    };

    println!("=== Lift Cycle ===");
    println!("{}", sequencer.status_line());

    let frame = 1.0 / 60.0;
    let mut last = sequencer.state();
    let mut left_available = false;

    while !(left_available && sequencer.state() == LiftState::Available) {
        sequencer.advance(frame);

        let state = sequencer.state();
        if state != last {
            println!(
                "[{:6.2}s] {} | indicator {} | slider {:.2} | attached {}",
                sequencer.sim_time(),
                sequencer.status_line(),
                sequencer.indicator_color(),
                sequencer.slider_height(),
                sequencer.is_attached(),
            );
            left_available = true;
            last = state;
        }
    }

    println!("\nTransition log:");
    for transition in sequencer.history().transitions() {
        println!(
            "  {:6.2}s  {} -> {}  ({:?})",
            transition.sim_time, transition.from, transition.to, transition.cause
        );
    }

    let rig = sequencer.host();
    println!("\nIndicator changes: {}", rig.color_log().len());
    println!("Wheel resets: {}", rig.wheel_resets());
    println!("Open links: {}", rig.link_count());
}
