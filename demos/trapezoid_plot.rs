use std::error::Error;

use gnuplot::*;
use trapezoid_motion::{MotionConstraints, MotionState, ProfileConfig};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // -----------------------
    // 1. Set up parameters
    // -----------------------
    // Pass a TOML file to override the built-in move.
    let config = match std::env::args().nth(1) {
        Some(path) => ProfileConfig::from_file(path)?,
        None => ProfileConfig {
            constraints: MotionConstraints::new(40.0, 16.0, 16.0),
            start: MotionState::new(0.0, 0.0, 0.0),
            end: MotionState::new(80.0, 0.0, 0.0),
        },
    };

    // ---------------------
    // 2. Build the profile
    // ---------------------
    let profile = config.build()?;

    println!("dt1: {}", profile.accel_duration());
    println!("dt2: {}", profile.cruise_duration());
    println!("dt3: {}", profile.decel_duration());
    println!("profile duration: {}", profile.duration());
    println!("integral: {}", profile.total_integral());

    // -------------------------
    // 3. Sample the profile
    // -------------------------
    let step = 0.01;
    let mut time_axis = Vec::new();
    let mut positions = Vec::new();
    let mut velocities = Vec::new();
    let mut accelerations = Vec::new();

    for (t, state) in profile.samples(step) {
        time_axis.push(t);
        positions.push(state.x);
        velocities.push(state.v);
        accelerations.push(state.a);
    }

    let final_position = profile.end_state().x;
    if (final_position - config.end.x).abs() > 0.01 {
        eprintln!(
            "Warning: profile ends at {final_position:.3}, target was {:.3}.",
            config.end.x
        );
    }

    // --------------
    // 4. Plot data
    // --------------
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Position, Velocity, Acceleration vs. Time", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.lines(&time_axis, &positions, &[Color("blue"), Caption("Position")]);
        axes.lines(&time_axis, &velocities, &[Color("red"), Caption("Velocity")]);
        axes.lines(&time_axis, &accelerations, &[Color("green"), Caption("Acceleration")]);
    }

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!("Plot generated. Total motion time: {:.3} seconds.", profile.duration());
    Ok(())
}
