//! shuttle — the smallest useful controller for the liftsim engine.
//!
//! Implements the classic "bus" baseline: every cabin sweeps the building
//! bottom-to-top and back, stopping at each floor, forever.  No dispatch
//! intelligence at all — the sweep guarantees every hall call is eventually
//! served, which makes this the reference controller for smoke-testing the
//! engine and the floor every smarter algorithm must beat.
//!
//! Run with `RUST_LOG=lift_engine=debug` to watch the command stream.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use lift_engine::Engine;
use lift_sim::EventKind;
use lift_traffic::load_scenario_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_TICKS: u64 = 600;

// Two cabins, eight floors, a small mixed morning: up-peak from the lobby
// plus a couple of inter-floor and down trips.
const SCENARIO_JSON: &str = r#"{
    "building": {
        "floors": 8, "elevators": 2, "elevator_capacity": 6,
        "elevator_energy_rates": [1.0, 1.5],
        "scenario": "shuttle_demo", "duration": 600
    },
    "description": "mixed morning traffic for the bus-sweep demo",
    "traffic": [
        {"id": 0,  "origin": 0, "destination": 5, "tick": 1},
        {"id": 1,  "origin": 0, "destination": 3, "tick": 2},
        {"id": 2,  "origin": 0, "destination": 7, "tick": 4},
        {"id": 3,  "origin": 2, "destination": 6, "tick": 8},
        {"id": 4,  "origin": 6, "destination": 1, "tick": 10},
        {"id": 5,  "origin": 0, "destination": 4, "tick": 15},
        {"id": 6,  "origin": 3, "destination": 0, "tick": 21},
        {"id": 7,  "origin": 7, "destination": 2, "tick": 30},
        {"id": 8,  "origin": 1, "destination": 6, "tick": 33},
        {"id": 9,  "origin": 5, "destination": 0, "tick": 41},
        {"id": 10, "origin": 0, "destination": 6, "tick": 55},
        {"id": 11, "origin": 4, "destination": 0, "tick": 60}
    ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scenario = load_scenario_reader(Cursor::new(SCENARIO_JSON))?;
    let floors = scenario.building.floors_count as i32;
    let elevators = scenario.building.elevators_count;
    let expected = scenario.pattern.len();

    let engine = Engine::new(vec![scenario])?;
    let started = Instant::now();

    // Per-cabin sweep direction, flipped at the terminal floors.
    let mut sweep_up = vec![true; elevators];
    let mut final_tick = 0;

    for _ in 0..MAX_TICKS {
        let (tick, events) = engine.step(1)?;
        final_tick = tick.0;

        for event in &events {
            if let EventKind::Idle { elevator, floor } = event.kind {
                let cab = elevator.index();
                if floor >= floors - 1 {
                    sweep_up[cab] = false;
                } else if floor <= 0 {
                    sweep_up[cab] = true;
                }
                let next = if sweep_up[cab] { floor + 1 } else { floor - 1 };
                engine.go_to_floor(elevator, next, false)?;
            }
        }

        if engine.metrics()?.completed_passengers == expected {
            break;
        }
    }

    // ── Summary ───────────────────────────────────────────────────────────

    let metrics = engine.metrics()?;
    let state = engine.get_state()?;

    println!("shuttle demo finished in {:.2?}", started.elapsed());
    println!(
        "  {} / {} passengers delivered by tick {} ({} journal events)",
        metrics.completed_passengers,
        metrics.total_passengers,
        final_tick,
        state.events.len(),
    );
    println!(
        "  floor wait   avg {:.1} ticks, p95 {:.1} ticks",
        metrics.average_floor_wait_time, metrics.p95_floor_wait_time,
    );
    println!(
        "  door-to-door avg {:.1} ticks, p95 {:.1} ticks",
        metrics.average_arrival_wait_time, metrics.p95_arrival_wait_time,
    );
    println!("  energy consumed: {:.1}", metrics.total_energy_consumption);

    for cab in &state.elevators {
        println!(
            "  {} parked at floor {} ({} moves worth {:.1} energy)",
            cab.id,
            cab.position.current_floor,
            state
                .events
                .iter()
                .filter(|e| matches!(
                    e.kind,
                    EventKind::ElevatorMove { elevator, .. } if elevator == cab.id
                ))
                .count(),
            cab.energy_consumed,
        );
    }

    Ok(())
}
