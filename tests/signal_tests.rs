//! Signal timing validation tests

use intersection_sim::simulation::{
    CrossingLight, Direction, Phase, Signal, SignalController, SignalState, SimConfig,
};

fn run(controller: &mut SignalController, ticks: u32) {
    for _ in 0..ticks {
        controller.tick();
    }
}

#[test]
fn test_green_turns_yellow_then_next_green() {
    let config = SimConfig::default();
    let mut controller = SignalController::new(&config);
    let green_ticks = config.green_secs * config.tick_rate;
    let yellow_ticks = config.yellow_secs * config.tick_rate;

    run(&mut controller, green_ticks - 1);
    assert_eq!(controller.phase(), Phase::Green);
    assert_eq!(controller.active_direction(), Direction::North);

    assert!(controller.tick());
    assert_eq!(controller.phase(), Phase::Yellow);
    assert_eq!(controller.active_direction(), Direction::North);

    run(&mut controller, yellow_ticks - 1);
    assert_eq!(controller.phase(), Phase::Yellow);

    assert!(controller.tick());
    assert_eq!(controller.phase(), Phase::Green);
    assert_eq!(controller.active_direction(), Direction::East);
}

#[test]
fn test_full_cycle_order() {
    let config = SimConfig::default();
    let mut controller = SignalController::new(&config);
    let phase_ticks = (config.green_secs + config.yellow_secs) * config.tick_rate;

    let mut seen = vec![controller.active_direction()];
    for _ in 0..4 {
        run(&mut controller, phase_ticks);
        seen.push(controller.active_direction());
    }
    assert_eq!(
        seen,
        vec![
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North,
        ]
    );
}

#[test]
fn test_timing_follows_tick_rate() {
    let config = SimConfig {
        tick_rate: 30,
        ..SimConfig::default()
    };
    let mut controller = SignalController::new(&config);
    run(&mut controller, config.green_secs * 30);
    assert_eq!(controller.phase(), Phase::Yellow);
}

#[test]
fn test_remaining_seconds_count_down() {
    let config = SimConfig::default();
    let mut controller = SignalController::new(&config);
    assert_eq!(controller.remaining_secs(), config.green_secs);

    run(&mut controller, config.tick_rate * 4);
    assert_eq!(controller.elapsed_secs(), 4);
    assert_eq!(controller.remaining_secs(), config.green_secs - 4);

    // A partial second does not count
    run(&mut controller, config.tick_rate - 1);
    assert_eq!(controller.elapsed_secs(), 4);
}

#[test]
fn test_exactly_one_arm_not_red() {
    let config = SimConfig::default();
    let mut controller = SignalController::new(&config);
    let mut signals: Vec<Signal> = Direction::ALL
        .iter()
        .map(|&direction| Signal::new(direction, &config))
        .collect();
    controller.apply(&mut signals);

    let mut previous = (controller.active_direction(), controller.phase());
    for _ in 0..(config.tick_rate * 200) {
        if controller.tick() {
            controller.apply(&mut signals);
            let current = (controller.active_direction(), controller.phase());
            match previous.1 {
                // Green always hands over to yellow on the same arm
                Phase::Green => assert_eq!(current, (previous.0, Phase::Yellow)),
                Phase::Yellow => {
                    assert_eq!(current, (previous.0.next_in_cycle(), Phase::Green))
                }
            }
            previous = current;
        }

        let lit: Vec<&Signal> = signals
            .iter()
            .filter(|s| s.state != SignalState::Red)
            .collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].direction, controller.active_direction());
    }
}

#[test]
fn test_crossing_light_cycle() {
    let mut light = CrossingLight::new(60);
    assert_eq!(light.colour(), SignalState::Red);
    assert!(light.pedestrians_may_cross());
    assert_eq!(light.remaining_secs(), 6);

    let expected = [
        (360, SignalState::Yellow),
        (180, SignalState::Green),
        (360, SignalState::Yellow),
        (180, SignalState::Red),
    ];
    for (ticks, colour) in expected {
        for _ in 0..ticks - 1 {
            assert!(!light.tick());
        }
        assert!(light.tick());
        assert_eq!(light.colour(), colour);
    }
    assert!(light.pedestrians_may_cross());
}

#[test]
fn test_crossing_remaining_seconds_floor() {
    let mut light = CrossingLight::new(60);
    for _ in 0..30 {
        light.tick();
    }
    assert_eq!(light.remaining_secs(), 5);
}

#[test]
fn test_crossing_emergency_hold() {
    let mut light = CrossingLight::new(60);
    for _ in 0..(360 + 180) {
        light.tick();
    }
    assert_eq!(light.colour(), SignalState::Green);
    assert!(!light.pedestrians_may_cross());

    assert!(light.toggle_emergency());
    assert!(light.emergency_engaged());
    assert_eq!(light.colour(), SignalState::Red);

    for _ in 0..10_000 {
        assert!(!light.tick());
    }
    assert_eq!(light.colour(), SignalState::Red);
    assert_eq!(light.remaining_secs(), 0);

    // Releasing restarts the red step from zero
    assert!(!light.toggle_emergency());
    assert_eq!(light.remaining_secs(), 6);
    for _ in 0..359 {
        light.tick();
    }
    assert_eq!(light.colour(), SignalState::Red);
    light.tick();
    assert_eq!(light.colour(), SignalState::Yellow);
}
