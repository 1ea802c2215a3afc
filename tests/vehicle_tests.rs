//! Vehicle kinematics validation tests

use intersection_sim::simulation::{
    Direction, Position, Rgb, SignalState, SimConfig, Vehicle, VehicleId, VehicleKind,
};

fn vehicle_at(
    config: &SimConfig,
    kind: VehicleKind,
    direction: Direction,
    position: Position,
) -> Vehicle {
    let spec = config.spec(kind);
    Vehicle::new(VehicleId(0), kind, direction, 0, position, spec, spec.color)
}

/// A northbound vehicle inside the stop zone
fn in_stop_zone(config: &SimConfig, kind: VehicleKind) -> Vehicle {
    let center = config.center();
    let x = config.lane_coordinate(Direction::North, 0);
    vehicle_at(
        config,
        kind,
        Direction::North,
        Position::new(x, center.y + config.stop_line_offset + 75.0),
    )
}

#[test]
fn test_red_signal_brakes_to_standstill() {
    let config = SimConfig::default();
    let mut car = in_stop_zone(&config, VehicleKind::Car);
    car.speed = car.max_speed;

    let mut previous = car.speed;
    for _ in 0..60 {
        car.update(SignalState::Red, None, &config);
        assert!(car.speed >= 0.0);
        assert!(car.speed <= previous);
        previous = car.speed;
    }
    assert_eq!(car.speed, 0.0);
    assert!(car.stop_for_signal(SignalState::Red, &config));
}

#[test]
fn test_yellow_also_stops() {
    let config = SimConfig::default();
    let car = in_stop_zone(&config, VehicleKind::Bus);
    assert!(car.stop_for_signal(SignalState::Yellow, &config));
    assert!(!car.stop_for_signal(SignalState::Green, &config));
}

#[test]
fn test_stop_zone_bounds() {
    let config = SimConfig::default();
    let center = config.center();
    let mut car = vehicle_at(
        &config,
        VehicleKind::Car,
        Direction::West,
        Position::new(center.x + config.stop_line_offset + 10.0, center.y),
    );
    // Too close to the stop line to halt
    assert!(!car.stop_for_signal(SignalState::Red, &config));

    car.position.x = center.x + config.stop_line_offset + 50.0;
    assert!(car.stop_for_signal(SignalState::Red, &config));

    // Still far away from the intersection
    car.position.x = center.x + config.stop_line_offset + 100.0;
    assert!(!car.stop_for_signal(SignalState::Red, &config));
}

#[test]
fn test_ambulance_never_stops_for_signal() {
    let config = SimConfig::default();
    let mut ambulance = in_stop_zone(&config, VehicleKind::Ambulance);
    for state in [SignalState::Red, SignalState::Yellow, SignalState::Green] {
        assert!(!ambulance.stop_for_signal(state, &config));
    }

    ambulance.update(SignalState::Red, None, &config);
    assert!(ambulance.speed > 0.0);
}

#[test]
fn test_acceleration_is_capped() {
    let config = SimConfig::default();
    let mut truck = vehicle_at(
        &config,
        VehicleKind::Truck,
        Direction::East,
        Position::new(0.0, 500.0),
    );
    let start = truck.position.x;

    for _ in 0..200 {
        truck.update(SignalState::Green, None, &config);
        assert!(truck.speed <= truck.max_speed);
    }
    assert_eq!(truck.speed, truck.max_speed);
    assert!(truck.position.x > start);
    assert_eq!(truck.position.y, 500.0);
}

#[test]
fn test_following_distance_depends_on_speed() {
    let config = SimConfig::default();
    let leader = vehicle_at(
        &config,
        VehicleKind::Car,
        Direction::South,
        Position::new(600.0, 200.0),
    );
    // Centres 65 apart, lengths 50 each: 15 units of free space
    let mut follower = vehicle_at(
        &config,
        VehicleKind::Car,
        Direction::South,
        Position::new(600.0, 135.0),
    );
    assert_eq!(follower.gap_to(&leader), 15.0);

    follower.speed = 1.0;
    assert!(!follower.stop_for_vehicle(Some(&leader)));

    follower.speed = 2.0;
    assert!(follower.stop_for_vehicle(Some(&leader)));
    assert!(!follower.stop_for_vehicle(None));

    follower.update(SignalState::Green, Some(&leader), &config);
    assert!(follower.speed < 2.0);
}

#[test]
fn test_drawn_size_follows_axis() {
    let config = SimConfig::default();
    let spec = config.spec(VehicleKind::Bus);

    let northbound = vehicle_at(&config, VehicleKind::Bus, Direction::North, Position::default());
    assert_eq!(northbound.drawn_size(), (spec.width, spec.length));

    let westbound = vehicle_at(&config, VehicleKind::Bus, Direction::West, Position::default());
    assert_eq!(westbound.drawn_size(), (spec.length, spec.width));
}

#[test]
fn test_crossing_and_exit_checks() {
    let config = SimConfig::default();
    let center = config.center();
    let mut car = vehicle_at(
        &config,
        VehicleKind::Car,
        Direction::South,
        Position::new(600.0, center.y),
    );
    assert!(!car.has_crossed(&config));

    car.position.y = center.y + config.passed_threshold + 1.0;
    assert!(car.has_crossed(&config));
    assert!(!car.is_off_world(&config));

    car.position.y = config.height + config.removal_margin + 1.0;
    assert!(car.is_off_world(&config));
}

#[test]
fn test_constructor_takes_body_colour() {
    let config = SimConfig::default();
    let spec = config.spec(VehicleKind::Car);
    let painted = Rgb(0, 100, 200);
    let car = Vehicle::new(
        VehicleId(3),
        VehicleKind::Car,
        Direction::East,
        1,
        Position::default(),
        spec,
        painted,
    );
    assert_eq!(car.color, painted);
    assert_eq!(car.length, spec.length);
    assert_eq!(car.speed, 0.0);
}
