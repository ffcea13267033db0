//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = ElevatorId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(ElevatorId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ElevatorId(0) < ElevatorId(1));
        assert!(PassengerId(100) > PassengerId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ElevatorId::INVALID.0, u32::MAX);
        assert_eq!(PassengerId::INVALID.0, u64::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(7).to_string(), "ElevatorId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn zero_is_sentinel() {
        assert!(Tick::ZERO.is_unset());
        assert!(!Tick(1).is_unset());
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod position {
    use crate::{Direction, Position};

    #[test]
    fn at_floor_is_at_target() {
        let p = Position::at_floor(4);
        assert!(p.is_at_target());
        assert_eq!(p.distance_to_target(), 0);
        assert_eq!(p.target_direction(), Direction::Stopped);
    }

    #[test]
    fn advance_normalizes_upwards() {
        let mut p = Position::at_floor(0);
        p.target_floor = 5;
        p.advance(2); // 0.2
        assert_eq!((p.current_floor, p.floor_up_position), (0, 2));
        p.advance(9); // 1.1
        assert_eq!((p.current_floor, p.floor_up_position), (1, 1));
        p.advance(29); // 4.0
        assert_eq!((p.current_floor, p.floor_up_position), (4, 0));
    }

    #[test]
    fn advance_normalizes_downwards() {
        let mut p = Position::at_floor(3);
        p.target_floor = 0;
        p.advance(-1); // 2.9
        assert_eq!((p.current_floor, p.floor_up_position), (2, 9));
        p.advance(-9); // 2.0
        assert_eq!((p.current_floor, p.floor_up_position), (2, 0));
        p.advance(-20); // 0.0
        assert_eq!((p.current_floor, p.floor_up_position), (0, 0));
        assert!(p.is_at_target());
    }

    #[test]
    fn distance_in_subfloor_units() {
        // Ascending: |target - current| * 10 - floor_up_position.
        let p = Position { current_floor: 1, floor_up_position: 3, target_floor: 4 };
        assert_eq!(p.distance_to_target(), (4 - 1) * 10 - 3);
        // Descending: (current - target) * 10 + floor_up_position.
        let q = Position { current_floor: 4, floor_up_position: 3, target_floor: 1 };
        assert_eq!(q.distance_to_target(), (4 - 1) * 10 + 3);
    }

    #[test]
    fn mid_floor_direction_uses_scaled_axis() {
        // Cabin half-way above its target's integer floor must read Down.
        let p = Position { current_floor: 2, floor_up_position: 5, target_floor: 2 };
        assert_eq!(p.target_direction(), Direction::Down);
        assert_eq!(p.distance_to_target(), 5);
        assert!(!p.is_at_target());
    }

    #[test]
    fn advance_towards_target_clamps_at_target() {
        // One unit short of the target at cruise speed: land exactly on it.
        let mut p = Position { current_floor: 4, floor_up_position: 9, target_floor: 5 };
        p.advance_towards_target(2);
        assert_eq!((p.current_floor, p.floor_up_position), (5, 0));
        assert!(p.is_at_target());

        // Same going down.
        let mut q = Position { current_floor: 2, floor_up_position: 1, target_floor: 2 };
        q.advance_towards_target(2);
        assert_eq!((q.current_floor, q.floor_up_position), (2, 0));
        assert!(q.is_at_target());
    }

    #[test]
    fn advance_towards_target_moves_in_heading() {
        let mut up = Position::at_floor(0);
        up.target_floor = 2;
        up.advance_towards_target(2);
        assert_eq!((up.current_floor, up.floor_up_position), (0, 2));

        let mut down = Position::at_floor(2);
        down.target_floor = 0;
        down.advance_towards_target(2);
        assert_eq!((down.current_floor, down.floor_up_position), (1, 8));

        let mut still = Position::at_floor(1);
        still.advance_towards_target(2);
        assert_eq!((still.current_floor, still.floor_up_position), (1, 0));
    }

    #[test]
    fn float_is_presentational() {
        let p = Position { current_floor: 2, floor_up_position: 5, target_floor: 7 };
        assert!((p.current_floor_float() - 2.5).abs() < f64::EPSILON);
    }
}

#[cfg(test)]
mod motion {
    use crate::{Direction, RunStatus};

    #[test]
    fn speeds() {
        assert_eq!(RunStatus::Stopped.speed(), 0);
        assert_eq!(RunStatus::StartUp.speed(), 1);
        assert_eq!(RunStatus::ConstantSpeed.speed(), 2);
        assert_eq!(RunStatus::StartDown.speed(), 1);
    }

    #[test]
    fn wire_strings() {
        assert_eq!(Direction::Up.as_str(), "up");
        assert_eq!(Direction::Stopped.to_string(), "stopped");
        assert_eq!(RunStatus::ConstantSpeed.as_str(), "constant_speed");
        assert_eq!(RunStatus::StartDown.to_string(), "start_down");
    }

    #[test]
    fn is_moving() {
        assert!(Direction::Up.is_moving());
        assert!(Direction::Down.is_moving());
        assert!(!Direction::Stopped.is_moving());
    }
}

#[cfg(test)]
mod config {
    use crate::BuildingConfig;

    fn cfg() -> BuildingConfig {
        BuildingConfig {
            floors_count:    8,
            elevators_count: 2,
            max_capacity:    10,
            energy_rates:    vec![1.0, 2.5],
            scenario:        "test".into(),
            duration:        1000,
        }
    }

    #[test]
    fn floor_bounds() {
        let c = cfg();
        assert!(c.is_valid_floor(0));
        assert!(c.is_valid_floor(7));
        assert!(!c.is_valid_floor(8));
        assert!(!c.is_valid_floor(-1));
        assert_eq!(c.top_floor(), 7);
    }

    #[test]
    fn energy_rate_defaults_past_table_end() {
        let c = cfg();
        assert_eq!(c.energy_rate(1), 2.5);
        assert_eq!(c.energy_rate(9), 1.0);
    }
}
