use micromouse::{
    Cell, DistanceField, GoalRegion, Heading, MazeSize, Movement, SensorReading, WallKnowledge,
};
use proptest::prelude::*;

fn heading() -> impl Strategy<Value = Heading> {
    prop::sample::select(Heading::ALL.to_vec())
}

fn reading() -> impl Strategy<Value = SensorReading> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(front, left, right)| SensorReading { front, left, right })
}

/// A side length plus a list of `(x, y, heading)` wall facts scaled into that maze.
fn walls_in_maze(max_side: usize) -> impl Strategy<Value = (MazeSize, Vec<(Cell, Heading)>)> {
    (1..=max_side).prop_flat_map(|side| {
        let size = MazeSize::new(side).expect("valid size");
        let wall = (0..side, 0..side, heading()).prop_map(|(x, y, h)| (Cell::new(x, y), h));
        (Just(size), prop::collection::vec(wall, 0..40))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn four_turns_return_to_the_same_heading(start in heading(), clockwise in any::<bool>()) {
        let turn = if clockwise { Movement::TurnClockwise } else { Movement::TurnCounterClockwise };
        let end = (0..4).fold(start, |h, _| turn.apply_to(h));
        prop_assert_eq!(end, start);
        prop_assert_eq!(start.clockwise().counter_clockwise(), start);
        prop_assert_eq!(start.opposite().opposite(), start);
    }

    #[test]
    fn sensed_walls_only_accumulate(
        side in 1_usize..=8,
        readings in prop::collection::vec((0_usize..8, 0_usize..8, heading(), reading()), 0..60)
    ) {
        let size = MazeSize::new(side).expect("valid size");
        let mut walls = WallKnowledge::new(size);
        for (x, y, facing, sensed) in readings {
            let cell = Cell::new(x % side, y % side);
            let before = walls.clone();
            let learned = walls.record_sensed_walls(cell, facing, sensed);

            prop_assert_eq!(walls.known_wall_count(), before.known_wall_count() + learned);
            for known in size.cells() {
                for h in Heading::ALL {
                    if before.is_wall(known, h) {
                        prop_assert!(walls.is_wall(known, h));
                    }
                }
            }
            prop_assert_eq!(walls.is_wall(cell, facing), before.is_wall(cell, facing) || sensed.front);
        }
    }

    #[test]
    fn repair_settles_the_root_and_never_moves_the_goal(
        (size, facts) in walls_in_maze(7),
        roots in prop::collection::vec((0_usize..7, 0_usize..7), 1..20)
    ) {
        let goal = GoalRegion::centered(size);
        let mut walls = WallKnowledge::new(size);
        let mut field = DistanceField::goal_centered(size);
        let side = size.side();

        for (i, (x, y)) in roots.into_iter().enumerate() {
            if let Some(&(cell, h)) = facts.get(i) {
                walls.add_wall(cell, h);
            }
            let root = Cell::new(x % side, y % side);
            field.repair(root, &walls, &goal);

            for cell in goal.cells() {
                prop_assert_eq!(field.distance(cell), 0);
            }
            for cell in size.cells() {
                prop_assert!(field.distance(cell) <= field.ceiling());
            }
            let stuck = !field.neighbor_floor(root, &walls).has_traversable();
            if !goal.contains(root) && !stuck {
                prop_assert!(
                    field.is_settled(root, &walls) || field.is_unreachable(root),
                    "root {root} left unsettled at {}",
                    field.distance(root)
                );
            }
        }
    }

    #[test]
    fn goal_region_is_centered(side in 1_usize..=64) {
        let size = MazeSize::new(side).expect("valid size");
        let goal = GoalRegion::centered(size);
        let cells: Vec<Cell> = goal.cells().collect();

        if side % 2 == 1 {
            prop_assert_eq!(cells, vec![Cell::new(side / 2, side / 2)]);
        } else {
            prop_assert_eq!(cells.len(), 4);
            for cell in &cells {
                prop_assert!(cell.x == side / 2 || cell.x + 1 == side / 2);
                prop_assert!(cell.y == side / 2 || cell.y + 1 == side / 2);
            }
        }
        let field = DistanceField::goal_centered(size);
        for cell in size.cells() {
            prop_assert_eq!(field.distance(cell) == 0, goal.contains(cell));
        }
    }
}
