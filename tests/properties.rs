use snake_board::{Board, Direction, Lcg48, Point, Snake};

use proptest::prelude::*;

prop_compose! {
    fn arb_point()(
        x in -1_000_000i32..1_000_000,
        y in -1_000_000i32..1_000_000
    ) -> Point {
        Point::new(x, y)
    }
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn arb_directions(max: usize) -> impl Strategy<Value = Vec<Direction>> {
    prop::collection::vec(arb_direction(), 0..max)
}

fn assert_well_formed(snake: &Snake) {
    let cells: Vec<Point> = snake.cells().collect();

    for (i, a) in cells.iter().enumerate() {
        for b in &cells[i + 1..] {
            assert_ne!(a, b, "cells overlap in {}", snake);
        }
    }
    for pair in cells.windows(2) {
        assert_eq!(pair[0].square_distance(pair[1]), 1, "gap in {}", snake);
    }
    if let Some(neck) = snake.tail().front() {
        assert_eq!(neck.direction_to(snake.head()), Some(snake.direction()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn addition_commutes(a in arb_point(), b in arb_point()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn add_xy_matches_add(p in arb_point(), q in arb_point()) {
        prop_assert_eq!(p.add_xy(q.x, q.y), p + q);
    }

    #[test]
    fn scaling(p in arb_point(), c in -1_000i32..1_000) {
        prop_assert_eq!(p * c, Point::new(p.x * c, p.y * c));
    }

    #[test]
    fn opposite_directions_cancel(p in arb_point()) {
        prop_assert_eq!(p + Direction::North + Direction::South, p);
        prop_assert_eq!(p + Direction::West + Direction::East, p);
    }

    #[test]
    fn direction_to_neighbour(p in arb_point(), d in arb_direction()) {
        prop_assert_eq!(p.direction_to(p + d), Some(d));
        prop_assert_eq!((p + d).direction_to(p), Some(d.complement()));
    }

    #[test]
    fn moves_keep_the_snake_well_formed(
        length in 1usize..8,
        moves in prop::collection::vec((arb_direction(), any::<bool>()), 0..60)
    ) {
        let mut snake = Snake::straight(Point::new(0, 0), length, Direction::East);

        for (dir, grow) in moves {
            let next = if grow { snake.grow(dir) } else { snake.step(dir) };
            match next {
                Some(next) => {
                    assert_well_formed(&next);
                    prop_assert_eq!(next.len(), snake.len() + usize::from(grow));
                    prop_assert_eq!(next.direction(), dir);
                    snake = next;
                }
                None => break,
            }
        }
    }

    #[test]
    fn counters_never_go_down(
        seed in any::<i64>(),
        height in 2i32..12,
        width in 2i32..12,
        dirs in arb_directions(80)
    ) {
        let mut rng = Lcg48::new(seed);
        let mut board = Board::new(height, width, &mut rng).unwrap();

        for dir in dirs {
            let next = board.update(dir, &mut rng);

            prop_assert!(next.score() >= board.score());
            prop_assert!(next.score() <= board.score() + 1);
            prop_assert!(next.moves() >= board.moves());
            if board.is_live() {
                prop_assert_eq!(next.moves(), board.moves() + 1);
            }
            if next.score() > board.score() {
                prop_assert_eq!(next.snake().len(), board.snake().len() + 1);
                prop_assert_eq!(next.snake().head(), board.food());
            }
            if next.is_live() {
                prop_assert!(!next.snake().contains(next.food()));
                prop_assert!(next.snake().cells().all(|p| next.in_bounds(p)));
                assert_well_formed(next.snake());
            }

            board = next;
        }
    }

    #[test]
    fn dead_boards_are_frozen(
        seed in any::<i64>(),
        before in arb_directions(40),
        after in arb_directions(20)
    ) {
        let mut rng = Lcg48::new(seed);
        let board = Board::new(7, 11, &mut rng).unwrap();

        // Running east long enough always leaves the board.
        let dead = board
            .update_all(before, &mut rng)
            .update_all(std::iter::repeat(Direction::East).take(20), &mut rng);
        prop_assume!(!dead.is_live());

        prop_assert_eq!(dead.update_all(after, &mut rng), dead);
    }

    #[test]
    fn same_seed_same_game(seed in any::<i64>(), dirs in arb_directions(60)) {
        let a = Board::new(9, 9, &mut Lcg48::new(seed))
            .unwrap()
            .update_all(dirs.clone(), &mut Lcg48::new(seed));
        let b = Board::new(9, 9, &mut Lcg48::new(seed))
            .unwrap()
            .update_all(dirs, &mut Lcg48::new(seed));

        prop_assert_eq!(a, b);
    }
}
