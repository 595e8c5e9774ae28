use common::{
    grid::{Direction, Grid, Position},
    input, math,
    xyz::Vec3,
};

#[test]
fn grid_parse_and_transform() {
    let grid = Grid::parse_chars("ab\r\ncd\nef\n").unwrap();

    assert_eq!((grid.row_n(), grid.col_n()), (3, 2));
    assert_eq!(grid.get(&Position::new(2, 1)), Some(&'f'));
    assert_eq!(grid.get(&Position::new(3, 0)), None);
    assert_eq!(grid.transpose().to_string(), "ace\nbdf\n");
    assert_eq!(grid.rotate_clockwise().to_string(), "eca\nfdb\n");
    assert_eq!(grid.column(1).collect::<String>(), "bdf");
}

#[test]
fn grid_reject_ragged_or_empty_text() {
    assert!(Grid::parse_chars("ab\nc\n").is_err());
    assert!(Grid::parse_chars("").is_err());
    assert!(Grid::parse_with("a?", |c| (c != '?').then_some(c)).is_err());
}

#[test]
fn grid_neighbors_stay_inside() {
    let grid = Grid::new(2, 3, 0u8);
    let mut neighbors = grid.neighbors(&Position::new(0, 0)).collect::<Vec<_>>();
    neighbors.sort();

    assert_eq!(neighbors, vec![Position::new(0, 1), Position::new(1, 0)]);
    assert_eq!(grid.step(&Position::new(1, 2), Direction::East), None);
    assert_eq!(Position::new(0, 0).neighbor(Direction::North), None);
}

#[test]
fn direction_turns_and_parses() {
    assert_eq!(Direction::North.turn_clockwise(), Direction::East);
    assert_eq!(Direction::North.turn_counterclockwise(), Direction::West);
    assert_eq!(Direction::East.reverse(), Direction::West);
    assert_eq!(Direction::try_from('v').unwrap(), Direction::South);
    assert_eq!(Direction::try_from('L').unwrap(), Direction::West);
    assert!(Direction::try_from('x').is_err());
}

#[test]
fn split_blocks_on_blank_lines() {
    assert_eq!(
        input::split_blocks("a\nb\n\n\nc\r\n\r\nd\n"),
        vec!["a\nb".to_string(), "c".to_string(), "d".to_string()]
    );
    assert_eq!(input::parse_numbers::<i32>(" 3 -4  5").unwrap(), vec![3, -4, 5]);
    assert!(input::parse_numbers::<u32>("3 x").is_err());
}

#[test]
fn lcm_of_cycle_lengths() {
    assert_eq!(math::gcd(12, 18), 6);
    assert_eq!(math::lcm(4, 6), 12);
    assert_eq!(math::lcm_all([2, 3, 4]), 12);
}

#[test]
fn vec3_exact_arithmetic() {
    let a = Vec3::new(1, 2, 3);
    let b = Vec3::new(4, 5, 6);

    assert_eq!(a.dot(&b), 32);
    assert_eq!(a.cross(&b), Vec3::new(-3, 6, -3));
    assert_eq!((b - a) * 2, Vec3::new(6, 6, 6));
    assert_eq!(Vec3::new(6, -9, 3).div_exact(3), Some(Vec3::new(2, -3, 1)));
    assert_eq!(Vec3::new(6, -8, 3).div_exact(3), None);
    assert_eq!((a + b).sum(), 21);
}
