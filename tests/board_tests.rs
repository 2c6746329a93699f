use naval_battle::{
    create_empty_grid, derive_target_list, fleet_tile_count, is_cleared, new_grid, query_tile,
    record_shot, BoardError, Coord, HitResult, BOARD_HEIGHT, BOARD_WIDTH, FLEET, TOTAL_SHIP_TILES,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn standard_grid(seed: u64) -> naval_battle::Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    new_grid(&FLEET, BOARD_WIDTH, BOARD_HEIGHT, &mut rng).unwrap()
}

#[test]
fn test_empty_grid_has_no_ships_or_shots() {
    let grid = create_empty_grid(7, 4);
    assert_eq!(grid.width(), 7);
    assert_eq!(grid.height(), 4);
    assert_eq!(grid.tiles().count(), 28);
    for tile in grid.tiles() {
        assert!(!tile.is_occupied());
        assert!(!tile.is_spacing());
        assert_eq!(tile.hit_result(), None);
    }
    assert!(derive_target_list(&grid).is_empty());
    assert!(is_cleared(&grid));
}

#[test]
fn test_standard_fleet_occupies_twenty_tiles() {
    let grid = standard_grid(42);
    assert_eq!(fleet_tile_count(&FLEET), TOTAL_SHIP_TILES);
    assert_eq!(grid.occupied_coords().len(), 20);
    assert_eq!(grid.targets().len(), 20);
    assert_eq!(grid.targets(), &grid.occupied_coords());
}

#[test]
fn test_record_shot_damage_and_miss() {
    let mut grid = standard_grid(7);
    let ship = *grid.targets().iter().next().unwrap();
    let water = grid
        .tiles()
        .find(|t| !t.is_occupied())
        .map(|t| t.coord())
        .unwrap();

    assert_eq!(record_shot(&mut grid, ship).unwrap(), HitResult::Damage);
    assert!(!grid.targets().contains(&ship));
    assert_eq!(grid.targets().len(), 19);
    assert_eq!(
        query_tile(&grid, ship).unwrap().hit_result(),
        Some(HitResult::Damage)
    );

    assert_eq!(record_shot(&mut grid, water).unwrap(), HitResult::Miss);
    assert_eq!(grid.targets().len(), 19);
    assert_eq!(
        query_tile(&grid, water).unwrap().hit_result(),
        Some(HitResult::Miss)
    );
}

#[test]
fn test_repeated_shot_is_rejected() {
    let mut grid = standard_grid(3);
    let coord = Coord::new(4, 4);
    grid.record_shot(coord).unwrap();
    let targets = grid.targets().clone();
    assert_eq!(
        grid.record_shot(coord).unwrap_err(),
        BoardError::AlreadyShot { x: 4, y: 4 }
    );
    assert_eq!(grid.targets(), &targets);
}

#[test]
fn test_out_of_bounds_queries() {
    let mut grid = create_empty_grid(10, 10);
    assert_eq!(
        query_tile(&grid, Coord::new(10, 0)).unwrap_err(),
        BoardError::OutOfBounds { x: 10, y: 0 }
    );
    assert!(grid.record_shot(Coord::new(0, 10)).is_err());
    assert!(!grid.is_placement_ready(Coord::new(11, 11)));
}

#[test]
fn test_clearing_every_target_wins() {
    let mut grid = standard_grid(99);
    let targets: Vec<Coord> = grid.targets().iter().copied().collect();
    let (last, rest) = targets.split_last().unwrap();
    for coord in rest {
        grid.record_shot(*coord).unwrap();
        assert!(!grid.is_cleared());
    }
    grid.record_shot(*last).unwrap();
    assert!(grid.is_cleared());
}

#[test]
fn test_view_hides_ships_until_revealed() {
    let mut grid = standard_grid(11);
    let ship = *grid.targets().iter().next().unwrap();
    let hidden = grid.view(false).to_string();
    assert!(!hidden.contains('S'));
    assert!(grid.view(true).to_string().contains('S'));

    grid.record_shot(ship).unwrap();
    let lines: Vec<String> = grid.view(false).to_string().lines().map(String::from).collect();
    assert_eq!(lines.len(), BOARD_HEIGHT + 1);
    assert!(lines[0].contains('A') && lines[0].contains('J'));
    assert!(lines[ship.y + 1].contains('X'));
}

#[test]
fn test_fleet_too_large_fails() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = new_grid(&FLEET, 3, 3, &mut rng).unwrap_err();
    assert!(matches!(err, BoardError::FleetDoesNotFit { .. }));
}
