use std::collections::HashSet;

use cookie_crunch_board::{query, Level, LevelConfig};
use cookie_crunch_core::{CookieId, Swap};

fn populated_level(columns: u32, rows: u32, seed: u64) -> Level {
    let mut level = Level::new(LevelConfig::new(columns, rows, seed)).expect("valid dimensions");
    let _ = level.shuffle();
    level
}

fn layout(level: &Level) -> Vec<(CookieId, u32, u32)> {
    query::cookies(level)
        .into_iter()
        .map(|cookie| (cookie.id(), cookie.column(), cookie.row()))
        .collect()
}

#[test]
fn shuffle_populates_every_cell() {
    let mut level = Level::new(LevelConfig::new(9, 9, 1)).expect("valid dimensions");
    let spawned = level.shuffle();

    assert_eq!(spawned.len(), 81);
    for row in 0..9 {
        for column in 0..9 {
            assert!(
                query::cookie_at(&level, column, row).is_some(),
                "cell ({column}, {row}) was left empty after shuffle"
            );
        }
    }
}

#[test]
fn shuffle_returns_distinct_identities() {
    let mut level = Level::new(LevelConfig::new(9, 9, 1)).expect("valid dimensions");
    let identities: HashSet<CookieId> = level
        .shuffle()
        .into_iter()
        .map(|cookie| cookie.id())
        .collect();
    assert_eq!(identities.len(), 81);
}

#[test]
fn lookup_is_empty_before_population() {
    let level = Level::new(LevelConfig::new(9, 9, 1)).expect("valid dimensions");
    assert!(query::cookie_at(&level, 0, 0).is_none());
}

#[test]
fn swap_exchanges_two_adjacent_cookies() {
    let mut level = populated_level(9, 9, 7);
    let first = query::cookie_at(&level, 0, 0).expect("populated cell");
    let second = query::cookie_at(&level, 1, 0).expect("populated cell");

    level.perform_swap(Swap::new(first.id(), second.id()));

    let at_origin = query::cookie_at(&level, 0, 0).expect("cell stays occupied");
    let at_neighbour = query::cookie_at(&level, 1, 0).expect("cell stays occupied");

    assert_eq!(at_origin.id(), second.id());
    assert_eq!((at_origin.column(), at_origin.row()), (0, 0));
    assert_eq!(at_neighbour.id(), first.id());
    assert_eq!((at_neighbour.column(), at_neighbour.row()), (1, 0));
}

#[test]
fn swap_applied_twice_restores_the_board() {
    let mut level = populated_level(9, 9, 7);
    let before = layout(&level);

    let first = query::cookie_at(&level, 3, 4).expect("populated cell");
    let second = query::cookie_at(&level, 3, 5).expect("populated cell");
    let swap = Swap::new(first.id(), second.id());

    level.perform_swap(swap);
    assert_ne!(layout(&level), before, "one application must move cookies");

    level.perform_swap(swap);
    assert_eq!(layout(&level), before, "a swap must be its own inverse");
}

#[test]
fn swap_keeps_grid_and_cookie_coordinates_aligned() {
    let mut level = populated_level(6, 5, 21);

    let pairs = [((0, 0), (1, 0)), ((2, 3), (2, 4)), ((5, 0), (0, 4))];
    for ((column_a, row_a), (column_b, row_b)) in pairs {
        let first = query::cookie_at(&level, column_a, row_a).expect("populated cell");
        let second = query::cookie_at(&level, column_b, row_b).expect("populated cell");
        level.perform_swap(Swap::new(first.id(), second.id()));
    }

    let (columns, rows) = query::dimensions(&level);
    for row in 0..rows {
        for column in 0..columns {
            let cookie = query::cookie_at(&level, column, row).expect("populated cell");
            assert_eq!(
                (cookie.column(), cookie.row()),
                (column, row),
                "cookie {} reports coordinates that disagree with its slot",
                cookie.id().get()
            );
        }
    }
}

#[test]
fn swap_accepts_cells_that_are_not_adjacent() {
    let mut level = populated_level(9, 9, 3);
    let first = query::cookie_at(&level, 0, 0).expect("populated cell");
    let second = query::cookie_at(&level, 8, 8).expect("populated cell");

    level.perform_swap(Swap::new(first.id(), second.id()));

    assert_eq!(
        query::cookie_at(&level, 8, 8).expect("cell stays occupied").id(),
        first.id()
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn lookup_panics_past_the_last_column() {
    let level = populated_level(9, 9, 1);
    let _ = query::cookie_at(&level, 9, 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn lookup_panics_past_the_last_row() {
    let level = populated_level(9, 9, 1);
    let _ = query::cookie_at(&level, 0, 9);
}

#[test]
#[should_panic(expected = "not on the board")]
fn swap_panics_for_an_identity_that_was_never_filed() {
    let mut level = populated_level(9, 9, 1);
    let resident = query::cookie_at(&level, 0, 0).expect("populated cell");
    level.perform_swap(Swap::new(resident.id(), CookieId::new(9_999)));
}
