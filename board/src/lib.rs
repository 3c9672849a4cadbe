#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative board state for the Cookie Crunch core.
//!
//! The [`Level`] owns the cookie grid and is the single writer of both
//! grid slots and cookie coordinates, which keeps the two in lock-step:
//! at any instant the occupied slots are in 1:1 correspondence with the
//! live cookies, and every cookie's stored coordinates match the slot
//! that holds it. Mutations go through [`Level::shuffle`] and
//! [`Level::perform_swap`]; reads go through the [`query`] module.
//!
//! The level performs no internal synchronization. A concurrent host
//! must serialize mutating access externally, for example by confining
//! the level to a single task or guarding it with a single-owner mutex.

mod grid;

use std::collections::{HashMap, HashSet};
use std::fmt;

use cookie_crunch_core::{CookieId, CookieType, Swap};
use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub use grid::Grid;

/// Default number of board columns.
pub const DEFAULT_COLUMNS: u32 = 9;

/// Default number of board rows.
pub const DEFAULT_ROWS: u32 = 9;

const DEFAULT_RNG_SEED: u64 = 0x51ab_90d3_1c4e_77f5;

/// Configuration consumed when constructing a level.
#[derive(Clone, Copy, Debug)]
pub struct LevelConfig {
    columns: u32,
    rows: u32,
    rng_seed: u64,
}

impl LevelConfig {
    /// Creates a new configuration with explicit extents and RNG seed.
    #[must_use]
    pub const fn new(columns: u32, rows: u32, rng_seed: u64) -> Self {
        Self {
            columns,
            rows,
            rng_seed,
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_RNG_SEED)
    }
}

/// Errors produced when a level cannot be constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    /// The configured extents would produce a board with no cells.
    #[error("board dimensions must be positive, got {columns}x{rows}")]
    InvalidDimensions {
        /// Number of columns requested by the configuration.
        columns: u32,
        /// Number of rows requested by the configuration.
        rows: u32,
    },
}

/// Tile occupying one board cell.
///
/// A cookie's identity is assigned at creation and defines equality and
/// hashing, so two cookies sharing a type and position stay distinct
/// and a relocation never disturbs set membership. The coordinates are
/// rewritten only when the level applies a swap; the type never
/// changes.
#[derive(Clone, Copy, Debug)]
pub struct Cookie {
    id: CookieId,
    column: u32,
    row: u32,
    cookie_type: CookieType,
}

impl Cookie {
    const fn new(id: CookieId, column: u32, row: u32, cookie_type: CookieType) -> Self {
        Self {
            id,
            column,
            row,
            cookie_type,
        }
    }

    /// Identity assigned to the cookie at creation.
    #[must_use]
    pub const fn id(&self) -> CookieId {
        self.id
    }

    /// Column currently occupied by the cookie.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Row currently occupied by the cookie.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Palette type assigned to the cookie at creation.
    #[must_use]
    pub const fn cookie_type(&self) -> CookieType {
        self.cookie_type
    }

    fn relocate(&mut self, column: u32, row: u32) {
        self.column = column;
        self.row = row;
    }
}

impl PartialEq for Cookie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cookie {}

impl std::hash::Hash for Cookie {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.cookie_type, self.column, self.row)
    }
}

/// Authoritative board state: a fixed grid of cookies plus the
/// machinery to populate it and to exchange two occupants.
#[derive(Debug)]
pub struct Level {
    cookies: Grid<Cookie>,
    next_cookie_id: u32,
    rng: ChaCha8Rng,
}

impl Level {
    /// Creates an empty level from the provided configuration.
    ///
    /// # Errors
    /// Returns [`LevelError::InvalidDimensions`] if either extent is
    /// zero.
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        if config.columns == 0 || config.rows == 0 {
            return Err(LevelError::InvalidDimensions {
                columns: config.columns,
                rows: config.rows,
            });
        }

        Ok(Self {
            cookies: Grid::new(config.columns, config.rows),
            next_cookie_id: 0,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        })
    }

    /// Fills every cell with a freshly created cookie of a freshly
    /// randomized type, overwriting any previous occupants.
    ///
    /// Returns the complete set of new cookies so the presentation
    /// layer can build their visual representations. The returned set
    /// always holds `columns * rows` cookies with distinct identities,
    /// including across repeated shuffles of the same level.
    pub fn shuffle(&mut self) -> HashSet<Cookie> {
        let columns = self.cookies.columns();
        let rows = self.cookies.rows();
        let mut spawned = HashSet::with_capacity(columns as usize * rows as usize);

        for row in 0..rows {
            for column in 0..columns {
                let cookie_type = CookieType::random(&mut self.rng);
                let cookie = Cookie::new(self.allocate_id(), column, row, cookie_type);
                self.cookies.set(column, row, Some(cookie));
                let _ = spawned.insert(cookie);
            }
        }

        debug!("shuffled {} cookies onto a {columns}x{rows} board", spawned.len());
        spawned
    }

    /// Exchanges the grid placements of the two cookies named by the
    /// swap and rewrites their stored coordinates to match.
    ///
    /// Both slots and both coordinate pairs are updated inside this
    /// call; callers never observe a state in which a slot and its
    /// occupant's coordinates disagree. Any two distinct occupied cells
    /// are accepted; checking that the cells are adjacent is the job of
    /// the collaborator that constructs the swap.
    ///
    /// # Panics
    /// Panics if either identity is not present on the board.
    pub fn perform_swap(&mut self, swap: Swap) {
        let mut cookie_a = self.cookie_by_id(swap.cookie_a());
        let mut cookie_b = self.cookie_by_id(swap.cookie_b());
        trace!("applying {swap}");

        let (column_a, row_a) = (cookie_a.column(), cookie_a.row());
        let (column_b, row_b) = (cookie_b.column(), cookie_b.row());

        cookie_b.relocate(column_a, row_a);
        self.cookies.set(column_a, row_a, Some(cookie_b));

        cookie_a.relocate(column_b, row_b);
        self.cookies.set(column_b, row_b, Some(cookie_a));
    }

    fn cookie_by_id(&self, id: CookieId) -> Cookie {
        self.cookies
            .occupied()
            .map(|(_, _, cookie)| *cookie)
            .find(|cookie| cookie.id() == id)
            .unwrap_or_else(|| panic!("cookie {} is not on the board", id.get()))
    }

    fn allocate_id(&mut self) -> CookieId {
        let id = CookieId::new(self.next_cookie_id);
        self.next_cookie_id += 1;
        id
    }
}

/// Read-only access to level state.
pub mod query {
    use super::{Cookie, Level};

    /// Returns the cookie occupying the cell, or `None` when the cell
    /// is empty.
    ///
    /// An empty cell is a normal outcome the caller handles; an
    /// out-of-range coordinate is a caller bug.
    ///
    /// # Panics
    /// Panics if `column` or `row` lies outside the board extents.
    #[must_use]
    pub fn cookie_at(level: &Level, column: u32, row: u32) -> Option<Cookie> {
        level.cookies.get(column, row).copied()
    }

    /// Extents of the board as `(columns, rows)`.
    #[must_use]
    pub fn dimensions(level: &Level) -> (u32, u32) {
        (level.cookies.columns(), level.cookies.rows())
    }

    /// Snapshot of every cookie on the board, ordered by identity.
    #[must_use]
    pub fn cookies(level: &Level) -> Vec<Cookie> {
        let mut cookies: Vec<Cookie> = level
            .cookies
            .occupied()
            .map(|(_, _, cookie)| *cookie)
            .collect();
        cookies.sort_by_key(|cookie| cookie.id());
        cookies
    }
}

/// Side table associating presentation handles with cookie identities.
///
/// The board never reads the handles; it only provides the slot. A
/// presentation layer owns one table per level, attaches a handle once
/// per cookie after population, and looks handles up while positioning
/// or animating. No board operation depends on a handle being attached.
#[derive(Debug)]
pub struct SpriteTable<H> {
    handles: HashMap<CookieId, H>,
}

impl<H> SpriteTable<H> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Files the handle for a cookie.
    ///
    /// # Panics
    /// Panics if a handle was already attached for the identity.
    pub fn attach(&mut self, id: CookieId, handle: H) {
        let previous = self.handles.insert(id, handle);
        assert!(
            previous.is_none(),
            "handle already attached for cookie {}",
            id.get()
        );
    }

    /// Returns the handle attached for a cookie, if any.
    #[must_use]
    pub fn handle(&self, id: CookieId) -> Option<&H> {
        self.handles.get(&id)
    }
}

impl<H> Default for SpriteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}
