#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Cookie Crunch board engine.
//!
//! This crate defines the vocabulary that connects the authoritative
//! board to presentation adapters: stable cookie identities, the closed
//! palette of cookie types with its uniform random selection, and the
//! [`Swap`] value object describing one candidate exchange. Board state
//! itself lives in the `cookie-crunch-board` crate.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unique identifier assigned to a cookie.
///
/// Identities are allocated by the level from a monotonic counter and
/// stay stable for the cookie's lifetime. Equality between cookies is
/// defined by identity alone, so a cookie keeps its set membership when
/// a swap moves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CookieId(u32);

impl CookieId {
    /// Creates a new cookie identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Closed palette of types a cookie can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookieType {
    /// Croissant-flavoured cookie.
    Croissant,
    /// Cupcake-flavoured cookie.
    Cupcake,
    /// Danish-flavoured cookie.
    Danish,
    /// Donut-flavoured cookie.
    Donut,
    /// Macaroon-flavoured cookie.
    Macaroon,
    /// Sugar-cookie-flavoured cookie.
    SugarCookie,
}

impl CookieType {
    /// Every palette member in declaration order.
    pub const ALL: [CookieType; 6] = [
        CookieType::Croissant,
        CookieType::Cupcake,
        CookieType::Danish,
        CookieType::Donut,
        CookieType::Macaroon,
        CookieType::SugarCookie,
    ];

    /// Draws one palette member uniformly at random.
    ///
    /// The generator is an explicit parameter so callers decide the
    /// seeding; population stays reproducible under a fixed seed.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Name of the rendering resource that depicts this cookie type.
    ///
    /// The board stores the mapping without interpreting it; only
    /// presentation adapters resolve the name against their assets.
    #[must_use]
    pub const fn sprite_name(&self) -> &'static str {
        match self {
            CookieType::Croissant => "Croissant",
            CookieType::Cupcake => "Cupcake",
            CookieType::Danish => "Danish",
            CookieType::Donut => "Donut",
            CookieType::Macaroon => "Macaroon",
            CookieType::SugarCookie => "SugarCookie",
        }
    }
}

impl fmt::Display for CookieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sprite_name())
    }
}

/// Candidate exchange of two cookies' board positions.
///
/// The pair is unordered: swapping A with B names the same candidate as
/// swapping B with A, and equality and hashing reflect that. The swap
/// caches no coordinates; the board reads each cookie's current
/// position at the moment the swap is applied.
#[derive(Clone, Copy, Debug)]
pub struct Swap {
    cookie_a: CookieId,
    cookie_b: CookieId,
}

impl Swap {
    /// Creates a swap between two distinct cookies.
    ///
    /// # Panics
    /// Panics if both identifiers name the same cookie.
    #[must_use]
    pub fn new(cookie_a: CookieId, cookie_b: CookieId) -> Self {
        assert!(
            cookie_a != cookie_b,
            "swap requires two distinct cookies, got {} twice",
            cookie_a.get()
        );
        Self { cookie_a, cookie_b }
    }

    /// First cookie named by the swap.
    #[must_use]
    pub const fn cookie_a(&self) -> CookieId {
        self.cookie_a
    }

    /// Second cookie named by the swap.
    #[must_use]
    pub const fn cookie_b(&self) -> CookieId {
        self.cookie_b
    }
}

impl PartialEq for Swap {
    fn eq(&self, other: &Self) -> bool {
        (self.cookie_a == other.cookie_a && self.cookie_b == other.cookie_b)
            || (self.cookie_a == other.cookie_b && self.cookie_b == other.cookie_a)
    }
}

impl Eq for Swap {}

impl Hash for Swap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (low, high) = if self.cookie_a <= self.cookie_b {
            (self.cookie_a, self.cookie_b)
        } else {
            (self.cookie_b, self.cookie_a)
        };
        low.hash(state);
        high.hash(state);
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap cookie {} with cookie {}",
            self.cookie_a.get(),
            self.cookie_b.get()
        )
    }
}
