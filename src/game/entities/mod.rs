//! Typed world entities — the thin data the query systems scan.
//!
//! Each entity exposes a world position and a bounding box; nothing here
//! owns rendering state. Anything that can fade out when it blocks the
//! camera's view of the player implements [`Occludable`].

pub mod cars;
pub mod houses;
pub mod items;
pub mod occludable;
pub mod props;

pub use cars::{CarKind, GameCar};
pub use houses::{GameHouse, HouseKind};
pub use items::{GameItem, ItemKind};
pub use occludable::Occludable;
pub use props::GameObject;
