pub mod constants;
pub mod error;
pub mod geometry;
pub mod orbit;
pub mod plenum;
pub mod pricing;
pub mod scene;
pub mod spherical;
pub mod state;

pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use orbit::*;
pub use plenum::*;
pub use pricing::*;
pub use scene::*;
pub use spherical::*;
pub use state::*;
