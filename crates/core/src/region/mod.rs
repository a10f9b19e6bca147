mod requests;
mod types;

pub use requests::{DistrictPatch, NewDistrict};
pub use types::{District, State, StateStats};
