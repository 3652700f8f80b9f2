//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::point_cloud_extremal_points::point_cloud_extremal_point_ids;
pub use self::shuffle::{shuffle, DEFAULT_SHUFFLE_SEED};

mod center;
mod point_cloud_extremal_points;
mod shuffle;
