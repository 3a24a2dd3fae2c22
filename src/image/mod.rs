pub mod buffer;
pub mod f32;
pub mod traits;

pub use self::buffer::RawImage;
pub use self::f32::{ImageF32, INVALID_DEPTH};
pub use self::traits::{ImageView, ImageViewMut};
