pub mod camera;
pub mod carousel;
pub mod constants;
pub mod contact;
pub mod frame_loop;
pub mod lightbox;
pub mod particles;
pub mod render;
pub mod scroll_spy;
pub mod theme;
pub mod typewriter;

pub use camera::*;
pub use carousel::*;
pub use contact::*;
pub use frame_loop::*;
pub use lightbox::*;
pub use particles::*;
pub use render::*;
pub use scroll_spy::*;
pub use theme::*;
pub use typewriter::*;
