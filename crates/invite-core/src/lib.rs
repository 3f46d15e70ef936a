//! Platform-independent logic for the invitation site: scroll-driven
//! section animation, the scene camera path, preload bookkeeping, stored
//! records and their Firestore encoding.

pub mod camera;
pub mod constants;
pub mod fade;
pub mod firestore;
pub mod i18n;
pub mod preload;
pub mod records;
pub mod route;
pub mod scroll;
pub mod sections;
pub mod session;

pub use camera::*;
pub use constants::*;
pub use fade::*;
pub use preload::*;
pub use records::*;
pub use route::*;
pub use scroll::*;
pub use sections::*;
