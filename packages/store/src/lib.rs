pub mod banner;
pub mod config;
pub mod gallery;
pub mod login;
pub mod models;
pub mod preview;
pub mod session;
pub mod validation;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::{BrowserUrls, LocalStore};

pub use banner::Banner;
pub use config::GalleryConfig;
pub use gallery::{FilterEntry, GalleryCard, GalleryState, ALL_CATEGORY_ID};
pub use login::{LoginFlow, LoginPhase, DEFAULT_LOGIN_ERROR};
pub use models::{Category, Credentials, Session, Work};
pub use preview::{NoObjectUrls, ObjectUrls, PreviewSlot};
pub use session::{KeyValueStore, SessionStore};
pub use validation::{AddWorkForm, ImageFile, ImageSelection, SubmitGate, ValidationError};
