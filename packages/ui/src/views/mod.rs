mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod image_preview;
pub use image_preview::ImagePreview;

mod delete_modal;
pub use delete_modal::DeleteWorksModal;

mod add_work_modal;
pub use add_work_modal::AddWorkModal;

mod gallery_view;
pub use gallery_view::GalleryView;
