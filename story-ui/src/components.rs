pub mod compare;
pub mod dialogs;
pub mod full_view;
pub mod gallery;
pub mod history;
pub mod styles;

pub use compare::CompareView;
pub use full_view::FullStoryView;
pub use gallery::StoryGallery;
pub use history::VersionHistoryModal;
