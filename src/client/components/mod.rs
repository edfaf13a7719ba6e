pub mod add_part_modal;
pub mod delete_part_button;
pub mod installations_table;
pub mod navbar;
pub mod page;
pub mod title;

pub use add_part_modal::AddPartModal;
pub use delete_part_button::DeletePartButton;
pub use installations_table::InstallationsTable;
pub use navbar::Navbar;
pub use page::Page;
pub use title::TrackerTitleButton;
