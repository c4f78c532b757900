pub mod header;
pub mod upload_area;
pub mod process_panel;
pub mod progress_bar;
