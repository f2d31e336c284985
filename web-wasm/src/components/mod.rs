pub mod header;
pub mod search_form;
pub mod loading;
pub mod error_banner;
pub mod step_box;
pub mod step_results;
pub mod shop_selection;
pub mod detail_panels;
pub mod summary_table;
