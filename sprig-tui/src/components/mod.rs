pub mod branch_list;
pub mod search_bar;
pub mod status_bar;
