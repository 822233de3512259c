pub mod result_list;
pub mod results_header;
pub mod results_map;
pub mod tag_filter_panel;
