mod central_panel;
mod inspector_panel;
mod page_list;
mod toolbar;

pub use central_panel::central_panel;
pub use inspector_panel::inspector_panel;
pub use page_list::page_list;
pub use toolbar::toolbar;
