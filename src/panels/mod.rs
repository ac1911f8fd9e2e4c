pub mod canvas_panel;
pub mod menu_bar;
pub mod status_bar;

pub use canvas_panel::canvas_panel;
pub use menu_bar::menu_bar;
pub use status_bar::status_bar;
