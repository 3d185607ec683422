pub mod chart_modal;
pub mod header;
pub mod notification;
pub mod pages;
pub mod particles;
pub mod placard;
pub mod sidebar;
