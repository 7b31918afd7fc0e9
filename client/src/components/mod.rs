pub mod chat_panel;
pub mod domain_panel;
pub mod editor_panel;
pub mod notice_stack;
pub mod preview_panel;
pub mod toolbar;
