pub mod api;
pub mod commands;
pub mod html;
pub mod interactive;
pub mod puzzle;
pub mod registry;
pub mod template;
