pub mod action;
pub mod chart;
pub mod controller;
pub mod document;
pub mod render;
pub mod server_list;
