pub mod converter_controller;
pub mod object_controller;
