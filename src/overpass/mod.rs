pub mod commands;
pub mod document;
pub mod element;
pub mod error;
pub mod text;
