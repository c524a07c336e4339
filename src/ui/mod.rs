//! UI module - reusable widgets for the shell views

pub mod components;
