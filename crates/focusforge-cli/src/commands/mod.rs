pub mod config;
pub mod distraction;
pub mod note;
pub mod review;
pub mod settings;
pub mod stats;
pub mod task;
pub mod theme;
pub mod timer;
