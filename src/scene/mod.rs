pub mod clock;
pub mod config;
pub mod context;
pub mod render_loop;
pub mod story;
