// Library surface for the game engine, its ports, and headless/integration tests.
// The terminal widget lives in the binary (main.rs / ui).
pub mod app_dirs;
pub mod celebration;
pub mod clock;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod history;
pub mod input;
pub mod logging;
pub mod presenter;
pub mod progress;
pub mod rng;
pub mod round;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod timer;
