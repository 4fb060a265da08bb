//! Terminal UI: the event loop that wires key presses to the engine and a
//! game view that draws the board, preview marker, and winner highlight.

mod app;
mod game_view;

pub use app::App;
