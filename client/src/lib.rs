mod app;
mod dom;
mod export;
mod state;
mod stroke;
mod surface;
mod tokens;

pub use app::run;
