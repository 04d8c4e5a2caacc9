pub mod figure;

pub use figure::render_figure;
