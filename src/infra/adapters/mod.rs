pub mod lens;

pub use lens::LensQueryAdapter;
