mod factory;
mod loader;

pub use loader::load_table_from;
