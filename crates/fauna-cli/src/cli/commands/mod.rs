mod fetch;
mod generate;
mod values;

pub use fetch::run_fetch;
pub use generate::run_generate;
pub use values::run_values;
