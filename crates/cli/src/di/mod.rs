mod neighbors;
mod use_cases;

pub use use_cases::UseCases;
