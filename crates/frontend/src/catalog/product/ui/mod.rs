pub mod calculator;
pub mod list;

pub use calculator::CalculatorPage;
pub use list::ProductsPage;
