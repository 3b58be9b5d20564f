pub mod mealplan;
pub mod recipe;

pub use mealplan::*;
pub use recipe::*;
