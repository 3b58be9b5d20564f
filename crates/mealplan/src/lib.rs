mod calendar;
mod error;
mod food_option;
mod view;

pub use calendar::*;
pub use error::*;
pub use food_option::*;
pub use view::*;
