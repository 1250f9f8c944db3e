/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 28/3/25
 ******************************************************************************/
mod engine;
mod level;
mod side;

pub use engine::OrderBook;
pub use level::PriceLevel;
pub use side::BookSide;
