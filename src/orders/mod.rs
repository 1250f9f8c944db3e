/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 28/3/25
 ******************************************************************************/
mod base;
mod order;

pub use base::{OrderId, Price, Side};
pub use order::Order;
