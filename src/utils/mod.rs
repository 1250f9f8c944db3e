/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 28/3/25
 ******************************************************************************/
mod logger;

pub use logger::setup_logger;
