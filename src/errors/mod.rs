/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 28/3/25
 ******************************************************************************/
mod types;

pub use types::EngineError;
