pub mod address;
pub mod challenge;
pub mod credential;
pub mod dispatcher;
pub mod error;
pub mod legacy;
pub mod params;
pub mod replay;
pub mod signature;
pub mod ticket;
