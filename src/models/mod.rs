pub mod region;
pub mod person;
pub mod economy;
pub mod pluvial;
pub mod message;
pub mod cep;

pub use region::{Region, RegionsReport, ViewMode};
pub use person::{Address, Gender, LoginRequest, LoginResponse, Person};
pub use economy::{Connection, EconomyRequest, EconomyResult};
pub use pluvial::PluvialEconomy;
pub use message::{Message, NewMessage, Reply};
pub use cep::CepAddress;
