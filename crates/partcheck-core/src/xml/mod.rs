pub mod parser;

pub use parser::{check_well_formed, decode, parse, XmlError};
