pub mod encoding;
pub mod parsed;

pub use encoding::Encoding;
pub use parsed::ParsedBarcode;
