// NPT (non-productive time) entry endpoints

pub mod entry;
pub mod route;
