// HRIS login proxy endpoint
// Policy selection and upstream handling live in the npt-auth crate

pub mod login;
pub mod route;
