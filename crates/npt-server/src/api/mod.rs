// HTTP API handlers
// Each submodule exposes its handlers plus a `route` module that mounts them

pub mod health;
pub mod npt;
