pub mod omm;
pub mod prelude;
pub mod time;
pub mod tle;
