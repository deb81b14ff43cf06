pub mod params;
pub mod schema;
pub mod vitals;
