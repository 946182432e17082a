pub mod contract;
pub mod params;
