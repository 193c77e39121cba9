pub mod category;
pub mod cell;
pub mod comparison;
pub mod day_record;
pub mod station_metadata;
