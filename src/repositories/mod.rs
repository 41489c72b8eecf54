mod json_park_repository;
mod traits;

pub use json_park_repository::JsonParkRepository;
pub use traits::ParkRepository;
