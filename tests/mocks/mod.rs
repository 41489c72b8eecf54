//! Shared mocks for integration tests.

pub mod mock_park_repository;

pub use mock_park_repository::MockParkRepository;
