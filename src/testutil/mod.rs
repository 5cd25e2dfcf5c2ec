pub mod mock_world_state;
pub mod test_constants;
pub mod test_utilities;
