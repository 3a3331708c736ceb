pub mod mock_classifier;
