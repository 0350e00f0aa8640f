pub mod mock_speech;
