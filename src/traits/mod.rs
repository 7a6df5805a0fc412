pub mod completion_provider;
