pub mod config_helper;
