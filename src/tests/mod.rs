mod config_io_tests;
mod dispatch_tests;
