mod check_tests;
mod utils;
