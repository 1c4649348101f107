mod document_cache_tests;
mod utils;
