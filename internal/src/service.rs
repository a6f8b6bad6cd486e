pub mod source_service;
