pub mod generator_service;
pub mod section_service;
pub mod feed_service;
pub mod render_service;
