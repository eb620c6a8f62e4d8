pub mod render;

pub use self::render::RenderService;
