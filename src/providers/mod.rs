pub mod vimeo;
pub mod youtube;

pub use vimeo::VimeoProvider;
pub use youtube::YouTubeProvider;
