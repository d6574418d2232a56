use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The container leaves no room for a tooltip once both margins are taken out.
    #[error("container width {container_width} leaves no room for a tooltip with margin {margin}")]
    InvalidLayout { container_width: f32, margin: f32 },

    #[error("style parameter `{parameter}` expects a {expected}")]
    StyleType {
        parameter: &'static str,
        expected: &'static str,
    },

    #[error("unknown style parameter `{0}`")]
    UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
