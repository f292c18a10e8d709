use std::io;
use svgpath::algorithms::fit::FitStyle;
use svgpath::math::Box2D;
use svgpath::path::{ParseError, Path, SerializerOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid path: {0}")]
    Parse(#[from] ParseError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub struct ParseCmd {
    pub path: Path,
    pub output: Box<dyn io::Write>,
    pub count: bool,
}

pub struct FlattenCmd {
    pub path: Path,
    pub output: Box<dyn io::Write>,
    pub serializer: SerializerOptions,
}

pub struct BoundingBoxCmd {
    pub path: Path,
    pub output: Box<dyn io::Write>,
}

pub struct FitCmd {
    pub path: Path,
    pub output: Box<dyn io::Write>,
    pub rect: Box2D,
    pub style: FitStyle,
    pub serializer: SerializerOptions,
}
