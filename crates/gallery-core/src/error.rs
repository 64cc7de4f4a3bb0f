use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("cell index {index} out of range (gallery has {len} cells)")]
    CellOutOfRange { index: usize, len: usize },
    #[error("got {surfaces} surfaces for {cells} cells")]
    SurfaceMismatch { cells: usize, surfaces: usize },
}
