use crate::raster::RasterizeOptions;

/// What happens to the raster buffer between two burns on the same adapter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BufferPolicy {
    /// Zero the buffer before every burn, so each result only shows its own source.
    #[default]
    Reset,
    /// Burn on top of whatever earlier calls left in the buffer.
    Accumulate,
}

/// Which layer of a vector source gets burned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerSelector {
    Index(usize),
    Name(String),
}

impl Default for LayerSelector {
    fn default() -> Self {
        LayerSelector::Index(0)
    }
}

/// Configuration of a [`GridVectors`](crate::grid::GridVectors) adapter.
///
/// ```
/// use gridvectors::grid::{BufferPolicy, GridOptions, LayerSelector};
/// use gridvectors::raster::RasterizeOptions;
///
/// let options = GridOptions {
///     buffer: BufferPolicy::Accumulate,
///     layer: LayerSelector::Name("roads".to_string()),
///     rasterize: RasterizeOptions {
///         all_touched: true,
///         ..Default::default()
///     },
/// };
/// assert_ne!(options, GridOptions::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridOptions {
    pub buffer: BufferPolicy,
    pub layer: LayerSelector,
    pub rasterize: RasterizeOptions,
}
