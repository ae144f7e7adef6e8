use crate::foundation::core::Rgb8;
use crate::foundation::error::AnimdlResult;
use crate::geometry::primitives::{EdgeList, PolygonList};
use crate::raster::frame::Frame;
use crate::raster::lighting::Lighting;
use crate::script::material::MaterialTable;

/// Visibility-aware rasterization into a [`Frame`].
///
/// Implementations draw already-transformed geometry and mutate the frame in place. They are
/// shared read-only across frame workers, hence `Sync`.
pub trait Rasterizer: Send + Sync {
    /// Shade and scan-convert every triangle of `polys` using the material named `material`.
    fn draw_polygons(
        &self,
        polys: &PolygonList,
        frame: &mut Frame,
        lighting: &Lighting,
        materials: &MaterialTable,
        material: &str,
    ) -> AnimdlResult<()>;

    /// Draw every edge of `edges` in a solid `color`.
    fn draw_lines(&self, edges: &EdgeList, frame: &mut Frame, color: Rgb8) -> AnimdlResult<()>;
}
