use rayon::prelude::*;

use crate::{
    foundation::core::Vec2,
    foundation::error::{SwellError, SwellResult},
    ocean::wave::WaveField,
};

/// A flat, axis-aligned vertex grid in the xz plane.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    pub width: f64,
    pub depth: f64,
    pub segments_x: u32,
    pub segments_z: u32,
    pub center: Vec2,
}

impl GridSpec {
    /// The water box top: 60 x 60 with 128 segments each way.
    pub fn water_box() -> Self {
        Self {
            width: 60.0,
            depth: 60.0,
            segments_x: 128,
            segments_z: 128,
            center: Vec2::ZERO,
        }
    }

    pub fn validate(&self) -> SwellResult<()> {
        if !(self.width.is_finite() && self.width > 0.0 && self.depth.is_finite() && self.depth > 0.0)
        {
            return Err(SwellError::validation(
                "grid width/depth must be finite and > 0",
            ));
        }
        if self.segments_x == 0 || self.segments_z == 0 {
            return Err(SwellError::validation("grid segments must be > 0"));
        }
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.segments_x as usize + 1
    }

    pub fn rows(&self) -> usize {
        self.segments_z as usize + 1
    }

    /// World xz of vertex `(col, row)`; row 0 is the -z edge.
    pub fn vertex(&self, col: usize, row: usize) -> Vec2 {
        let fx = col as f64 / f64::from(self.segments_x);
        let fz = row as f64 / f64::from(self.segments_z);
        Vec2::new(
            self.center.x + (fx - 0.5) * self.width,
            self.center.y + (fz - 0.5) * self.depth,
        )
    }
}

/// Heights sampled at every vertex of a [`GridSpec`], row-major.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeightGrid {
    pub spec: GridSpec,
    pub time: f64,
    pub heights: Vec<f64>,
}

impl HeightGrid {
    #[tracing::instrument(skip(field), fields(columns = spec.columns(), rows = spec.rows()))]
    pub fn sample(field: &WaveField, spec: GridSpec, time: f64) -> SwellResult<Self> {
        spec.validate()?;
        let columns = spec.columns();
        let len = columns
            .checked_mul(spec.rows())
            .ok_or_else(|| SwellError::validation("grid has too many vertices"))?;
        let heights = (0..len)
            .into_par_iter()
            .map(|i| {
                let p = spec.vertex(i % columns, i / columns);
                field.height(p.x, p.y, time)
            })
            .collect();
        Ok(Self {
            spec,
            time,
            heights,
        })
    }

    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.spec.columns() {
            return None;
        }
        self.heights.get(row * self.spec.columns() + col).copied()
    }

    /// Min and max over all finite samples.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.heights
            .iter()
            .copied()
            .filter(|h| h.is_finite())
            .fold(None, |acc, h| match acc {
                None => Some((h, h)),
                Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
            })
    }

    /// 8-bit heightmap mapping `[-amplitude, amplitude]` to `[0, 255]`.
    pub fn to_image(&self, amplitude: f64) -> SwellResult<image::GrayImage> {
        if !(amplitude.is_finite() && amplitude > 0.0) {
            return Err(SwellError::validation(
                "heightmap amplitude must be finite and > 0",
            ));
        }
        let width = u32::try_from(self.spec.columns())
            .map_err(|_| SwellError::validation("grid too wide for an image"))?;
        let height = u32::try_from(self.spec.rows())
            .map_err(|_| SwellError::validation("grid too deep for an image"))?;

        Ok(image::GrayImage::from_fn(width, height, |x, y| {
            let h = self.get(x as usize, y as usize).unwrap_or(0.0);
            let unit = ((h / amplitude) * 0.5 + 0.5).clamp(0.0, 1.0);
            image::Luma([(unit * 255.0).round() as u8])
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ocean/mesh.rs"]
mod tests;
