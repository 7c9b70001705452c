//! Perspective 3D surface plot of a wave field.
//!
//! The mesh lives in a box spanning x, y in [-1, 1] and the fixed vertical
//! data range [-SURFACE_Z_LIMIT, SURFACE_Z_LIMIT], squashed to
//! `SURFACE_BOX_ASPECT_Z` in world units. Back panes are painted first; the
//! surface is then rasterized with a depth buffer so it self-occludes
//! correctly from any orbit angle.

use super::canvas::{Canvas, WHITE};
use crate::colormap::{ColorMap, Normalize};
use crate::constants::*;
use crate::error::Result;
use crate::field::WaveField;
use crate::state::CameraOrientation;
use glam::{Mat4, Vec2, Vec3, Vec4};
use image::{Rgba, RgbaImage};

const PANE_FILL: Rgba<u8> = Rgba([242, 242, 242, 255]);
const PANE_EDGE: Rgba<u8> = Rgba([170, 170, 170, 255]);
const PANE_GRID: Rgba<u8> = Rgba([222, 222, 222, 255]);
const VIEWPORT_FILL: f32 = 0.95;
const SHADE_AMBIENT: f32 = 0.6;

/// Render `field` as a shaded surface seen from `camera`.
pub fn render_surface(
    field: &WaveField,
    camera: &CameraOrientation,
    colormap: ColorMap,
    width: u32,
    height: u32,
) -> Result<RgbaImage> {
    let mut plot = SurfacePlot::new(width, height, camera)?;
    plot.draw_panes(camera);
    plot.draw_mesh(field, colormap);
    Ok(plot.finish())
}

/// Per-call plotting context: canvas, depth buffer and projection.
struct SurfacePlot {
    canvas: Canvas,
    depth: Vec<f32>,
    view_proj: Mat4,
    origin: Vec2,
    side: f32,
}

impl SurfacePlot {
    fn new(width: u32, height: u32, camera: &CameraOrientation) -> Result<Self> {
        let canvas = Canvas::new(width, height, WHITE)?;
        let side = width.min(height) as f32 * VIEWPORT_FILL;
        let origin = Vec2::new(
            (width as f32 - side) * 0.5,
            (height as f32 - side) * 0.5,
        );
        let proj = Mat4::perspective_rh(SURFACE_FOV_Y_DEG.to_radians(), 1.0, 0.1, 100.0);
        let view = camera.view_matrix(SURFACE_CAMERA_DISTANCE);
        Ok(Self {
            canvas,
            depth: vec![f32::INFINITY; (width * height) as usize],
            view_proj: proj * view,
            origin,
            side,
        })
    }

    /// World position to (screen x, screen y, ndc depth).
    fn project(&self, p: Vec3) -> Option<Vec3> {
        let clip = self.view_proj * Vec4::new(p.x, p.y, p.z, 1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec3::new(
            self.origin.x + (ndc.x + 1.0) * 0.5 * self.side,
            self.origin.y + (1.0 - ndc.y) * 0.5 * self.side,
            ndc.z,
        ))
    }

    fn draw_panes(&mut self, camera: &CameraOrientation) {
        let eye = camera.eye_direction();
        let hz = SURFACE_BOX_ASPECT_Z;
        let xb = if eye.x >= 0.0 { -1.0 } else { 1.0 };
        let yb = if eye.y >= 0.0 { -1.0 } else { 1.0 };
        let zb = if eye.z >= 0.0 { -hz } else { hz };

        let panes = [
            [
                Vec3::new(xb, -1.0, -hz),
                Vec3::new(xb, 1.0, -hz),
                Vec3::new(xb, 1.0, hz),
                Vec3::new(xb, -1.0, hz),
            ],
            [
                Vec3::new(-1.0, yb, -hz),
                Vec3::new(1.0, yb, -hz),
                Vec3::new(1.0, yb, hz),
                Vec3::new(-1.0, yb, hz),
            ],
            [
                Vec3::new(-1.0, -1.0, zb),
                Vec3::new(1.0, -1.0, zb),
                Vec3::new(1.0, 1.0, zb),
                Vec3::new(-1.0, 1.0, zb),
            ],
        ];
        for quad in &panes {
            self.fill_quad(quad, PANE_FILL, false);
        }

        // Grid at the half-ticks of each axis.
        for t in [-0.5f32, 0.0, 0.5] {
            let z = t * hz;
            self.line3(Vec3::new(xb, -1.0, z), Vec3::new(xb, 1.0, z), PANE_GRID);
            self.line3(Vec3::new(-1.0, yb, z), Vec3::new(1.0, yb, z), PANE_GRID);
            self.line3(Vec3::new(xb, t, -hz), Vec3::new(xb, t, hz), PANE_GRID);
            self.line3(Vec3::new(t, yb, -hz), Vec3::new(t, yb, hz), PANE_GRID);
            self.line3(Vec3::new(t, -1.0, zb), Vec3::new(t, 1.0, zb), PANE_GRID);
            self.line3(Vec3::new(-1.0, t, zb), Vec3::new(1.0, t, zb), PANE_GRID);
        }

        for quad in &panes {
            for i in 0..4 {
                self.line3(quad[i], quad[(i + 1) % 4], PANE_EDGE);
            }
        }
    }

    fn draw_mesh(&mut self, field: &WaveField, colormap: ColorMap) {
        let (rows, cols) = (field.rows(), field.cols());
        if rows < 2 || cols < 2 {
            return;
        }
        let norm = Normalize::new(field.min(), field.max());
        let world = |r: usize, c: usize| {
            Vec3::new(
                field.x_at(c) as f32,
                field.y_at(r) as f32,
                field.get(r, c) as f32 / SURFACE_Z_LIMIT * SURFACE_BOX_ASPECT_Z,
            )
        };
        let projected: Vec<Option<Vec3>> = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| self.project(world(r, c)))
            .collect();
        let light = Vec3::new(-1.0, -1.0, 1.0).normalize();

        for r in 0..rows - 1 {
            for c in 0..cols - 1 {
                let idx = [(r, c), (r, c + 1), (r + 1, c + 1), (r + 1, c)];
                let screen = idx.map(|(rr, cc)| projected[rr * cols + cc]);
                let [Some(s0), Some(s1), Some(s2), Some(s3)] = screen else {
                    continue;
                };

                let mean = idx.iter().map(|&(rr, cc)| field.get(rr, cc)).sum::<f64>() / 4.0;
                let base = colormap.sample(norm.apply(mean));

                let w = idx.map(|(rr, cc)| world(rr, cc));
                let normal = (w[2] - w[0]).cross(w[1] - w[3]).normalize_or_zero();
                let shade = SHADE_AMBIENT + (1.0 - SHADE_AMBIENT) * normal.dot(light).abs();
                let color = Rgba([
                    (base[0] as f32 * shade) as u8,
                    (base[1] as f32 * shade) as u8,
                    (base[2] as f32 * shade) as u8,
                    255,
                ]);

                self.fill_triangle([s0, s1, s2], color, true);
                self.fill_triangle([s0, s2, s3], color, true);
            }
        }
    }

    fn fill_quad(&mut self, quad: &[Vec3; 4], color: Rgba<u8>, depth_test: bool) {
        let screen = quad.map(|p| self.project(p));
        if let [Some(a), Some(b), Some(c), Some(d)] = screen {
            self.fill_triangle([a, b, c], color, depth_test);
            self.fill_triangle([a, c, d], color, depth_test);
        }
    }

    fn line3(&mut self, a: Vec3, b: Vec3, color: Rgba<u8>) {
        if let (Some(pa), Some(pb)) = (self.project(a), self.project(b)) {
            self.canvas.line(
                pa.x.round() as i32,
                pa.y.round() as i32,
                pb.x.round() as i32,
                pb.y.round() as i32,
                color,
            );
        }
    }

    /// Edge-function rasterizer sampling pixel centers. With `depth_test`
    /// the nearer fragment wins and depth is written; otherwise the triangle
    /// is painted over whatever is there.
    fn fill_triangle(&mut self, v: [Vec3; 3], color: Rgba<u8>, depth_test: bool) {
        let area = edge(v[0], v[1], v[2].truncate());
        if area.abs() < 1e-9 {
            return;
        }
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let min_x = v.iter().map(|p| p.x).fold(f32::INFINITY, f32::min).floor().max(0.0) as i32;
        let max_x = v.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max).ceil().min((w - 1) as f32) as i32;
        let min_y = v.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor().max(0.0) as i32;
        let max_y = v.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).ceil().min((h - 1) as f32) as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let l0 = edge(v[1], v[2], p) / area;
                let l1 = edge(v[2], v[0], p) / area;
                let l2 = edge(v[0], v[1], p) / area;
                if l0 < 0.0 || l1 < 0.0 || l2 < 0.0 {
                    continue;
                }
                if depth_test {
                    let z = l0 * v[0].z + l1 * v[1].z + l2 * v[2].z;
                    let slot = (y * w + x) as usize;
                    if z >= self.depth[slot] {
                        continue;
                    }
                    self.depth[slot] = z;
                }
                self.canvas.put(x, y, color);
            }
        }
    }

    fn finish(self) -> RgbaImage {
        self.canvas.into_image()
    }
}

#[inline]
fn edge(a: Vec3, b: Vec3, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldParams;
    use crate::error::CymaticsError;

    fn flat_field() -> WaveField {
        WaveField::generate(0.0, 0, &FieldParams::default())
    }

    #[test]
    fn output_matches_requested_size() {
        let img = render_surface(&flat_field(), &CameraOrientation::default(), ColorMap::Viridis, 320, 200)
            .unwrap();
        assert_eq!(img.dimensions(), (320, 200));
    }

    #[test]
    fn zero_area_is_a_render_failure() {
        let err = render_surface(&flat_field(), &CameraOrientation::default(), ColorMap::Viridis, 0, 480)
            .unwrap_err();
        assert!(matches!(err, CymaticsError::InvalidDimensions { .. }));
    }

    #[test]
    fn surface_covers_the_look_at_point_in_map_colors() {
        let field = flat_field();
        let cam = CameraOrientation::default();
        let viridis = render_surface(&field, &cam, ColorMap::Viridis, 640, 480).unwrap();
        let plasma = render_surface(&field, &cam, ColorMap::Plasma, 640, 480).unwrap();
        let center_v = *viridis.get_pixel(320, 240);
        let center_p = *plasma.get_pixel(320, 240);
        assert_ne!(center_v, WHITE);
        assert_ne!(center_v, center_p);
    }

    #[test]
    fn survives_camera_past_the_pole() {
        let cam = CameraOrientation {
            elevation_deg: 90.0,
            azimuth_deg: -720.0,
        };
        let img = render_surface(&flat_field(), &cam, ColorMap::Inferno, 200, 200).unwrap();
        assert_ne!(*img.get_pixel(100, 100), WHITE);
    }
}
