//! Model -> view -> projection -> screen transform for triangles

use super::camera::{Camera, Projection};
use super::math::{Mat4, Vec4};
use super::types::Triangle;

/// Model matrix for the (single) object being rendered. Identity until
/// per-object transforms exist.
pub fn model_matrix() -> Mat4 {
    Mat4::IDENTITY
}

/// Transform a model-space triangle into screen space.
///
/// Each vertex is lifted to homogeneous coordinates, run through
/// `projection * view * model`, perspective-divided, and mapped to pixel
/// coordinates. The output triangle keeps floating-point x/y (the
/// rasterizer samples pixel centers, so no rounding happens here) and the
/// divided z as depth, monotonic with view distance.
///
/// Screen mapping: NDC [-1, 1] to `x' = (x+1)*0.5*width` and
/// `y' = (1-(y+1)*0.5)*height`; y flips because screen space grows
/// downward while NDC grows upward.
///
/// A vertex with `w == 0` sits exactly on the camera's eye plane and has
/// no finite projection; the divide propagates non-finite values. Keeping
/// geometry off the eye plane is the caller's contract, as with the
/// camera preconditions.
pub fn project_triangle(
    triangle: &Triangle,
    camera: &Camera,
    projection: &Projection,
    width: usize,
    height: usize,
) -> Triangle {
    let mvp = projection.matrix() * camera.view_matrix() * model_matrix();

    let mut screen = *triangle;
    for vertex in &mut screen.vertices {
        let clip = mvp.mul_vec4(Vec4::from_point(*vertex));

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let ndc_z = clip.z / clip.w;

        vertex.x = (ndc_x + 1.0) * 0.5 * width as f32;
        vertex.y = (1.0 - (ndc_y + 1.0) * 0.5) * height as f32;
        vertex.z = ndc_z;
    }

    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::math::Vec3;
    use crate::rasterizer::render::is_inside_triangle;
    use crate::rasterizer::types::FillRule;
    use crate::rasterizer::{HEIGHT, WIDTH};

    fn scenario() -> (Triangle, Camera, Projection) {
        let triangle = Triangle::new(
            Vec3::new(502.0, 3.0, 200.0),
            Vec3::new(381.0, 242.0, 300.0),
            Vec3::new(119.0, 113.0, 400.0),
        );
        let camera = Camera::new(
            Vec3::new(334.0, 119.0, 0.0),
            Vec3::new(334.0, 119.0, 300.0),
            Vec3::UP,
        );
        let projection =
            Projection::with_fov_degrees(60.0, WIDTH as f32 / HEIGHT as f32, 1.0, 1000.0);
        (triangle, camera, projection)
    }

    #[test]
    fn test_scenario_screen_coordinates() {
        let (triangle, camera, projection) = scenario();
        let screen = project_triangle(&triangle, &camera, &projection, WIDTH, HEIGHT);

        for v in &screen.vertices {
            assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
        }

        // Second and third vertices land inside the viewport at known spots.
        let v1 = screen.vertices[1];
        assert!((v1.x - 318.59).abs() < 0.05, "v1.x = {}", v1.x);
        assert!((v1.y - 86.96).abs() < 0.05, "v1.y = {}", v1.y);

        let v2 = screen.vertices[2];
        assert!((v2.x - 679.29).abs() < 0.05, "v2.x = {}", v2.x);
        assert!((v2.y - 307.79).abs() < 0.05, "v2.y = {}", v2.y);
    }

    #[test]
    fn test_scenario_centroid_is_visible_and_covered() {
        let (triangle, camera, projection) = scenario();
        let screen = project_triangle(&triangle, &camera, &projection, WIDTH, HEIGHT);

        let centroid = screen.centroid();
        assert!(centroid.x >= 0.0 && centroid.x < WIDTH as f32);
        assert!(centroid.y >= 0.0 && centroid.y < HEIGHT as f32);

        assert!(is_inside_triangle(centroid, &screen, FillRule::EdgeFunction));
        assert!(is_inside_triangle(centroid, &screen, FillRule::Barycentric));
    }

    #[test]
    fn test_scenario_depth_is_in_ndc_range_and_ordered() {
        let (triangle, camera, projection) = scenario();
        let screen = project_triangle(&triangle, &camera, &projection, WIDTH, HEIGHT);

        let [a, b, c] = screen.vertices;
        for v in [a, b, c] {
            assert!(v.z > -1.0 && v.z < 1.0, "depth out of range: {}", v.z);
        }
        // Model-space z was 200 / 300 / 400 away from the camera; the
        // retained depth must preserve that ordering.
        assert!(a.z < b.z && b.z < c.z);
    }

    #[test]
    fn test_screen_y_flips_world_y() {
        let (triangle, camera, projection) = scenario();
        let screen = project_triangle(&triangle, &camera, &projection, WIDTH, HEIGHT);

        // Vertex 1 is the highest in world space (y = 242), so it must end
        // up topmost on screen, i.e. with the smallest screen y.
        assert!(screen.vertices[1].y < screen.vertices[0].y);
        assert!(screen.vertices[1].y < screen.vertices[2].y);
    }

    #[test]
    fn test_triangle_at_target_depth_stays_in_viewport() {
        let (_, camera, projection) = scenario();
        // A small triangle centered on the look-at target.
        let triangle = Triangle::new(
            Vec3::new(314.0, 99.0, 300.0),
            Vec3::new(354.0, 99.0, 300.0),
            Vec3::new(334.0, 139.0, 300.0),
        );
        let screen = project_triangle(&triangle, &camera, &projection, WIDTH, HEIGHT);
        for v in &screen.vertices {
            assert!(v.x >= 0.0 && v.x < WIDTH as f32);
            assert!(v.y >= 0.0 && v.y < HEIGHT as f32);
        }
    }
}
