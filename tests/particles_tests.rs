// Host-side tests for the particle cloud, its motion and the camera.

use folio_core::particles::*;
use folio_core::*;
use glam::{Vec3, Vec4Swizzles};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn cloud_has_requested_count_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let pts = generate_cloud(&mut rng, PARTICLE_COUNT, PARTICLE_SPREAD);
    assert_eq!(pts.len(), 1500);
    let half = PARTICLE_SPREAD * 0.5;
    for p in &pts {
        assert!(p.abs().max_element() <= half, "{:?} outside cube", p);
    }
    // Spread across the whole cube, not bunched at the centre.
    let max = pts.iter().fold(Vec3::ZERO, |m, p| m.max(p.abs()));
    assert!(max.min_element() > half * 0.9);
}

#[test]
fn cloud_generation_is_seedable() {
    let a = generate_cloud(&mut StdRng::seed_from_u64(1), 16, 15.0);
    let b = generate_cloud(&mut StdRng::seed_from_u64(1), 16, 15.0);
    assert_eq!(a, b);
}

#[test]
fn idle_motion_spins_slowly() {
    let mut m = CloudMotion::default();
    m.step(10.0, 0.0, PointerState::default());
    // Base yaw 0.5, then the pointer (at centre) pulls 5% back toward 0.
    assert!(close(m.rotation.y, 0.5 * 0.95));
    assert!(close(m.rotation.x, 0.0));
    assert_eq!(m.camera_y, 0.0);
}

#[test]
fn scroll_drives_rotation_and_camera() {
    let mut m = CloudMotion::default();
    m.step(0.0, 1000.0, PointerState::default());
    assert!(close(m.rotation.x, 0.2 * 0.95));
    assert!(close(m.rotation.y, 0.2 * 0.95));
    assert!(close(m.camera_y, -1.0));

    let mut cam = Camera::new(1.0);
    m.apply_to_camera(&mut cam);
    assert!(close(cam.position.y, -1.0));
    assert!(close(cam.position.z, CAMERA_Z));
}

#[test]
fn pointer_pulls_rotation_toward_target() {
    let mut m = CloudMotion::default();
    let pointer = PointerState { x: 0.5, y: -0.5 };
    m.step(0.0, 0.0, pointer);
    // Targets: x from pointer.y * 0.5, y from pointer.x * 0.5.
    assert!(close(m.rotation.x, 0.05 * -0.25));
    assert!(close(m.rotation.y, 0.05 * 0.25));
}

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(capped_pixel_ratio(3.0), 2.0);
    assert_eq!(capped_pixel_ratio(2.0), 2.0);
    assert_eq!(capped_pixel_ratio(1.5), 1.5);
}

#[test]
fn zoomed_out_pixel_ratio_is_not_raised() {
    assert_eq!(capped_pixel_ratio(0.67), 0.67);
    assert_eq!(capped_pixel_ratio(0.5), 0.5);
}

#[test]
fn unusable_pixel_ratio_falls_back_to_one() {
    assert_eq!(capped_pixel_ratio(0.0), 1.0);
    assert_eq!(capped_pixel_ratio(-1.0), 1.0);
    assert_eq!(capped_pixel_ratio(f64::NAN), 1.0);
}

#[test]
fn camera_projection_follows_aspect() {
    let mut cam = Camera::new(1.0);
    cam.set_viewport(1600.0, 800.0);
    assert!(close(cam.aspect, 2.0));
    cam.set_viewport(0.0, 800.0);
    assert!(close(cam.aspect, 2.0));

    // A point on the view axis in front of the camera projects to the centre.
    let clip = cam.projection_matrix() * cam.view_matrix() * Vec3::new(0.0, 0.0, 0.0).extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(close(ndc.x, 0.0) && close(ndc.y, 0.0));
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn uniforms_carry_colour_opacity_and_size() {
    let cam = Camera::new(1.5);
    let u = ParticleUniforms::new(&cam, &CloudMotion::default(), [1200.0, 800.0]);
    let [r, g, b] = particle_rgb();
    assert_eq!(u.color, [r, g, b, 0.6]);
    assert_eq!(u.point_size, PARTICLE_SIZE);
    assert_eq!(u.viewport, [1200.0, 800.0]);
    // 4x4 + 4x4 + 4 + 2 + 2 floats.
    assert_eq!(std::mem::size_of::<ParticleUniforms>(), 40 * 4);
    assert_eq!(bytemuck::bytes_of(&u).len(), 160);
}

#[test]
fn point_size_attenuates_with_depth() {
    assert!(close(point_size_px(0.03, 800.0, 4.0), 3.0));
    assert!(close(point_size_px(0.03, 800.0, 8.0), 1.5));
    assert_eq!(point_size_px(0.03, 800.0, 0.0), 0.0);
}

#[test]
fn shader_source_has_both_entry_points() {
    assert!(PARTICLES_WGSL.contains("fn vs_main"));
    assert!(PARTICLES_WGSL.contains("fn fs_main"));
}
