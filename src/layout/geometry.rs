//! Placement functions, one per layout.
//!
//! Each takes `(index, total)` and is pure: the same arguments always give a
//! bit-identical [`Transform`].

use std::f32::consts::PI;

use glam::{EulerRot, Mat3, Quat, Vec3};

use super::Transform;

/// Items per table row.
pub const TABLE_COLUMNS: usize = 20;
/// Horizontal spacing between table columns.
pub const TABLE_COLUMN_SPACING: f32 = 140.0;
/// Vertical spacing between table rows.
pub const TABLE_ROW_SPACING: f32 = 180.0;
/// Radius of the sphere layout.
pub const SPHERE_RADIUS: f32 = 800.0;
/// Radius of the helix layout.
pub const HELIX_RADIUS: f32 = 900.0;
/// Vertical drop per item along a helix strand.
pub const HELIX_RISE: f32 = 12.0;
/// Grid cell spacing within a slab.
pub const GRID_SPACING: f32 = 400.0;
/// Distance between grid slabs along z.
pub const GRID_SLAB_SPACING: f32 = 1000.0;

const GRID_COLUMNS: usize = 5;
const GRID_ROWS: usize = 4;

/// Table layout: 20 columns, rows growing downward, no rotation.
#[must_use]
pub fn table(index: usize, _total: usize) -> Transform {
    let column = (index % TABLE_COLUMNS) as f32;
    let row = (index / TABLE_COLUMNS) as f32;
    Transform::at(Vec3::new(
        column * TABLE_COLUMN_SPACING - 1330.0,
        -row * TABLE_ROW_SPACING + 990.0,
        0.0,
    ))
}

/// Sphere layout: evenly spread polar angle, spiralling azimuth, each item
/// facing away from the center.
#[must_use]
pub fn sphere(index: usize, total: usize) -> Transform {
    let total_f = total.max(1) as f32;
    let phi = (-1.0 + (2.0 * index as f32) / total_f).clamp(-1.0, 1.0).acos();
    let theta = (total_f * PI).sqrt() * phi;
    let position = from_spherical(SPHERE_RADIUS, phi, theta);
    Transform {
        position,
        orientation: look_at(position, position * 2.0),
    }
}

/// Helix layout: the first `total / 2` items wind one strand, the rest wind a
/// second strand restarting at the top with a tighter angular step. Items
/// face outward from the helix axis.
#[must_use]
pub fn helix(index: usize, total: usize) -> Transform {
    let half = total / 2;
    let (theta, y) = if index < half {
        (index as f32 * 0.2 + PI, -(index as f32 * HELIX_RISE) + 500.0)
    } else {
        let j = (index - half) as f32;
        (-(index as f32) * 0.175 + PI, -(j * HELIX_RISE) + 500.0)
    };
    let position = from_cylindrical(HELIX_RADIUS, theta, y);
    let outward = Vec3::new(position.x * 2.0, position.y, position.z * 2.0);
    Transform {
        position,
        orientation: look_at(position, outward),
    }
}

/// Grid layout: 5 x 4 slabs of 20 items, one slab per 1000 units of depth.
#[must_use]
pub fn grid(index: usize, _total: usize) -> Transform {
    let column = (index % GRID_COLUMNS) as f32;
    let row = ((index / GRID_COLUMNS) % GRID_ROWS) as f32;
    let slab = (index / (GRID_COLUMNS * GRID_ROWS)) as f32;
    Transform::at(Vec3::new(
        column * GRID_SPACING - 800.0,
        -row * GRID_SPACING + 800.0,
        slab * GRID_SLAB_SPACING - 2000.0,
    ))
}

/// Y-up spherical coordinates: `phi` from +Y, `theta` around Y from +Z.
fn from_spherical(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let sin_phi_radius = phi.sin() * radius;
    Vec3::new(
        sin_phi_radius * theta.sin(),
        phi.cos() * radius,
        sin_phi_radius * theta.cos(),
    )
}

/// Y-up cylindrical coordinates: `theta` around Y from +Z.
fn from_cylindrical(radius: f32, theta: f32, y: f32) -> Vec3 {
    Vec3::new(radius * theta.sin(), y, radius * theta.cos())
}

/// Euler XYZ rotation that points local +Z from `eye` toward `target` with
/// +Y as the up hint.
fn look_at(eye: Vec3, target: Vec3) -> Vec3 {
    let up = Vec3::Y;
    let mut z = target - eye;
    if z.length_squared() == 0.0 {
        z.z = 1.0;
    }
    z = z.normalize();

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        // Looking straight along the up axis: nudge off it.
        if up.z.abs() == 1.0 {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    x = x.normalize();
    let y = z.cross(x);

    let (rx, ry, rz) =
        Quat::from_mat3(&Mat3::from_cols(x, y, z)).to_euler(EulerRot::XYZ);
    Vec3::new(rx, ry, rz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f32) {
        assert!((a - b).length() < eps, "{a} != {b} (eps {eps})");
    }

    #[test]
    fn table_first_row() {
        assert_eq!(table(0, 3).position, Vec3::new(-1330.0, 990.0, 0.0));
        assert_eq!(table(1, 3).position, Vec3::new(-1190.0, 990.0, 0.0));
        assert_eq!(table(2, 3).position, Vec3::new(-1050.0, 990.0, 0.0));
        assert_eq!(table(19, 40).position, Vec3::new(1330.0, 990.0, 0.0));
    }

    #[test]
    fn table_wraps_every_twenty() {
        let t = table(20, 40);
        assert_eq!(t.position, Vec3::new(-1330.0, 810.0, 0.0));
        assert_eq!(t.orientation, Vec3::ZERO);
    }

    #[test]
    fn table_is_a_bijection() {
        let total = 137;
        let mut seen = std::collections::HashSet::new();
        for i in 0..total {
            let p = table(i, total).position;
            let column =
                ((p.x + 1330.0) / TABLE_COLUMN_SPACING).round() as usize;
            let row = ((990.0 - p.y) / TABLE_ROW_SPACING).round() as usize;
            assert_eq!(column, i % 20);
            assert_eq!(row, i / 20);
            assert!(seen.insert((column, row)), "index {i} collides");
        }
    }

    #[test]
    fn sphere_positions_lie_on_radius() {
        for total in [1, 2, 3, 10, 97, 200] {
            for i in 0..total {
                let len = sphere(i, total).position.length();
                assert!(
                    (len - SPHERE_RADIUS).abs() < 1e-3,
                    "index {i}/{total}: |p| = {len}"
                );
            }
        }
    }

    #[test]
    fn sphere_items_face_outward() {
        let total = 50;
        for i in 0..total {
            let t = sphere(i, total);
            assert_vec_close(t.facing(), t.position.normalize(), 1e-3);
        }
    }

    #[test]
    fn sphere_first_item_sits_at_south_pole() {
        let p = sphere(0, 10).position;
        assert_vec_close(p, Vec3::new(0.0, -SPHERE_RADIUS, 0.0), 1e-3);
    }

    #[test]
    fn helix_first_strand() {
        // total = 10 -> half = 5; index 3 is on the first strand.
        let t = helix(3, 10);
        let theta = 3.0 * 0.2 + PI;
        assert_vec_close(
            t.position,
            Vec3::new(900.0 * theta.sin(), 464.0, 900.0 * theta.cos()),
            1e-3,
        );
    }

    #[test]
    fn helix_second_strand_restarts_at_top() {
        // index 5 is the first item of the second strand: y restarts at 500.
        let t = helix(5, 10);
        let theta = -5.0 * 0.175 + PI;
        assert_vec_close(
            t.position,
            Vec3::new(900.0 * theta.sin(), 500.0, 900.0 * theta.cos()),
            1e-3,
        );
        assert_eq!(helix(0, 10).position.y, helix(5, 10).position.y);
        assert_eq!(helix(4, 10).position.y, helix(9, 10).position.y);
        assert_eq!(helix(9, 10).position.y, 452.0);
    }

    #[test]
    fn helix_items_face_away_from_axis() {
        let total = 30;
        for i in 0..total {
            let t = helix(i, total);
            let horizontal = Vec3::new(t.position.x, 0.0, t.position.z);
            assert!((horizontal.length() - HELIX_RADIUS).abs() < 1e-2);
            assert_vec_close(t.facing(), horizontal.normalize(), 1e-3);
        }
    }

    #[test]
    fn grid_slabs_depend_only_on_index_div_twenty() {
        let total = 400;
        for i in 0..20 {
            assert_eq!(grid(i, total).position.z, -2000.0);
        }
        let last_slab = (380 / 20) as f32 * 1000.0 - 2000.0;
        for i in 380..400 {
            assert_eq!(grid(i, total).position.z, last_slab);
        }
    }

    #[test]
    fn grid_cells_within_slab() {
        assert_eq!(grid(0, 20).position, Vec3::new(-800.0, 800.0, -2000.0));
        assert_eq!(grid(4, 20).position, Vec3::new(800.0, 800.0, -2000.0));
        assert_eq!(grid(5, 20).position, Vec3::new(-800.0, 400.0, -2000.0));
        assert_eq!(grid(19, 20).position, Vec3::new(800.0, -400.0, -2000.0));
        assert_eq!(grid(21, 40).position, Vec3::new(-400.0, 800.0, -1000.0));
        assert_eq!(grid(21, 40).orientation, Vec3::ZERO);
    }

    #[test]
    fn look_at_keeps_the_side_axis_level() {
        for dir in [
            Vec3::new(1.0, 0.5, -2.0),
            Vec3::new(-3.0, -1.0, 0.2),
            Vec3::new(0.0, 0.9, 1.0),
            Vec3::new(0.7, -0.2, -0.1),
        ] {
            let t = Transform {
                position: Vec3::ZERO,
                orientation: look_at(Vec3::ZERO, dir),
            };
            let side = t.rotation() * Vec3::X;
            assert_vec_close(t.facing(), dir.normalize(), 1e-4);
            assert_vec_close(side, Vec3::Y.cross(dir).normalize(), 1e-4);
        }
    }

    #[test]
    fn look_at_straight_up_stays_finite() {
        let orientation = look_at(Vec3::ZERO, Vec3::Y * 5.0);
        assert!(orientation.is_finite());
        let t = Transform {
            position: Vec3::ZERO,
            orientation,
        };
        assert_vec_close(t.facing(), Vec3::Y, 1e-3);
    }

    #[test]
    fn placements_are_deterministic() {
        for layout in crate::layout::Layout::ALL {
            for i in 0..25 {
                let a = layout.transform_for(i, 25);
                let b = layout.transform_for(i, 25);
                assert_eq!(a.position.to_array(), b.position.to_array());
                assert_eq!(a.orientation.to_array(), b.orientation.to_array());
            }
        }
    }
}
