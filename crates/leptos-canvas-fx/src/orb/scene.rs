//! Orb Scene
//!
//! Float motion, drag-to-orbit, perspective projection and flat shading.
//! Produces screen-space triangles ready for painter's-algorithm drawing.

use std::f64::consts::FRAC_PI_2;

use super::mesh::{Mesh, Vec3};

/// Drag sensitivity, radians per CSS pixel.
const ORBIT_SPEED: f64 = 0.01;
const PITCH_LIMIT: f64 = FRAC_PI_2 * 0.95;

/// Bobbing and swaying of the model over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self { speed: 1.7, rotation_intensity: 0.8, float_intensity: 1.2 }
    }
}

/// Model transform at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub rot_x: f64,
    pub rot_y: f64,
    pub rot_z: f64,
    pub offset_y: f64,
}

impl FloatMotion {
    pub fn pose_at(&self, t_secs: f64) -> Pose {
        let phase = t_secs / 4.0 * self.speed;
        Pose {
            rot_x: phase.cos() / 8.0 * self.rotation_intensity,
            rot_y: phase.sin() / 8.0 * self.rotation_intensity,
            rot_z: phase.sin() / 20.0 * self.rotation_intensity,
            offset_y: phase.sin() / 10.0 * self.float_intensity,
        }
    }
}

/// User orbit around the model. Pitch is clamped short of the poles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orbit {
    pub yaw: f64,
    pub pitch: f64,
}

impl Orbit {
    pub fn drag(self, dx: f64, dy: f64) -> Self {
        Self {
            yaw: self.yaw + dx * ORBIT_SPEED,
            pitch: (self.pitch + dy * ORBIT_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Distance from the origin along +z, looking toward the origin.
    pub distance: f64,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { distance: 3.6, fov_deg: 55.0 }
    }
}

impl Camera {
    fn position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    /// Project a world point to screen space for a viewport of `w` x `h`.
    /// Returns `None` behind the camera.
    pub fn project(&self, p: Vec3, w: f64, h: f64) -> Option<(f64, f64)> {
        let depth = self.distance - p.z;
        if depth <= 1e-6 {
            return None;
        }
        let focal = (h / 2.0) / (self.fov_deg.to_radians() / 2.0).tan();
        Some((w / 2.0 + p.x * focal / depth, h / 2.0 - p.y * focal / depth))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub direction: Vec3,
    pub intensity: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: [f64; 3],
    pub metalness: f64,
    pub roughness: f64,
}

/// Screen-space triangle with its flat colour.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedFace {
    pub points: [(f64, f64); 3],
    pub depth: f64,
    pub rgb: [u8; 3],
}

pub struct OrbScene {
    pub mesh: Mesh,
    pub camera: Camera,
    pub motion: FloatMotion,
    pub ambient: f64,
    pub lights: Vec<Light>,
    pub material: Material,
}

impl Default for OrbScene {
    fn default() -> Self {
        Self {
            mesh: Mesh::icosphere(1.1, 1),
            camera: Camera::default(),
            motion: FloatMotion::default(),
            ambient: 0.7,
            lights: vec![
                Light { direction: Vec3::new(2.5, 2.5, 2.5).normalized(), intensity: 1.2 },
                Light { direction: Vec3::new(-2.0, -1.0, 2.0).normalized(), intensity: 0.7 },
            ],
            material: Material { color: [0.72, 0.8, 0.98], metalness: 0.65, roughness: 0.2 },
        }
    }
}

impl OrbScene {
    fn to_world(&self, v: Vec3, pose: Pose, orbit: Orbit) -> Vec3 {
        let model = v.rotate_x(pose.rot_x).rotate_y(pose.rot_y).rotate_z(pose.rot_z)
            + Vec3::new(0.0, pose.offset_y, 0.0);
        model.rotate_y(orbit.yaw).rotate_x(orbit.pitch)
    }

    fn shade(&self, normal: Vec3, view: Vec3) -> [u8; 3] {
        let m = &self.material;
        let diffuse_weight = 1.0 - m.metalness;
        let shininess = 2.0 / (m.roughness * m.roughness).max(1e-3);

        let mut diffuse = self.ambient * 0.35;
        let mut specular = 0.0;
        for light in &self.lights {
            let lambert = normal.dot(light.direction).max(0.0);
            diffuse += lambert * light.intensity;
            let half = (light.direction + view).normalized();
            specular += normal.dot(half).max(0.0).powf(shininess) * light.intensity;
        }
        // Cheap sky reflection so the metal does not read as black.
        let sky = m.metalness * 0.45 * (0.5 + 0.5 * normal.y);

        m.color.map(|c| {
            let v = c * (diffuse * diffuse_weight + sky) + specular * m.metalness;
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        })
    }

    /// Visible faces for time `t_secs`, sorted far to near.
    pub fn faces(&self, t_secs: f64, orbit: Orbit, w: f64, h: f64) -> Vec<ShadedFace> {
        let pose = self.motion.pose_at(t_secs);
        let world: Vec<Vec3> = self
            .mesh
            .vertices
            .iter()
            .map(|&v| self.to_world(v, pose, orbit))
            .collect();
        let eye = self.camera.position();

        let mut out: Vec<ShadedFace> = self
            .mesh
            .faces
            .iter()
            .filter_map(|&[a, b, c]| {
                let (pa, pb, pc) = (world[a], world[b], world[c]);
                let normal = (pb - pa).cross(pc - pa).normalized();
                let centroid = (pa + pb + pc) * (1.0 / 3.0);
                let to_eye = eye - centroid;
                if normal.dot(to_eye) <= 0.0 {
                    return None;
                }
                let points = [
                    self.camera.project(pa, w, h)?,
                    self.camera.project(pb, w, h)?,
                    self.camera.project(pc, w, h)?,
                ];
                Some(ShadedFace {
                    points,
                    depth: to_eye.length(),
                    rgb: self.shade(normal, to_eye.normalized()),
                })
            })
            .collect();

        out.sort_by(|x, y| y.depth.total_cmp(&x.depth));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let camera = Camera::default();
        assert_eq!(camera.project(Vec3::default(), 400.0, 300.0), Some((200.0, 150.0)));
        assert_eq!(camera.project(Vec3::new(0.0, 0.0, 3.6), 400.0, 300.0), None);
    }

    #[test]
    fn test_float_pose_at_rest() {
        let pose = FloatMotion::default().pose_at(0.0);
        assert!((pose.rot_x - 0.1).abs() < 1e-12);
        assert_eq!(pose.rot_y, 0.0);
        assert_eq!(pose.offset_y, 0.0);
    }

    #[test]
    fn test_orbit_pitch_is_clamped() {
        let orbit = Orbit::default().drag(30.0, 10_000.0);
        assert!((orbit.yaw - 0.3).abs() < 1e-12);
        assert!(orbit.pitch < FRAC_PI_2);
        let orbit = orbit.drag(0.0, -100_000.0);
        assert!(orbit.pitch > -FRAC_PI_2);
    }

    #[test]
    fn test_faces_sorted_far_to_near() {
        let scene = OrbScene::default();
        let faces = scene.faces(1.3, Orbit::default().drag(40.0, -25.0), 320.0, 320.0);
        assert!(!faces.is_empty() && faces.len() < scene.mesh.faces.len());
        assert!(faces.windows(2).all(|pair| pair[0].depth >= pair[1].depth));
    }

    #[test]
    fn test_lit_side_is_brighter() {
        let scene = OrbScene::default();
        let view = Vec3::new(0.0, 0.0, 1.0);
        let lit = scene.shade(Vec3::new(1.0, 1.0, 1.0).normalized(), view);
        let dark = scene.shade(Vec3::new(-1.0, -1.0, -1.0).normalized(), view);
        let sum = |c: [u8; 3]| c.iter().map(|&v| v as u32).sum::<u32>();
        assert!(sum(lit) > sum(dark));
    }
}
