//! Minimal vector math and icosphere generation.

use std::collections::HashMap;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self * (1.0 / len)
        }
    }

    pub fn rotate_x(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    pub fn rotate_y(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    pub fn rotate_z(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, k: f64) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Indexed triangle mesh, faces wound counter-clockwise seen from outside.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Icosahedron of the given radius, each face split into `4^detail`
    /// triangles with new vertices pushed out to the sphere.
    pub fn icosphere(radius: f64, detail: u32) -> Self {
        let t = (1.0 + 5f64.sqrt()) / 2.0;
        let mut vertices: Vec<Vec3> = [
            (-1.0, t, 0.0),
            (1.0, t, 0.0),
            (-1.0, -t, 0.0),
            (1.0, -t, 0.0),
            (0.0, -1.0, t),
            (0.0, 1.0, t),
            (0.0, -1.0, -t),
            (0.0, 1.0, -t),
            (t, 0.0, -1.0),
            (t, 0.0, 1.0),
            (-t, 0.0, -1.0),
            (-t, 0.0, 1.0),
        ]
        .iter()
        .map(|&(x, y, z)| Vec3::new(x, y, z).normalized())
        .collect();

        let mut faces: Vec<[usize; 3]> = vec![
            [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
            [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
            [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
            [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
        ];

        for _ in 0..detail {
            let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
            let mut midpoint = |a: usize, b: usize, vertices: &mut Vec<Vec3>| -> usize {
                let key = if a < b { (a, b) } else { (b, a) };
                *midpoints.entry(key).or_insert_with(|| {
                    vertices.push(((vertices[a] + vertices[b]) * 0.5).normalized());
                    vertices.len() - 1
                })
            };

            let mut next = Vec::with_capacity(faces.len() * 4);
            for &[a, b, c] in &faces {
                let ab = midpoint(a, b, &mut vertices);
                let bc = midpoint(b, c, &mut vertices);
                let ca = midpoint(c, a, &mut vertices);
                next.push([a, ab, ca]);
                next.push([b, bc, ab]);
                next.push([c, ca, bc]);
                next.push([ab, bc, ca]);
            }
            faces = next;
        }

        for v in &mut vertices {
            *v = *v * radius;
        }

        Self { vertices, faces }
    }

    /// Outward unit normal of a face.
    pub fn face_normal(&self, face: [usize; 3]) -> Vec3 {
        let [a, b, c] = face.map(|i| self.vertices[i]);
        (b - a).cross(c - a).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosahedron_counts() {
        let mesh = Mesh::icosphere(1.0, 0);
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.faces.len(), 20);
    }

    #[test]
    fn test_subdivided_icosphere() {
        let mesh = Mesh::icosphere(1.1, 1);
        assert_eq!(mesh.vertices.len(), 42);
        assert_eq!(mesh.faces.len(), 80);
        for v in &mesh.vertices {
            assert!((v.length() - 1.1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normals_point_outward() {
        let mesh = Mesh::icosphere(1.0, 1);
        for &face in &mesh.faces {
            let centroid = face
                .iter()
                .fold(Vec3::default(), |acc, &i| acc + mesh.vertices[i]);
            assert!(mesh.face_normal(face).dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(0.3, -1.2, 0.7);
        let r = v.rotate_x(0.4).rotate_y(-1.3).rotate_z(2.2);
        assert!((v.length() - r.length()).abs() < 1e-12);
        let q = Vec3::new(1.0, 0.0, 0.0).rotate_z(std::f64::consts::FRAC_PI_2);
        assert!((q.y - 1.0).abs() < 1e-12 && q.x.abs() < 1e-12);
    }
}
