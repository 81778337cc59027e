//! Math utilities and types
//!
//! Provides the math types used by scene traversal and bounds computation.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position relative to the parent node
    pub position: Vec3,
    
    /// Rotation quaternion
    pub rotation: Quat,
    
    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }
    
    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
    
    /// Create a transform from position, Euler angles (radians) and scale
    pub fn from_parts(position: Vec3, euler: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::from_euler_angles(euler.x, euler.y, euler.z),
            scale,
        }
    }
    
    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
    
    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_leaves_point_unchanged() {
        let point = Point3::new(1.0, 2.0, 3.0);
        let transformed = Transform::identity().transform_point(point);

        assert_relative_eq!(transformed, point);
    }

    #[test]
    fn test_translation_then_scale_order() {
        let transform = Transform {
            position: Vec3::new(0.0, 1.0, 0.0),
            scale: Vec3::new(2.0, 2.0, 2.0),
            ..Default::default()
        };

        // Scale is applied before translation
        let transformed = transform.transform_point(Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(transformed, Point3::new(2.0, 3.0, 2.0));
    }

    #[test]
    fn test_rotation_about_y() {
        let transform = Transform::from_parts(
            Vec3::zeros(),
            Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        );

        let transformed = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(transformed, Point3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }
}
