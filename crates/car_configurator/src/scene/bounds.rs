//! Axis-aligned bounding boxes

use crate::foundation::math::{Mat4, Point3, Vec3};

/// Axis-Aligned Bounding Box used as a cheap proxy for part size and shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Point3,
    /// Maximum corner of the bounding box
    pub max: Point3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }
    
    /// Create an AABB centered at a point with given half-size
    pub fn from_center_extents(center: Point3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }
    
    /// Smallest box enclosing every point, `None` for an empty set
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Self::new(first, first);
        for point in iter {
            bounds.expand_to(point);
        }
        Some(bounds)
    }
    
    /// Grow the box so it contains `point`
    pub fn expand_to(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }
    
    /// Smallest box enclosing both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
    
    /// Axis-aligned box enclosing this box after an affine transform
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let corners = self.corners().map(|corner| matrix.transform_point(&corner));
        // Eight corners always yield a box
        Self::from_points(corners.iter()).unwrap_or(*self)
    }
    
    /// The eight corners of the box
    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }
    
    /// Get the center of the AABB
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
    
    /// Full size along each axis (width, height, depth)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
    
    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        let size = self.size();
        size.x * size.y * size.z
    }
    
    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: &Point3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }
    
    /// Check if this AABB intersects another AABB
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}
