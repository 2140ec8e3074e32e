use ndarray::{Array1, ArrayView1};

/// Which half-space of a [`Hyperplane`] a point lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `w·x + b <= 0`, points on the plane included.
    Left,
    /// `w·x + b > 0`.
    Right,
}

/// Splitting hyperplane `w·x + b = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperplane {
    pub normal: Array1<f64>,
    pub offset: f64,
}

impl Hyperplane {
    pub fn new(normal: Array1<f64>, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Perpendicular bisector of the segment `first`-`second`, oriented so
    /// that `second` lies on the right.
    pub fn bisecting(first: ArrayView1<f64>, second: ArrayView1<f64>) -> Self {
        let normal = &second - &first;
        let midpoint = (&first + &second) / 2.0;
        let offset = -normal.dot(&midpoint);
        Self { normal, offset }
    }

    #[inline]
    pub fn margin(&self, point: ArrayView1<f64>) -> f64 {
        self.normal.dot(&point) + self.offset
    }

    #[inline]
    pub fn side(&self, point: ArrayView1<f64>) -> Side {
        if self.margin(point) > 0.0 {
            Side::Right
        } else {
            Side::Left
        }
    }
}
