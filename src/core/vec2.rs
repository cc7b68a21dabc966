/// 2D vector for particle kinematics. `f64` to match the host's number type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Vector of length `speed` pointing at `angle_deg` (0° = +x, 90° = +y, screen down)
    pub fn from_polar_degrees(angle_deg: f64, speed: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            x: rad.cos() * speed,
            y: rad.sin() * speed,
        }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// |x| + |y|
    pub fn manhattan(&self) -> f64 {
        self.x.abs() + self.y.abs()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_keeps_speed() {
        for angle in [0.0, 45.0, 90.0, 123.4, 270.0, 359.9] {
            let v = Vec2::from_polar_degrees(angle, 250.0);
            assert!((v.length() - 250.0).abs() < 1e-9);
        }
    }

    #[test]
    fn polar_axes() {
        let right = Vec2::from_polar_degrees(0.0, 10.0);
        assert!((right.x - 10.0).abs() < 1e-12 && right.y.abs() < 1e-12);

        let down = Vec2::from_polar_degrees(90.0, 10.0);
        assert!(down.x.abs() < 1e-12 && (down.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn manhattan_ignores_sign() {
        assert_eq!(Vec2::new(-3.0, 4.0).manhattan(), 7.0);
        assert_eq!(Vec2::new(1.0, 2.0) + Vec2::new(0.5, -2.0), Vec2::new(1.5, 0.0));
        assert_eq!(Vec2::new(2.0, -1.0) * 0.5, Vec2::new(1.0, -0.5));
    }
}
