//! Animated background: a slowly turning starfield and five floating
//! wireframe icosahedra, seen through a perspective camera.
//!
//! The model is purely time-driven. [`Scene::advance`] moves it forward by a
//! frame delta and [`Camera::project`] maps world points to canvas pixels; the
//! browser app only strokes what these return.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub type Vec3 = [f64; 3];

/// Euler angles in radians, applied in X, Y, Z order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotates `p` by this rotation (matrix `Rx * Ry * Rz`).
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let (sx, cx) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        let (sz, cz) = self.z.sin_cos();

        // z
        let [x, y, z] = p;
        let (x, y) = (x * cz - y * sz, x * sz + y * cz);
        // y
        let (x, z) = (x * cy + z * sy, -x * sy + z * cy);
        // x
        let (y, z) = (y * cx - z * sx, y * sx + z * cx);
        [x, y, z]
    }
}

fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn length(p: Vec3) -> f64 {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
}

// ─── Starfield ───────────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f64 = 100.0;
pub const STAR_DEPTH: f64 = 50.0;
const STAR_FACTOR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Base point size before perspective.
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
    pub rotation: Rotation,
}

impl Starfield {
    /// Scatters `count` stars in a shell between `radius` and `radius + depth`.
    /// The shell thins towards the inside, as later stars step inwards.
    pub fn generate(count: usize, radius: f64, depth: f64, rng: &mut impl Rng) -> Self {
        let mut r = radius + depth;
        let increment = depth / count.max(1) as f64;
        let stars = (0..count)
            .map(|_| {
                r -= increment * rng.random::<f64>();
                let polar = (1.0 - rng.random::<f64>() * 2.0).acos();
                let azimuth = rng.random::<f64>() * std::f64::consts::TAU;
                let position = [
                    r * polar.sin() * azimuth.sin(),
                    r * polar.cos(),
                    r * polar.sin() * azimuth.cos(),
                ];
                Star {
                    position,
                    size: (0.5 + 0.5 * rng.random::<f64>()) * STAR_FACTOR,
                }
            })
            .collect();
        Self {
            stars,
            rotation: Rotation::default(),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn advance(&mut self, dt: f64) {
        self.rotation.x -= dt / 10.0;
        self.rotation.y -= dt / 15.0;
    }

    /// Star positions after the group rotation.
    pub fn world_positions(&self) -> impl Iterator<Item = (Vec3, f64)> + '_ {
        self.stars
            .iter()
            .map(|s| (self.rotation.apply(s.position), s.size))
    }
}

// ─── Floating icosahedra ─────────────────────────────────────────────────────

const SPIN_RATE: f64 = 0.2;
const FLOAT_SPEED: f64 = 2.0;
const FLOAT_ROTATION_INTENSITY: f64 = 0.5;
const FLOAT_INTENSITY: f64 = 1.0;

/// Resting positions and wireframe colors of the five shapes.
pub const SHAPES: [(Vec3, &str); 5] = [
    ([-2.0, 1.0, 0.0], "#a2d2ff"),
    ([2.0, -1.0, -2.0], "#ffafcc"),
    ([0.0, 2.0, -5.0], "#bde0fe"),
    ([3.0, 2.0, -1.0], "#ffc8dd"),
    ([-3.0, -2.0, -3.0], "#cdb4db"),
];

/// Unit-radius icosahedron vertices.
pub fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let raw: [Vec3; 12] = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    raw.map(|v| {
        let l = length(v);
        [v[0] / l, v[1] / l, v[2] / l]
    })
}

/// Vertex index pairs joined by a wireframe edge: every pair at the minimal
/// vertex distance.
pub fn icosahedron_edges() -> Vec<(usize, usize)> {
    let vertices = icosahedron_vertices();
    let dist = |a: Vec3, b: Vec3| length([a[0] - b[0], a[1] - b[1], a[2] - b[2]]);
    let shortest = dist(vertices[0], vertices[1])
        .min(dist(vertices[0], vertices[5]))
        .min(dist(vertices[0], vertices[11]));

    let mut edges = Vec::with_capacity(30);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if (dist(vertices[i], vertices[j]) - shortest).abs() < 1e-9 {
                edges.push((i, j));
            }
        }
    }
    edges
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingShape {
    pub position: Vec3,
    pub color: &'static str,
    pub spin: Rotation,
    /// Phase offset so the shapes do not bob in lockstep.
    pub offset: f64,
}

impl FloatingShape {
    pub fn new(position: Vec3, color: &'static str, offset: f64) -> Self {
        Self {
            position,
            color,
            spin: Rotation::default(),
            offset,
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.spin.x += dt * SPIN_RATE;
        self.spin.y += dt * SPIN_RATE;
    }

    /// Gentle sway and vertical bob of the wrapping group at `elapsed` seconds.
    pub fn float_transform(&self, elapsed: f64) -> (Rotation, f64) {
        let t = (self.offset + elapsed) / 4.0 * FLOAT_SPEED;
        let sway = Rotation::new(
            t.cos() / 8.0 * FLOAT_ROTATION_INTENSITY,
            t.sin() / 8.0 * FLOAT_ROTATION_INTENSITY,
            t.sin() / 20.0 * FLOAT_ROTATION_INTENSITY,
        );
        let bob = t.sin() / 10.0 * FLOAT_INTENSITY;
        (sway, bob)
    }

    /// The twelve vertices in world space at `elapsed` seconds.
    pub fn world_vertices(&self, elapsed: f64) -> [Vec3; 12] {
        let (sway, bob) = self.float_transform(elapsed);
        icosahedron_vertices().map(|v| {
            let local = add(self.spin.apply(v), self.position);
            add(sway.apply(local), [0.0, bob, 0.0])
        })
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub starfield: Starfield,
    pub shapes: Vec<FloatingShape>,
    elapsed: f64,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let starfield = Starfield::generate(STAR_COUNT, STAR_RADIUS, STAR_DEPTH, &mut rng);
        let shapes = SHAPES
            .iter()
            .map(|(position, color)| {
                FloatingShape::new(*position, *color, rng.random::<f64>() * 10_000.0)
            })
            .collect();
        Self {
            starfield,
            shapes,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Steps every animation by `dt` seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.starfield.advance(dt);
        for shape in &mut self.shapes {
            shape.advance(dt);
        }
    }
}

// ─── Camera ──────────────────────────────────────────────────────────────────

/// Perspective camera on the +z axis looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            z: 5.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// A world point mapped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance in front of the camera.
    pub depth: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
}

impl Camera {
    /// Maps `p` to pixel coordinates on a `width` x `height` canvas, or `None`
    /// when the point is outside the near/far range.
    pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.z - p[2];
        if depth < self.near || depth > self.far || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let aspect = width / height;
        let ndc_x = p[0] * focal / aspect / depth;
        let ndc_y = p[1] * focal / depth;
        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            depth,
            scale: focal * height / 2.0 / depth,
        })
    }
}
