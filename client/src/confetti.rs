use eframe::egui;
use engine::game::SessionRng;

const PARTICLE_COUNT: usize = 150;

const COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(255, 255, 0),
    egui::Color32::from_rgb(255, 0, 255),
    egui::Color32::from_rgb(0, 255, 255),
    egui::Color32::from_rgb(255, 0, 0),
    egui::Color32::from_rgb(0, 255, 0),
    egui::Color32::from_rgb(0, 0, 255),
];

struct Particle {
    x: f32,
    y: f32,
    radius: f32,
    dx: f32,
    dy: f32,
    color: egui::Color32,
}

/// Celebration overlay: falling circles that respawn at the top until the
/// game is reset.
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn launch(width: f32, height: f32, rng: &mut SessionRng) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(-100.0..height - 100.0),
                radius: rng.random_range(4.0..10.0),
                dx: rng.random_range(-2.5..2.5),
                dy: rng.random_range(2.0..7.0),
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();

        Self { particles }
    }

    pub fn step(&mut self, width: f32, height: f32, rng: &mut SessionRng) {
        for particle in &mut self.particles {
            particle.x += particle.dx;
            particle.y += particle.dy;
            if particle.y > height {
                particle.y = -10.0;
                particle.x = rng.random_range(0.0..width);
            }
        }
    }

    pub fn draw(&self, painter: &egui::Painter, origin: egui::Pos2) {
        for particle in &self.particles {
            painter.circle_filled(
                egui::pos2(origin.x + particle.x, origin.y + particle.y),
                particle.radius,
                particle.color,
            );
        }
    }
}
