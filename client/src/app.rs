use std::time::{Duration, Instant};

use eframe::egui;
use engine::game::{Difficulty, GameState, Mark, Outcome, SessionRng, Turn};
use engine::log;

use crate::config::{ClientConfig, save_config};
use crate::confetti::Confetti;

pub struct GameApp {
    game: GameState,
    rng: SessionRng,
    config: ClientConfig,
    config_path: String,
    bot_delay: Duration,
    bot_move_due: Option<Instant>,
    thinking_since: Option<Instant>,
    confetti: Option<Confetti>,
    human_wins: u32,
    bot_wins: u32,
    draws: u32,
    tally_recorded: bool,
}

impl GameApp {
    const BOARD_PADDING: f32 = 40.0;
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new(config: ClientConfig, config_path: String, game: GameState, rng: SessionRng) -> Self {
        Self {
            game,
            rng,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
            config,
            config_path,
            bot_move_due: None,
            thinking_since: None,
            confetti: None,
            human_wins: 0,
            bot_wins: 0,
            draws: 0,
            tally_recorded: false,
        }
    }

    fn start_bot_turn(&mut self) {
        let now = Instant::now();
        self.bot_move_due = Some(now + self.bot_delay);
        self.thinking_since = Some(now);
    }

    fn maybe_play_bot(&mut self) {
        let Some(due) = self.bot_move_due else {
            return;
        };
        if Instant::now() < due {
            return;
        }

        self.bot_move_due = None;
        self.thinking_since = None;

        if self.game.is_over() || self.game.current_turn() != Turn::Bot {
            return;
        }

        match self.game.play_bot_turn(self.config.difficulty, &mut self.rng) {
            Ok(index) => log!(
                "Bot ({}) played cell {} on {}",
                self.game.bot_mark().as_str(),
                index,
                self.config.difficulty
            ),
            Err(err) => log!("Bot move failed: {}", err),
        }
    }

    fn record_result(&mut self) {
        if !self.game.is_over() || self.tally_recorded {
            return;
        }
        self.tally_recorded = true;

        match self.game.status() {
            Outcome::Win(mark) if mark == self.game.human_mark() => {
                self.human_wins += 1;
                log!("Game over: human wins");
            }
            Outcome::Win(_) => {
                self.bot_wins += 1;
                log!("Game over: bot wins");
            }
            Outcome::Draw => {
                self.draws += 1;
                log!("Game over: draw");
            }
            Outcome::Ongoing => {}
        }
    }

    fn reset_game(&mut self) {
        self.game.reset();
        self.bot_move_due = None;
        self.thinking_since = None;
        self.confetti = None;
        self.tally_recorded = false;
        log!("New game started");
    }

    fn status_text(&self) -> String {
        match self.game.status() {
            Outcome::Win(mark) if mark == self.game.human_mark() => "You win!".to_string(),
            Outcome::Win(_) => "Bot wins!".to_string(),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::Ongoing => {
                if let Some(since) = self.thinking_since {
                    let dots = ((since.elapsed().as_millis() / 500) % 4) as usize;
                    format!("Bot is thinking{}", ".".repeat(dots))
                } else if self.game.current_turn() == Turn::Bot {
                    "Bot's turn...".to_string()
                } else {
                    "Your turn".to_string()
                }
            }
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Difficulty:");
            let previous = self.config.difficulty;
            egui::ComboBox::from_id_salt("difficulty")
                .selected_text(self.config.difficulty.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.config.difficulty, Difficulty::Easy, "Easy");
                    ui.selectable_value(&mut self.config.difficulty, Difficulty::Medium, "Medium");
                    ui.selectable_value(&mut self.config.difficulty, Difficulty::Hard, "Hard");
                });
            if self.config.difficulty != previous {
                log!("Difficulty changed to {}", self.config.difficulty);
                if let Err(err) = save_config(&self.config_path, &self.config) {
                    log!("Failed to save config: {}", err);
                }
            }

            ui.separator();

            if ui.button("Reset").clicked() {
                self.reset_game();
            }

            ui.separator();

            ui.label(format!(
                "You {}  Bot {}  Draws {}",
                self.human_wins, self.bot_wins, self.draws
            ));
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let cell_size = ((available.x.min(available.y) - Self::BOARD_PADDING * 2.0) / 3.0)
            .clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);
        let board_size = cell_size * 3.0;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(line) = self.game.winning_line() {
            for index in line {
                painter.rect_filled(
                    Self::cell_rect(rect, index, cell_size),
                    0.0,
                    egui::Color32::from_rgb(190, 235, 190),
                );
            }
        }

        for i in 0..=3 {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );

            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (index, &mark) in self.game.board().cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, index, cell_size);
            match mark {
                Mark::X => Self::draw_x(painter, cell_rect),
                Mark::O => Self::draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        let human_can_move = !self.game.is_over()
            && self.game.current_turn() == Turn::Human
            && self.bot_move_due.is_none();

        if human_can_move
            && let Some(hover) = response.hover_pos()
        {
            let col = ((hover.x - rect.left()) / cell_size) as usize;
            let row = ((hover.y - rect.top()) / cell_size) as usize;

            if col < 3 && row < 3 {
                let index = row * 3 + col;
                if self.game.board()[index] == Mark::Empty {
                    painter.rect_filled(
                        Self::cell_rect(rect, index, cell_size),
                        0.0,
                        egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                    );

                    if response.clicked() {
                        match self.game.place_human(index) {
                            Ok(()) => {
                                log!(
                                    "Human ({}) played cell {}",
                                    self.game.human_mark().as_str(),
                                    index
                                );
                                if !self.game.is_over()
                                    && self.game.current_turn() == Turn::Bot
                                {
                                    self.start_bot_turn();
                                }
                            }
                            Err(err) => log!("Placement rejected: {}", err),
                        }
                    }
                }
            }
        }
    }

    fn cell_rect(board_rect: egui::Rect, index: usize, cell_size: f32) -> egui::Rect {
        let col = index % 3;
        let row = index / 3;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }

    fn render_confetti(&mut self, ctx: &egui::Context) {
        if self.config.confetti
            && self.confetti.is_none()
            && matches!(self.game.status(), Outcome::Win(_))
        {
            let rect = ctx.content_rect();
            self.confetti = Some(Confetti::launch(rect.width(), rect.height(), &mut self.rng));
        }

        if let Some(confetti) = &mut self.confetti {
            let rect = ctx.content_rect();
            confetti.step(rect.width(), rect.height(), &mut self.rng);

            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("confetti"),
            ));
            confetti.draw(&painter, rect.min);
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.maybe_play_bot();
        self.record_result();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(self.status_text());
                ui.add_space(12.0);
                self.render_board(ui);
            });
        });

        self.render_confetti(ctx);

        if self.bot_move_due.is_some() || self.confetti.is_some() {
            ctx.request_repaint_after(Duration::from_millis(33));
        }
    }
}
