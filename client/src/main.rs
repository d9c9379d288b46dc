use clap::{App as CliApp, Arg};
use eframe::{
    egui::{self, epaint},
    epi,
};
use fruit_snake::{
    facts,
    input::{self, Swipe},
    store::JsonFileStore,
    Command, Session, Status,
};
use game::prelude::*;
use logger::*;
use std::time::Instant;

/// Default high score file.
const DEFAULT_STORE: &str = "snake_scores.json";

/// Space between the window border and the board, in pixels.
const BOARD_OFFSET: f32 = 20.0;

/// Keys forwarded to the session.
const KEYS: [egui::Key; 14] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::W,
    egui::Key::A,
    egui::Key::S,
    egui::Key::D,
    egui::Key::Space,
    egui::Key::P,
    egui::Key::R,
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
];

fn main() {
    let matches = CliApp::new("Fruit Snake")
        .about("Single player snake with cherries and blueberries")
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .takes_value(true)
                .possible_values(&["slow", "normal", "fast"])
                .help("Initial game speed"),
        )
        .arg(
            Arg::with_name("store")
                .short("s")
                .long("store")
                .value_name("PATH")
                .takes_value(true)
                .help(&format!("High score file. Default is {}", DEFAULT_STORE)),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("NUMBER")
                .takes_value(true)
                .help("Seed for fruit placement, random if not given"),
        )
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log-level")
                .value_name("FILTER")
                .takes_value(true)
                .help("Log filter, overrides SNAKE_LOG"),
        )
        .get_matches();

    init_logger(matches.value_of("log_level"));

    let difficulty = match matches.value_of("difficulty") {
        Some(val) => match val.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(e) => {
                error!("{}", e);
                return;
            }
        },
        None => Difficulty::default(),
    };
    let spawner = match matches.value_of("seed") {
        Some(val) => match val.parse::<u64>() {
            Ok(seed) => FruitGenerator::seeded(seed),
            Err(e) => {
                error!("can't parse seed {:?}: {}", val, e);
                return;
            }
        },
        None => FruitGenerator::from_entropy(),
    };
    let store = JsonFileStore::open(matches.value_of("store").unwrap_or(DEFAULT_STORE));
    info!("high scores are kept in {}", store.path().display());

    let app = GuiApp::new(Session::new(difficulty, spawner, store));
    let (width, height) = Board::STANDARD.pixel_size();
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            width + BOARD_OFFSET * 2.0 + 180.0,
            height + BOARD_OFFSET * 2.0,
        )),
        ..Default::default()
    };

    eframe::run_native(Box::new(app), native_options);
}

pub struct GuiApp {
    /// Running game.
    session: Session<FruitGenerator, JsonFileStore>,

    /// Touch swipe in progress.
    swipe: Option<Swipe>,

    /// Fact shown on the game over screen.
    fact: Option<&'static str>,
}

impl GuiApp {
    /// Return a new [`GuiApp`].
    fn new(session: Session<FruitGenerator, JsonFileStore>) -> Self {
        Self {
            session,
            swipe: None,
            fact: None,
        }
    }

    /// Forward pressed keys to the session.
    fn read_keys(&mut self, ctx: &egui::CtxRef, now: Instant) {
        for key in KEYS {
            if !ctx.input().key_pressed(key) {
                continue;
            }
            if let Some(command) = input::command_for_key(&format!("{:?}", key)) {
                self.run(command, now);
            }
        }
    }

    /// Turn the snake after a swipe which started on the board.
    fn read_swipe(&mut self, ctx: &egui::CtxRef, board: egui::Rect) {
        let (down, origin, current) = {
            let pointer = &ctx.input().pointer;
            (pointer.any_down(), pointer.press_origin(), pointer.interact_pos())
        };

        match (down, origin, current) {
            (true, Some(origin), Some(current)) if board.contains(origin) => {
                let swipe = *self
                    .swipe
                    .get_or_insert_with(|| Swipe::start(origin.x, origin.y));
                if let Some(direction) = swipe.direction_to(current.x, current.y) {
                    self.session.request_direction(direction);
                }
            }
            _ => self.swipe = None,
        }
    }

    /// Run a command coming from a key or a button.
    fn run(&mut self, command: Command, now: Instant) {
        if command == Command::Restart {
            self.fact = None;
        }
        self.session.apply(command, now);
    }

    /// Draw background, snake and fruits.
    fn draw_board(&self, ui: &mut egui::Ui) -> egui::Rect {
        let board = Board::STANDARD;
        let (width, height) = board.pixel_size();
        let rect = |min: (f32, f32), max: (f32, f32)| epaint::Rect {
            min: egui::pos2(min.0 + BOARD_OFFSET, min.1 + BOARD_OFFSET),
            max: egui::pos2(max.0 + BOARD_OFFSET, max.1 + BOARD_OFFSET),
        };

        let background = rect((0.0, 0.0), (width, height));
        let mut shapes: Vec<egui::Shape> = Vec::new();
        shapes.push(egui::Shape::Rect(epaint::RectShape::filled(
            background,
            0.0,
            color32(Color::GRASS),
        )));

        for point in self.session.state().scene() {
            let (min, max) = board.pixel_rect(point.cell);
            let rounding = match point.object_kind {
                GameObject::SnakeSegment => 2.0,
                GameObject::Fruit(_) => Board::CELL_SIZE / 2.0,
            };
            shapes.push(egui::Shape::Rect(epaint::RectShape::filled(
                rect(min, max),
                rounding,
                color32(point.color),
            )));
        }

        ui.painter().extend(shapes);
        background
    }
}

impl epi::App for GuiApp {
    fn name(&self) -> &str {
        "Fruit Snake"
    }

    fn setup(
        &mut self,
        ctx: &egui::CtxRef,
        _frame: &mut epi::Frame<'_>,
        _storage: Option<&dyn epi::Storage>,
    ) {
        ctx.set_visuals(egui::Visuals::dark());
    }

    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame<'_>) {
        let now = Instant::now();
        self.read_keys(ctx, now);

        for result in self.session.pump(now) {
            if let UpdateResult::GameOver { .. } = result {
                self.fact = Some(facts::random_fact(&mut rand::thread_rng()));
            }
        }

        egui::SidePanel::new(egui::panel::Side::Right, "control_panel").show(ctx, |ui| {
            let state = self.session.state();
            ui.heading(format!("Score: {}", state.score()));
            ui.label(format!("High score: {}", state.high_score()));
            ui.label(format!("Speed: {}", state.difficulty()));
            ui.separator();

            let pause_label = match self.session.status() {
                Status::Running => "Pause",
                _ => "Start",
            };
            if ui.button(pause_label).clicked() {
                self.run(Command::TogglePause, now);
            }
            if ui.button("Restart").clicked() {
                self.run(Command::Restart, now);
            }
            ui.separator();

            for difficulty in Difficulty::ALL {
                if ui.button(difficulty.to_string()).clicked() {
                    self.run(Command::SetDifficulty(difficulty), now);
                }
            }
        });

        let mut board = egui::Rect::NOTHING;
        egui::CentralPanel::default().show(ctx, |ui| {
            board = self.draw_board(ui);
        });
        self.read_swipe(ctx, board);

        if let Status::GameOver { score } = self.session.status() {
            let mut play_again = false;
            egui::Window::new("Game over").show(ctx, |ui| {
                ui.label(format!("Final score: {}", score));
                if let Some(fact) = self.fact {
                    ui.label(format!("Did you know? {}", fact));
                }
                play_again = ui.button("Play again").clicked();
            });
            if play_again {
                self.fact = None;
                self.session.restart(now, true);
            }
        }

        ctx.request_repaint();
    }

    fn on_exit(&mut self) {
        info!(
            "leaving with score {} (high score {})",
            self.session.state().score(),
            self.session.state().high_score()
        );
    }
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_premultiplied(color.r, color.g, color.b, color.a)
}
