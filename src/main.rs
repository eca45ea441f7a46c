//! Raccoon Dash entry point
//!
//! Wires the two simulations to the page: canvas sizing, input handlers,
//! the theme flag, HUD text, and one cancellable animation-frame loop per
//! component. Native builds run a short headless session instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use raccoon_dash::consts::AUTO_WAVE_DELAY_MS;
    use raccoon_dash::field::{self, FieldState};
    use raccoon_dash::render::{draw_field, draw_game};
    use raccoon_dash::runner::{GameState, Phase, TickInput, tick};
    use raccoon_dash::{HighScore, Theme};

    /// A cancellable requestAnimationFrame loop.
    ///
    /// The callback returns `true` to keep running. `cancel` is idempotent
    /// and clears the pending frame, so a cancelled loop can never
    /// reschedule itself and rapid start/stop cannot double-schedule.
    struct FrameLoop {
        raf_id: Rc<Cell<Option<i32>>>,
    }

    impl FrameLoop {
        fn start<F: FnMut(f64) -> bool + 'static>(mut on_frame: F) -> Self {
            let raf_id = Rc::new(Cell::new(None));
            let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));

            let id = raf_id.clone();
            let inner = closure.clone();
            *closure.borrow_mut() = Some(Closure::new(move |time: f64| {
                if id.get().is_none() {
                    // Cancelled while this frame was pending
                    return;
                }
                let keep_going = on_frame(time);
                if keep_going && id.get().is_some() {
                    id.set(Some(schedule(&inner)));
                } else {
                    id.set(None);
                }
            }));

            raf_id.set(Some(schedule(&closure)));
            Self { raf_id }
        }

        fn cancel(&self) {
            if let Some(id) = self.raf_id.take() {
                let _ = window().cancel_animation_frame(id);
            }
        }
    }

    fn schedule(closure: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) -> i32 {
        window()
            .request_animation_frame(
                closure.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            )
            .expect("requestAnimationFrame failed")
    }

    fn window() -> web_sys::Window {
        web_sys::window().expect("no window")
    }

    fn document() -> web_sys::Document {
        window().document().expect("no document")
    }

    /// Theme flag owned by the page's toggle: a `dark` class on `<body>`
    fn current_theme() -> Theme {
        let dark = document()
            .body()
            .map(|b| b.class_list().contains("dark"))
            .unwrap_or(false);
        Theme::from_dark_flag(dark)
    }

    /// Size a canvas to its client rect at device-pixel-ratio resolution.
    /// Returns (css_width, css_height) used by the simulations.
    fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> (f32, f32) {
        let dpr = window().device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let (w, h) = (rect.width(), rect.height());
        canvas.set_width((w * dpr) as u32);
        canvas.set_height((h * dpr) as u32);
        let _ = ctx.scale(dpr, dpr);
        (w as f32, h as f32)
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
        canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context")
    }

    /// Wave Field per-canvas bundle
    struct FieldApp {
        state: FieldState,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        rng: Pcg32,
        /// Last rAF timestamp; event handlers stamp waves with this so
        /// every timestamp in the field lives on the frame clock
        clock_ms: f64,
    }

    impl FieldApp {
        fn frame(&mut self, time: f64) {
            self.clock_ms = time;
            let dots = field::frame(&mut self.state, time);
            draw_field(&self.ctx, self.state.width, self.state.height, &dots);
        }
    }

    /// Runner Game per-canvas bundle
    struct GameApp {
        state: GameState,
        input: TickInput,
        high: HighScore,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        shown_score: Option<u32>,
        shown_best: Option<u32>,
    }

    impl GameApp {
        /// One frame: tick, render, HUD. Returns false once the session is
        /// over so the loop can stop.
        fn frame(&mut self, time: f64) -> bool {
            let theme = current_theme();
            let input = self.input;
            self.input = TickInput::default();

            tick(&mut self.state, &input, theme, time);
            draw_game(&self.ctx, &self.state, theme);

            // A new best shows and persists the moment the score passes
            // it, not at session end
            if self.high.record(self.state.score) {
                self.high.save();
            }
            self.update_hud();

            self.state.phase == Phase::Running
        }

        fn update_hud(&mut self) {
            if self.shown_score != Some(self.state.score) {
                self.shown_score = Some(self.state.score);
                set_text("score", &self.state.score.to_string());
            }
            if self.shown_best != Some(self.high.best) {
                self.shown_best = Some(self.high.best);
                set_text("high-score", &self.high.best.to_string());
            }
        }

        /// Redraw without ticking (static Idle/GameOver frame)
        fn redraw(&self) {
            draw_game(&self.ctx, &self.state, current_theme());
        }
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Raccoon Dash starting...");

        let seed = js_sys::Date::now() as u64;

        // --- Wave Field ---------------------------------------------------
        let field_app = document()
            .get_element_by_id("hero-dots")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .map(|canvas| {
                let ctx = context_2d(&canvas);
                let (w, h) = fit_canvas(&canvas, &ctx);
                let mut rng = Pcg32::seed_from_u64(seed);
                let state = FieldState::new(w, h, &mut rng);
                Rc::new(RefCell::new(FieldApp {
                    state,
                    canvas,
                    ctx,
                    rng,
                    clock_ms: 0.0,
                }))
            });

        let field_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

        if let Some(ref app) = field_app {
            setup_field_input(app.clone());
            *field_loop.borrow_mut() = Some(start_field_loop(app.clone()));
            schedule_auto_wave(app.clone());
        } else {
            log::warn!("hero-dots canvas not found, wave field disabled");
        }

        // --- Runner Game --------------------------------------------------
        let game_app = document()
            .get_element_by_id("runner-game")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .map(|canvas| {
                let ctx = context_2d(&canvas);
                let (w, h) = fit_canvas(&canvas, &ctx);
                let state = GameState::new(w, h, seed.wrapping_mul(31));
                let high = HighScore::load();
                Rc::new(RefCell::new(GameApp {
                    state,
                    input: TickInput::default(),
                    high,
                    canvas,
                    ctx,
                    shown_score: None,
                    shown_best: None,
                }))
            });

        let game_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

        if let Some(ref app) = game_app {
            app.borrow_mut().update_hud();
            app.borrow().redraw();
            setup_game_input(app.clone(), game_loop.clone());
        } else {
            log::warn!("runner-game canvas not found, game disabled");
        }

        setup_resize(field_app, field_loop, game_app, game_loop);

        log::info!("Raccoon Dash running");
    }

    // --- Wave Field loop & input ------------------------------------------

    fn start_field_loop(app: Rc<RefCell<FieldApp>>) -> FrameLoop {
        FrameLoop::start(move |time| {
            app.borrow_mut().frame(time);
            true
        })
    }

    fn schedule_auto_wave(app: Rc<RefCell<FieldApp>>) {
        let closure = Closure::once(move || {
            let mut a = app.borrow_mut();
            let origin = a.state.auto_wave_origin();
            let clock = a.clock_ms;
            a.state.trigger_wave(origin, clock);
        });
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            AUTO_WAVE_DELAY_MS,
        );
        closure.forget();
    }

    fn canvas_pos(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            (client_x - rect.left()) as f32,
            (client_y - rect.top()) as f32,
        )
    }

    fn setup_field_input(app: Rc<RefCell<FieldApp>>) {
        let canvas = app.borrow().canvas.clone();

        // Pointer parallax target
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_pos(&canvas_clone, event.client_x() as f64, event.client_y() as f64);
                app.borrow_mut().state.pointer_moved(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click spawns a wave
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_pos(&canvas_clone, event.client_x() as f64, event.client_y() as f64);
                let mut a = app.borrow_mut();
                let clock = a.clock_ms;
                a.state.trigger_wave(pos, clock);
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer gone: park it off-canvas
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().state.pointer_left();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: tap waves and drags steer parallax
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let pos =
                        canvas_pos(&canvas_clone, touch.client_x() as f64, touch.client_y() as f64);
                    let mut a = app.borrow_mut();
                    a.state.pointer_moved(pos);
                    let clock = a.clock_ms;
                    a.state.trigger_wave(pos, clock);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let pos =
                        canvas_pos(&canvas_clone, touch.client_x() as f64, touch.client_y() as f64);
                    app.borrow_mut().state.pointer_moved(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().state.pointer_left();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    // --- Runner Game loop & input -----------------------------------------

    /// Start the session loop unless one is already live. The start goes
    /// through `TickInput` so `GameState::start` sees the first frame's
    /// rAF timestamp rather than a second clock.
    fn start_game_loop(app: Rc<RefCell<GameApp>>, handle: Rc<RefCell<Option<FrameLoop>>>) {
        if handle.borrow().is_some() {
            return;
        }
        app.borrow_mut().input.start = true;

        let handle_inner = handle.clone();
        let app_inner = app.clone();
        let frame_loop = FrameLoop::start(move |time| {
            let keep_going = app_inner.borrow_mut().frame(time);
            if !keep_going {
                // Loop ends here; drop the handle so a new start works
                *handle_inner.borrow_mut() = None;
            }
            keep_going
        });
        *handle.borrow_mut() = Some(frame_loop);
    }

    /// Cancel the session loop (idempotent) and fall back to Idle
    fn stop_game_loop(app: &Rc<RefCell<GameApp>>, handle: &Rc<RefCell<Option<FrameLoop>>>) {
        if let Some(frame_loop) = handle.borrow_mut().take() {
            frame_loop.cancel();
        }
        let mut a = app.borrow_mut();
        a.state.reset();
        a.redraw();
    }

    fn setup_game_input(app: Rc<RefCell<GameApp>>, handle: Rc<RefCell<Option<FrameLoop>>>) {
        let canvas = app.borrow().canvas.clone();

        // Space / ArrowUp jumps (or starts), Escape resets
        {
            let app = app.clone();
            let handle = handle.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    " " | "ArrowUp" => {
                        event.prevent_default();
                        press(&app, &handle);
                    }
                    "Escape" => stop_game_loop(&app, &handle),
                    _ => {}
                }
            });
            let _ = window()
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tap / click on the game canvas
        {
            let app = app.clone();
            let handle = handle.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                press(&app, &handle);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let handle = handle.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                press(&app, &handle);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// The single game action: jump while running, start otherwise
    fn press(app: &Rc<RefCell<GameApp>>, handle: &Rc<RefCell<Option<FrameLoop>>>) {
        let phase = app.borrow().state.phase;
        match phase {
            Phase::Running => app.borrow_mut().input.jump = true,
            Phase::Idle | Phase::GameOver => {
                start_game_loop(app.clone(), handle.clone());
            }
        }
    }

    // --- Resize -----------------------------------------------------------

    /// Debounced window resize: cancel the wave loop, rebuild the grid and
    /// restart it; tear down any running game session and re-derive its
    /// geometry.
    fn setup_resize(
        field_app: Option<Rc<RefCell<FieldApp>>>,
        field_loop: Rc<RefCell<Option<FrameLoop>>>,
        game_app: Option<Rc<RefCell<GameApp>>>,
        game_loop: Rc<RefCell<Option<FrameLoop>>>,
    ) {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(id) = pending.take() {
                window().clear_timeout_with_handle(id);
            }

            let field_app = field_app.clone();
            let field_loop = field_loop.clone();
            let game_app = game_app.clone();
            let game_loop = game_loop.clone();
            let apply = Closure::once(move || {
                if let Some(app) = field_app {
                    if let Some(frame_loop) = field_loop.borrow_mut().take() {
                        frame_loop.cancel();
                    }
                    {
                        let mut a = app.borrow_mut();
                        let (w, h) = fit_canvas(&a.canvas, &a.ctx);
                        let FieldApp { state, rng, .. } = &mut *a;
                        state.resize(w, h, rng);
                        log::info!("wave field resized to {}x{}", w, h);
                    }
                    *field_loop.borrow_mut() = Some(start_field_loop(app));
                }
                if let Some(app) = game_app {
                    // An active session does not survive a resize
                    if let Some(frame_loop) = game_loop.borrow_mut().take() {
                        frame_loop.cancel();
                    }
                    let mut a = app.borrow_mut();
                    let (w, h) = fit_canvas(&a.canvas, &a.ctx);
                    let seed = js_sys::Date::now() as u64;
                    a.state = GameState::new(w, h, seed);
                    a.redraw();
                    log::info!("game resized to {}x{}", w, h);
                }
            });
            let id = window()
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    apply.as_ref().unchecked_ref(),
                    150,
                )
                .unwrap_or(0);
            apply.forget();
            pending.set(Some(id));
        });
        let _ =
            window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Raccoon Dash (native) - headless smoke run");

    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive one scripted session: jump whenever a can gets close, report the
/// score. Exercises the whole sim without a browser.
#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use raccoon_dash::runner::{GameState, Phase, TickInput, tick};
    use raccoon_dash::{HighScore, Theme};

    let mut state = GameState::new(800.0, 400.0, 42);
    let mut high = HighScore::load();

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, Theme::Light, 0.0);

    let mut now = 0.0;
    for _ in 0..20_000 {
        now += 1000.0 / 60.0;
        let near_can = state.obstacles.iter().any(|o| {
            let gap = o.x - (state.player.pos.x + state.player.size.x);
            gap > 0.0 && gap < state.speed * 12.0
        });
        let input = TickInput {
            jump: near_can,
            ..Default::default()
        };
        tick(&mut state, &input, Theme::Light, now);
        if state.phase == Phase::GameOver {
            break;
        }
    }

    high.record(state.score);
    println!(
        "session over: score {} (best {}), difficulty {:.1}, speed {:.1}",
        state.score, high.best, state.difficulty, state.speed
    );
}
