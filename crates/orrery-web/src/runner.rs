use orrery_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer,
    AssetManifest, SoundBank, ProtocolLayout,
    run_frame, build_render_buffer,
};
use orrery_engine::bridge::protocol::{
    HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT,
    HEADER_SOUND_COUNT, HEADER_EVENT_COUNT, HEADER_OVERLAY_SERIAL,
};
use orrery_engine::systems::text::labels_json;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete scene (e.g., `scale-toggle`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    header: [f32; HEADER_FLOATS],
    /// Flat sound events (id, volume, looped, command) for SharedArrayBuffer reads.
    sound_buffer: Vec<f32>,
    /// Flat game events (kind, a, b, c).
    event_buffer: Vec<f32>,
    font: Option<String>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let mut header = [0.0; HEADER_FLOATS];
        layout.write_capacities(&mut header);

        Self {
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            sound_buffer: Vec::with_capacity(config.max_sounds * 4),
            event_buffer: Vec::with_capacity(config.max_events * 4),
            game,
            layout,
            config,
            initialized: false,
            header,
            font: None,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Register the sounds and font listed in a JSON manifest.
    /// A malformed manifest is logged and leaves the current bank in place.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.audio = SoundBank::from_manifest(&manifest);
                self.font = manifest.font;
                log::info!("manifest: {} sounds", self.ctx.audio.len());
            }
            Err(err) => log::error!("invalid asset manifest: {}", err),
        }
    }

    /// Run one displayed frame: game logic, physics, tweens, then pack buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        run_frame(&mut self.game, &mut self.ctx, &mut self.input, dt);

        build_render_buffer(
            self.ctx.scene.iter(),
            &mut self.render_buffer,
            self.config.max_instances,
        );

        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }
        self.render_buffer.instances.truncate(self.config.max_instances);

        if self.ctx.sounds.len() > self.config.max_sounds {
            log::warn!(
                "dropping {} sound events over capacity",
                self.ctx.sounds.len() - self.config.max_sounds
            );
        }
        self.sound_buffer.clear();
        for sound in self.ctx.sounds.iter().take(self.config.max_sounds) {
            self.sound_buffer.extend_from_slice(&sound.to_floats());
        }

        self.event_buffer.clear();
        for event in self.ctx.events.iter().take(self.config.max_events) {
            self.event_buffer.extend_from_slice(&[event.kind, event.a, event.b, event.c]);
        }

        self.header[HEADER_FRAME_COUNTER] = self.ctx.clock.frame() as f32;
        self.header[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        self.header[HEADER_SOUND_COUNT] = self.sound_events_len() as f32;
        self.header[HEADER_EVENT_COUNT] = self.game_events_len() as f32;
        self.header[HEADER_OVERLAY_SERIAL] = self.ctx.overlay_serial() as f32;
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.render_buffer.camera as *const _ as *const f32
    }

    pub fn sound_events_ptr(&self) -> *const f32 {
        self.sound_buffer.as_ptr()
    }

    /// Number of sound events (not floats) this frame.
    pub fn sound_events_len(&self) -> u32 {
        (self.sound_buffer.len() / 4) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr()
    }

    pub fn game_events_len(&self) -> u32 {
        (self.event_buffer.len() / 4) as u32
    }

    // ---- JSON accessors (read rarely, when a serial changes or at startup) ----

    /// Current overlay, or `null` when it is closed.
    pub fn overlay_json(&self) -> String {
        serde_json::to_string(&self.ctx.overlay()).unwrap_or_else(|err| {
            log::error!("overlay serialization failed: {}", err);
            "null".to_string()
        })
    }

    pub fn sound_table_json(&self) -> String {
        self.ctx.audio.sound_table_json().unwrap_or_else(|err| {
            log::error!("sound table serialization failed: {}", err);
            "[]".to_string()
        })
    }

    pub fn labels_json(&self) -> String {
        labels_json(self.ctx.scene.iter()).unwrap_or_else(|err| {
            log::error!("label serialization failed: {}", err);
            "[]".to_string()
        })
    }

    pub fn font_path(&self) -> Option<String> {
        self.font.clone()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
