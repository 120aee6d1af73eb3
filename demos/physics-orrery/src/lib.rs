use wasm_bindgen::prelude::*;

mod drag;
mod game;
mod layout;
mod planets;
mod sounds;
use game::PhysicsOrrery;

orrery_web::export_game!(PhysicsOrrery, "physics-orrery");
