use wasm_bindgen::prelude::*;

mod apply;
mod bodies;
mod game;
mod profiles;
mod scene;
use game::ScaleToggle;

orrery_web::export_game!(ScaleToggle, "scale-toggle");
