#![cfg(target_arch = "wasm32")]

use playground_engine::Playground;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn playground_runs_in_the_browser() {
    playground_engine::init();
    let mut playground = Playground::new(800.0, 600.0);
    assert_eq!(playground.wall_count(), 4);

    playground.spawn_shape(400.0, 300.0);
    playground.step();
    assert_eq!(playground.extract_bodies(), 5);
    assert_eq!(playground.render_buffer_len(), 5 * playground.render_stride());

    playground.set_wall_type("circle").unwrap();
    playground.step();
    assert_eq!(playground.wall_count(), 30);
    assert!(playground.set_wall_type("hexagon").is_err());

    playground.dispose();
    assert!(playground.disposed());
}
