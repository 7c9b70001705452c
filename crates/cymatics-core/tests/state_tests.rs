// Tests for the interactive state machine: sliders, buttons, camera drag.

use cymatics_core::{AppState, Band, ColorMap, DragTarget, InputEvent};
use glam::Vec2;

fn app() -> AppState {
    AppState::new(1600, 900)
}

fn press(state: &mut AppState, x: f32, y: f32) {
    state.handle_event(InputEvent::PointerPressed(Vec2::new(x, y)));
}

fn drag_to(state: &mut AppState, x: f32, y: f32) {
    state.handle_event(InputEvent::PointerMoved(Vec2::new(x, y)));
}

fn release(state: &mut AppState) {
    state.handle_event(InputEvent::PointerReleased);
}

#[test]
fn total_frequency_sums_scaled_bands() {
    let mut s = app();
    s.sliders.set(Band::Hz, 1.0);
    s.sliders.set(Band::Khz, 2.0);
    s.sliders.set(Band::Mhz, 0.5);
    s.sliders.set(Band::Ghz, 0.25);
    let expected = 1.0 + 2_000.0 + 500_000.0 + 250_000_000.0;
    assert!((s.total_frequency() - expected).abs() < 1e-6);
}

#[test]
fn sliders_clamp_to_band_range() {
    let mut s = app();
    s.sliders.set(Band::Hz, 5_000.0);
    assert_eq!(s.sliders.get(Band::Hz), 999.0);
    s.sliders.set(Band::Mhz, -3.0);
    assert_eq!(s.sliders.get(Band::Mhz), 0.0);
    s.sliders.set(Band::Ghz, f64::NAN);
    assert_eq!(s.sliders.get(Band::Ghz), 0.0);
}

#[test]
fn readout_formats_two_decimals() {
    let mut s = app();
    assert_eq!(s.readout(), "Total Frequency: 0.00 Hz");
    s.sliders.set(Band::Hz, 440.0);
    assert_eq!(s.readout(), "Total Frequency: 440.00 Hz");
}

#[test]
fn initial_state_matches_defaults() {
    let s = app();
    assert_eq!(s.camera.elevation_deg, 30.0);
    assert_eq!(s.camera.azimuth_deg, 45.0);
    assert_eq!(s.colormap(), ColorMap::Viridis);
    assert_eq!(s.drag(), DragTarget::Idle);
    assert_eq!(s.time_step(), 0);
    assert!(s.is_running());
    assert!(!s.save_requested());
}

#[test]
fn pressing_a_slider_sets_its_value() {
    let mut s = app();
    // Hz slider spans x 100..300 on the row at y = 800.
    press(&mut s, 200.0, 810.0);
    assert_eq!(s.drag(), DragTarget::Slider(Band::Hz));
    assert!((s.sliders.get(Band::Hz) - 499.5).abs() < 1e-9);
}

#[test]
fn dragging_a_slider_clamps_past_its_ends() {
    let mut s = app();
    press(&mut s, 450.0, 810.0);
    assert_eq!(s.drag(), DragTarget::Slider(Band::Khz));
    drag_to(&mut s, 1_500.0, 100.0);
    assert_eq!(s.sliders.get(Band::Khz), 999.0);
    drag_to(&mut s, 0.0, 810.0);
    assert_eq!(s.sliders.get(Band::Khz), 0.0);
}

#[test]
fn slider_drag_leaves_camera_alone() {
    let mut s = app();
    let camera = s.camera;
    press(&mut s, 750.0, 810.0);
    drag_to(&mut s, 790.0, 700.0);
    assert_eq!(s.camera, camera);
    assert!(s.sliders.get(Band::Mhz) > 0.0);
}

#[test]
fn dragging_empty_space_orbits_camera() {
    let mut s = app();
    press(&mut s, 300.0, 300.0);
    assert_eq!(
        s.drag(),
        DragTarget::Camera {
            last: Vec2::new(300.0, 300.0)
        }
    );
    drag_to(&mut s, 350.0, 310.0);
    assert!((s.camera.elevation_deg - 32.0).abs() < 1e-4);
    assert!((s.camera.azimuth_deg - 55.0).abs() < 1e-4);
    // Deltas are taken from the previous sample, not the press point.
    drag_to(&mut s, 350.0, 320.0);
    assert!((s.camera.elevation_deg - 34.0).abs() < 1e-4);
    assert!((s.camera.azimuth_deg - 55.0).abs() < 1e-4);
}

#[test]
fn camera_drag_leaves_sliders_alone() {
    let mut s = app();
    press(&mut s, 300.0, 300.0);
    drag_to(&mut s, 200.0, 810.0);
    assert_eq!(s.total_frequency(), 0.0);
}

#[test]
fn release_ends_any_drag() {
    let mut s = app();
    press(&mut s, 200.0, 810.0);
    release(&mut s);
    assert_eq!(s.drag(), DragTarget::Idle);
    let value = s.sliders.get(Band::Hz);
    drag_to(&mut s, 290.0, 810.0);
    assert_eq!(s.sliders.get(Band::Hz), value);

    press(&mut s, 300.0, 300.0);
    release(&mut s);
    let camera = s.camera;
    drag_to(&mut s, 400.0, 400.0);
    assert_eq!(s.camera, camera);
}

#[test]
fn reset_button_zeroes_every_slider() {
    let mut s = app();
    for band in Band::ALL {
        s.sliders.set(band, band.max());
    }
    // Reset button sits at (w - 200, h - 100).
    press(&mut s, 1_450.0, 820.0);
    assert_eq!(s.total_frequency(), 0.0);
    assert_eq!(s.readout(), "Total Frequency: 0.00 Hz");
    assert_eq!(s.drag(), DragTarget::Idle);
}

#[test]
fn reset_button_top_left_corner_is_live() {
    let mut s = app();
    s.sliders.set(Band::Hz, 440.0);
    s.sliders.set(Band::Ghz, 1.0);
    press(&mut s, 1_400.0, 800.0);
    for band in Band::ALL {
        assert_eq!(s.sliders.get(band), 0.0);
    }
    assert_eq!(s.total_frequency(), 0.0);
    assert_eq!(s.readout(), "Total Frequency: 0.00 Hz");
}

#[test]
fn colormap_button_cycles_through_all_maps() {
    let mut s = app();
    let n = ColorMap::ALL.len();
    for i in 1..=n {
        // Color map button sits at (w - 400, h - 100).
        press(&mut s, 1_250.0, 820.0);
        release(&mut s);
        assert_eq!(s.colormap_index(), i % n);
    }
    assert_eq!(s.colormap(), ColorMap::Viridis);
}

#[test]
fn resize_moves_right_anchored_buttons() {
    let mut s = app();
    s.handle_event(InputEvent::Resized {
        width: 2_000,
        height: 700,
    });
    assert_eq!(s.window_size(), (2_000, 700));
    for band in Band::ALL {
        s.sliders.set(band, 1.0);
    }
    // The old reset position is now empty space.
    press(&mut s, 1_450.0, 820.0);
    assert!(matches!(s.drag(), DragTarget::Camera { .. }));
    release(&mut s);
    assert!(s.total_frequency() > 0.0);

    press(&mut s, 1_850.0, 620.0);
    assert_eq!(s.total_frequency(), 0.0);
}

#[test]
fn sliders_win_where_widgets_overlap() {
    let mut s = AppState::new(1_000, 700);
    // Reset (800..900) overlaps the MHz slider (700..900) at this width.
    press(&mut s, 850.0, 620.0);
    assert_eq!(s.drag(), DragTarget::Slider(Band::Mhz));
}

#[test]
fn save_key_tracks_held_state() {
    let mut s = app();
    s.handle_event(InputEvent::SaveKey { held: true });
    assert!(s.save_requested());
    s.handle_event(InputEvent::SaveKey { held: false });
    assert!(!s.save_requested());
}

#[test]
fn focus_loss_drops_drag_and_save_key() {
    let mut s = app();
    s.handle_event(InputEvent::SaveKey { held: true });
    press(&mut s, 300.0, 300.0);
    s.handle_event(InputEvent::FocusLost);
    assert!(!s.save_requested());
    assert_eq!(s.drag(), DragTarget::Idle);
    let camera = s.camera;
    drag_to(&mut s, 400.0, 400.0);
    assert_eq!(s.camera, camera);

    press(&mut s, 200.0, 810.0);
    s.handle_event(InputEvent::FocusLost);
    let value = s.sliders.get(Band::Hz);
    drag_to(&mut s, 290.0, 810.0);
    assert_eq!(s.sliders.get(Band::Hz), value);
}

#[test]
fn quit_stops_the_loop() {
    let mut s = app();
    s.handle_event(InputEvent::Quit);
    assert!(!s.is_running());
}

#[test]
fn time_step_advances_by_one_per_frame() {
    let mut s = app();
    for _ in 0..3 {
        s.begin_frame();
        s.advance_time();
    }
    assert_eq!(s.time_step(), 3);
}

#[test]
fn camera_stays_finite_past_the_pole() {
    let mut s = app();
    press(&mut s, 300.0, 100.0);
    drag_to(&mut s, 300.0, 700.0);
    assert!((s.camera.elevation_deg - 150.0).abs() < 1e-3);
    let view = s.camera.view_matrix(5.0);
    assert!(view.is_finite());
}
