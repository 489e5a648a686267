use super::*;
use crate::settings::{Settings, SETTINGS_KEY};
use eframe::App as _;
use std::collections::HashMap;

fn screen_rect() -> egui::Rect {
    egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1200.0, 800.0))
}

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    mut f: impl FnMut(&egui::Context),
) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(screen_rect());
    raw.events = events;

    ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::light());
        f(ctx);
    })
}

/// Run one frame that only shows the canvas.
fn canvas_frame(
    ctx: &egui::Context,
    app: &mut StringArtApp,
    events: Vec<egui::Event>,
) -> egui::FullOutput {
    run_ui_with(ctx, events, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    })
}

fn press(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

fn release(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed: false,
        modifiers: egui::Modifiers::NONE,
    }]
}

fn key(key: egui::Key) -> Vec<egui::Event> {
    vec![egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }]
}

/// Click at a canvas-local position, i.e. offset by where the canvas was laid out.
fn click_canvas(ctx: &egui::Context, app: &mut StringArtApp, local: egui::Pos2) {
    let pos = local + app.canvas_rect.min.to_vec2();
    let _ = canvas_frame(ctx, app, press(pos));
    let _ = canvas_frame(ctx, app, release(pos));
}

#[derive(Default)]
struct MemoryStorage {
    values: HashMap<String, String>,
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

fn app_with_pitch(pitch: f32) -> StringArtApp {
    StringArtApp::with_settings(Settings {
        grid_pitch: pitch,
        ..Settings::default()
    })
}

#[test]
fn first_frame_sizes_editor_to_canvas() {
    let mut app = StringArtApp::default();
    let ctx = egui::Context::default();

    let _ = canvas_frame(&ctx, &mut app, vec![]);

    assert!(app.canvas_rect.is_positive());
    assert_eq!(app.editor.viewport().size(), app.canvas_rect.size());
    assert_eq!(app.editor.minimap().size().x, crate::constants::MINIMAP_WIDTH);
}

#[test]
fn draw_mode_clicks_create_segment() {
    let mut app = app_with_pitch(50.0);
    app.editor.set_mode(EditorMode::Draw);
    let ctx = egui::Context::default();

    // First frame lays out the canvas so its origin is known
    let _ = canvas_frame(&ctx, &mut app, vec![]);

    click_canvas(&ctx, &mut app, egui::pos2(101.0, 99.0));
    assert_eq!(
        app.editor.active_point().map(|p| p.pos()),
        Some(egui::pos2(100.0, 100.0))
    );

    click_canvas(&ctx, &mut app, egui::pos2(200.0, 102.0));
    assert_eq!(app.editor.segments().len(), 1);
    let segment = app
        .editor
        .selected_segment()
        .expect("new segment should be selected");
    assert_eq!(segment.start.pos(), egui::pos2(100.0, 100.0));
    assert_eq!(segment.end.pos(), egui::pos2(200.0, 100.0));
}

#[test]
fn click_away_from_grid_is_ignored() {
    let mut app = app_with_pitch(50.0);
    app.editor.set_mode(EditorMode::Draw);
    let ctx = egui::Context::default();
    let _ = canvas_frame(&ctx, &mut app, vec![]);

    click_canvas(&ctx, &mut app, egui::pos2(125.0, 125.0));

    assert!(app.editor.active_point().is_none());
    assert!(app.editor.points().is_empty());
}

#[test]
fn escape_discards_new_segment() {
    let mut app = app_with_pitch(50.0);
    app.editor.set_mode(EditorMode::Draw);
    let ctx = egui::Context::default();
    let _ = canvas_frame(&ctx, &mut app, vec![]);

    click_canvas(&ctx, &mut app, egui::pos2(100.0, 100.0));
    click_canvas(&ctx, &mut app, egui::pos2(200.0, 200.0));
    assert_eq!(app.editor.segments().len(), 1);

    let _ = run_ui_with(&ctx, key(egui::Key::Escape), |ctx| {
        app.handle_edit_keys(ctx);
    });

    assert!(app.editor.segments().is_empty());
    assert!(app.editor.points().is_empty());
    assert!(app.editor.selected_segment().is_none());
}

#[test]
fn select_click_then_delete_key_removes_segment() {
    let mut app = app_with_pitch(50.0);
    let ctx = egui::Context::default();
    let _ = canvas_frame(&ctx, &mut app, vec![]);

    app.editor.set_mode(EditorMode::Draw);
    click_canvas(&ctx, &mut app, egui::pos2(100.0, 100.0));
    click_canvas(&ctx, &mut app, egui::pos2(300.0, 100.0));
    let _ = run_ui_with(&ctx, key(egui::Key::Enter), |ctx| {
        app.handle_edit_keys(ctx);
    });
    assert!(app.editor.selected_segment().is_none());

    app.editor.set_mode(EditorMode::Select);
    click_canvas(&ctx, &mut app, egui::pos2(200.0, 103.0));
    assert!(app.editor.selected_segment().is_some());

    let _ = run_ui_with(&ctx, key(egui::Key::Delete), |ctx| {
        app.handle_edit_keys(ctx);
    });

    assert!(app.editor.segments().is_empty());
    assert!(app.editor.points().is_empty());
}

#[test]
fn move_drag_pans_zoomed_view() {
    let mut app = StringArtApp::default();
    let ctx = egui::Context::default();
    let _ = canvas_frame(&ctx, &mut app, vec![]);

    app.editor.zoom_in();
    app.editor.set_mode(EditorMode::Move);
    let before = app.editor.viewport().offset();

    let origin = app.canvas_rect.min.to_vec2();
    let start = egui::pos2(300.0, 300.0) + origin;
    let end = egui::pos2(350.0, 340.0) + origin;
    let _ = canvas_frame(&ctx, &mut app, press(start));
    assert!(app.editor.is_dragging());
    let _ = canvas_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(end)]);
    let _ = canvas_frame(&ctx, &mut app, release(end));

    let after = app.editor.viewport().offset();
    assert!((after.x - (before.x + 50.0)).abs() < 1e-3);
    assert!((after.y - (before.y + 40.0)).abs() < 1e-3);
    assert!(!app.editor.is_dragging());
}

#[test]
fn move_drag_at_unit_scale_stays_clamped() {
    let mut app = StringArtApp::default();
    app.editor.set_mode(EditorMode::Move);
    let ctx = egui::Context::default();
    let _ = canvas_frame(&ctx, &mut app, vec![]);

    let origin = app.canvas_rect.min.to_vec2();
    let _ = canvas_frame(&ctx, &mut app, press(egui::pos2(300.0, 300.0) + origin));
    let _ = canvas_frame(
        &ctx,
        &mut app,
        vec![egui::Event::PointerMoved(egui::pos2(100.0, 50.0) + origin)],
    );

    assert_eq!(app.editor.viewport().offset(), egui::Vec2::ZERO);
}

#[test]
fn canvas_paints_entities_and_minimap() {
    let mut app = StringArtApp::default();
    let ctx = egui::Context::default();
    let _ = canvas_frame(&ctx, &mut app, vec![]);
    app.editor.add_random_circle();

    let output = canvas_frame(&ctx, &mut app, vec![]);

    assert!(!output.shapes.is_empty());
}

#[test]
fn panels_render_with_and_without_selection() {
    let mut app = app_with_pitch(50.0);
    let ctx = egui::Context::default();

    let render_all = |app: &mut StringArtApp, ctx: &egui::Context| {
        let _ = run_ui_with(ctx, vec![], |ctx| {
            egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| app.draw_toolbar(ui));
            egui::SidePanel::right("segment_panel").show(ctx, |ui| app.draw_segment_panel(ui));
            egui::CentralPanel::default().show(ctx, |ui| app.draw_canvas(ui));
        });
    };

    render_all(&mut app, &ctx);

    app.editor.set_mode(EditorMode::Draw);
    app.editor.handle_pointer_down(egui::pos2(100.0, 100.0));
    app.editor.handle_pointer_down(egui::pos2(200.0, 100.0));
    assert!(app.editor.selected_segment().is_some());

    render_all(&mut app, &ctx);
    assert_eq!(app.editor.segments().len(), 1);
}

#[test]
fn save_writes_settings_with_current_grid() {
    let mut app = app_with_pitch(50.0);
    app.editor.split_grid();
    app.settings.show_minimap = false;

    let mut storage = MemoryStorage::default();
    app.save(&mut storage);

    assert!(storage.values.contains_key(SETTINGS_KEY));
    let loaded = Settings::load(Some(&storage as &dyn eframe::Storage));
    assert_eq!(loaded.grid_pitch, 25.0);
    assert!(!loaded.show_minimap);
}

#[test]
fn enter_applies_pending_point_count_before_confirming() {
    let mut app = app_with_pitch(50.0);
    let ctx = egui::Context::default();
    let _ = canvas_frame(&ctx, &mut app, vec![]);

    app.editor.set_mode(EditorMode::Draw);
    click_canvas(&ctx, &mut app, egui::pos2(100.0, 100.0));
    click_canvas(&ctx, &mut app, egui::pos2(300.0, 100.0));
    let id = app.editor.selected_segment().map(|s| s.id);
    app.editor.set_pending_point_count(5);

    let _ = run_ui_with(&ctx, key(egui::Key::Enter), |ctx| {
        app.handle_edit_keys(ctx);
    });

    assert!(app.editor.selected_segment().is_none());
    let segment = app
        .editor
        .segments()
        .iter()
        .find(|s| Some(s.id) == id)
        .expect("segment should survive confirm");
    assert_eq!(segment.point_count, 5);
    assert_eq!(app.editor.points().len(), 5);
}
