use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use tempfile::tempdir;

use super::Canvas;
use crate::kernel::services::adapters::rope_widget::{RopeWidget, RopeWidgetFactory};
use crate::kernel::services::ports::editor::EditorWidget;
use crate::kernel::services::adapters::theme::SettingsThemeSource;
use crate::kernel::services::ports::{
    CanvasSettings, CompletionCandidate, CursorPosition, EditOrigin, HostCommand, HostEvent,
    SurfaceId, ThemePalette,
};
use crate::kernel::Action;

const QUIET: Duration = Duration::from_millis(300);

fn doc1() -> SurfaceId {
    SurfaceId::new("doc1")
}

fn create_test_canvas() -> (Canvas, Receiver<HostCommand>) {
    let (tx, rx) = mpsc::channel();
    let canvas = Canvas::new(
        CanvasSettings::default(),
        Box::new(RopeWidgetFactory),
        Box::new(SettingsThemeSource::new(None, ThemePalette::default())),
        Box::new(tx),
    );
    (canvas, rx)
}

fn rope_widget<'a>(canvas: &'a Canvas, id: &SurfaceId) -> &'a RopeWidget {
    canvas
        .widget(id)
        .unwrap()
        .as_any()
        .downcast_ref::<RopeWidget>()
        .unwrap()
}

#[test]
fn end_to_end_edit_reaches_the_host_once() {
    let t0 = Instant::now();
    let (mut canvas, rx) = create_test_canvas();

    canvas.activate([(doc1(), "a.txt".into(), "hello".to_string())], t0);
    assert_eq!(canvas.widget_count(), 1);
    assert_eq!(rope_widget(&canvas, &doc1()).content(), "hello");
    let surface = canvas.store().state().surface(&doc1()).unwrap();
    assert_eq!((surface.rect.x, surface.rect.y), (0.0, 0.0));
    assert_eq!(surface.z_order, 1);

    canvas.handle_action(Action::SurfaceEdited {
        id: doc1(),
        text: "hello world".to_string(),
        now: t0,
    });
    canvas.tick(t0 + Duration::from_millis(100));
    assert!(rx.try_recv().is_err(), "nothing before the quiet period");

    canvas.tick(t0 + QUIET);
    assert_eq!(
        rx.try_recv().unwrap(),
        HostCommand::Edit {
            id: doc1(),
            text: "hello world".to_string(),
            origin: EditOrigin::Surface,
        }
    );
    assert!(rx.try_recv().is_err(), "exactly one edit for the burst");
}

#[test]
fn inbound_update_lands_in_the_widget() {
    let t0 = Instant::now();
    let (mut canvas, _rx) = create_test_canvas();
    canvas.activate([(doc1(), "a.txt".into(), "hello".to_string())], t0);

    canvas.handle_action(Action::Host {
        event: HostEvent::Update {
            id: doc1(),
            text: "from host".to_string(),
            origin: EditOrigin::Host,
        },
        now: t0,
    });
    canvas.tick(t0 + QUIET);

    assert_eq!(rope_widget(&canvas, &doc1()).content(), "from host");
    // The applied text is now the agreed baseline; no echo goes out.
    let surface = canvas.store().state().surface(&doc1()).unwrap();
    assert_eq!(surface.sync.last_known_external, "from host");
}

#[test]
fn completion_gestures_fetch_then_display() {
    let t0 = Instant::now();
    let (mut canvas, rx) = create_test_canvas();
    canvas.activate([(doc1(), "a.rs".into(), String::new())], t0);

    canvas.handle_action(Action::CompletionTrigger {
        id: doc1(),
        position: CursorPosition { line: 0, column: 4 },
        trigger_char: None,
        now: t0,
    });
    assert_eq!(
        rx.try_recv().unwrap(),
        HostCommand::RequestCompletions {
            id: doc1(),
            position: CursorPosition { line: 0, column: 4 },
            trigger_character: None,
        }
    );

    let item = CompletionCandidate {
        label: "alpha".into(),
        insert_text: "alpha".to_string(),
        kind: Some(3),
        documentation: None,
        sort_text: None,
        filter_text: None,
    };
    canvas.handle_action(Action::Host {
        event: HostEvent::Completions {
            id: doc1(),
            items: vec![item],
        },
        now: t0 + Duration::from_millis(50),
    });

    let shown = rope_widget(&canvas, &doc1()).visible_suggestions();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].label, "alpha");
}

#[test]
fn theme_signal_rederives_widget_colors() {
    let t0 = Instant::now();
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");

    let mut settings = CanvasSettings::default();
    settings.theme.accent = "#111111".to_string();
    std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

    let (tx, _rx) = mpsc::channel();
    let mut canvas = Canvas::new(
        settings.clone(),
        Box::new(RopeWidgetFactory),
        Box::new(SettingsThemeSource::new(
            Some(path.clone()),
            ThemePalette::default(),
        )),
        Box::new(tx),
    );
    canvas.activate([(doc1(), "a.txt".into(), String::new())], t0);
    assert_eq!(rope_widget(&canvas, &doc1()).palette().accent, "#111111");

    settings.theme.accent = "#222222".to_string();
    std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
    canvas.handle_action(Action::Host {
        event: HostEvent::ThemeColors,
        now: t0,
    });
    assert_eq!(rope_widget(&canvas, &doc1()).palette().accent, "#222222");
}

#[test]
fn close_releases_the_widget_and_its_state() {
    let t0 = Instant::now();
    let (mut canvas, rx) = create_test_canvas();
    canvas.activate([(doc1(), "a.txt".into(), "hello".to_string())], t0);

    canvas.handle_action(Action::Host {
        event: HostEvent::Close { id: doc1() },
        now: t0,
    });
    assert_eq!(canvas.widget_count(), 0);
    assert!(canvas.store().state().surfaces.is_empty());

    // Stragglers for the dead id do nothing and send nothing.
    canvas.handle_action(Action::Host {
        event: HostEvent::Update {
            id: doc1(),
            text: "late".to_string(),
            origin: EditOrigin::Host,
        },
        now: t0,
    });
    canvas.tick(t0 + Duration::from_secs(5));
    assert!(rx.try_recv().is_err());
}

#[test]
fn dismiss_then_reopen_reseeds_surfaces() {
    let t0 = Instant::now();
    let (mut canvas, _rx) = create_test_canvas();
    canvas.activate(
        [
            (doc1(), "a.txt".into(), String::new()),
            (SurfaceId::new("doc2"), "b.txt".into(), String::new()),
        ],
        t0,
    );
    assert_eq!(canvas.widget_count(), 2);

    canvas.dismiss();
    assert_eq!(canvas.widget_count(), 0);

    // While dismissed, host lifecycle events must not respawn anything.
    canvas.activate([(doc1(), "a.txt".into(), String::new())], t0);
    assert_eq!(canvas.widget_count(), 0);

    canvas.reopen([(doc1(), "a.txt".into(), String::new())], t0);
    assert_eq!(canvas.widget_count(), 1);
}
