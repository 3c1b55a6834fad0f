//! End-to-end toolbar scenarios driven through the public API.

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rounded_toolbar::prelude::*;
use rounded_toolbar::render::{Rect, RecordingRenderer, Renderer, Size};
use rounded_toolbar::Signal;

/// Fixed-size item that records the arguments of every draw call.
struct RecordingItem {
    width: f32,
    height: f32,
    tooltip: Option<String>,
    selected: bool,
    bounds: Rect,
    draws: Arc<Mutex<Vec<(f32, f32, bool)>>>,
    selection_changed: Signal<SelectionChanged>,
}

impl RecordingItem {
    fn new(width: f32, height: f32, draws: &Arc<Mutex<Vec<(f32, f32, bool)>>>) -> Self {
        Self {
            width,
            height,
            tooltip: None,
            selected: false,
            bounds: Rect::ZERO,
            draws: draws.clone(),
            selection_changed: Signal::new(),
        }
    }
}

impl Drawable for RecordingItem {
    fn draw(&self, _renderer: &mut dyn Renderer, x: f32, container_height: f32, is_last: bool) {
        self.draws.lock().push((x, container_height, is_last));
    }
}

impl ToolItem for RecordingItem {
    fn selection(&self) -> bool {
        self.selected
    }

    fn set_selection(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn tooltip_text(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    fn selection_changed(&self) -> &Signal<SelectionChanged> {
        &self.selection_changed
    }
}

struct Fixture {
    surface: HostSurface,
    toolbar: RoundedToolbar,
    ids: Vec<ItemId>,
    draws: Arc<Mutex<Vec<(f32, f32, bool)>>>,
    notifications: Arc<Mutex<Vec<SelectionChanged>>>,
}

/// Three recording items: 30x20, 40x25 and 50x18.
fn fixture() -> Fixture {
    let surface = HostSurface::new();
    let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
    let draws = Arc::new(Mutex::new(Vec::new()));
    let notifications = Arc::new(Mutex::new(Vec::new()));

    let mut ids = Vec::new();
    for (width, height) in [(30.0, 20.0), (40.0, 25.0), (50.0, 18.0)] {
        let id = RecordingItem::new(width, height, &draws).attach(&mut toolbar).unwrap();
        let log = notifications.clone();
        toolbar
            .item_ref(id)
            .unwrap()
            .selection_changed()
            .connect(move |change: &SelectionChanged| log.lock().push(*change));
        ids.push(id);
    }

    Fixture {
        surface,
        toolbar,
        ids,
        draws,
        notifications,
    }
}

fn release_at(x: f32, y: f32) -> ToolbarEvent {
    PointerReleaseEvent::new(MouseButton::Left, (x, y)).into()
}

fn selected(toolbar: &RoundedToolbar) -> Vec<bool> {
    toolbar
        .items()
        .unwrap()
        .into_iter()
        .map(|id| toolbar.item_ref(id).unwrap().selection())
        .collect()
}

#[test]
fn preferred_size_and_hit_test() {
    let mut f = fixture();
    assert_eq!(f.toolbar.compute_size(0.0, 0.0).unwrap(), Size::new(120.0, 25.0));
    assert_eq!(f.toolbar.compute_size(150.0, 10.0).unwrap(), Size::new(150.0, 25.0));

    // Unsized toolbar: every item spans the preferred height.
    let first = f.toolbar.item_ref(f.ids[0]).unwrap().bounds();
    assert_eq!(first, Rect::new(0.0, 0.0, 30.0, 25.0));

    f.toolbar.event(&release_at(35.0, 10.0)).unwrap();
    assert_eq!(selected(&f.toolbar), vec![false, true, false]);
    assert_eq!(f.toolbar.item_at((35.0, 10.0)).unwrap(), Some(f.ids[1]));
}

#[test]
fn radio_release_notifies_every_item() {
    let mut f = fixture();
    f.toolbar.event(&release_at(35.0, 10.0)).unwrap();

    let notifications = f.notifications.lock();
    assert_eq!(notifications.len(), 3);
    assert_eq!(
        notifications.last(),
        Some(&SelectionChanged {
            item: f.ids[1],
            selected: true
        })
    );
    assert!(notifications[..2].iter().all(|change| !change.selected));
}

#[test]
fn multi_release_notifies_once() {
    let mut f = fixture();
    f.toolbar.set_multi_selection(true).unwrap();
    f.toolbar.event(&release_at(35.0, 10.0)).unwrap();
    f.toolbar.event(&release_at(80.0, 10.0)).unwrap();

    assert_eq!(f.notifications.lock().len(), 2);
    assert_eq!(selected(&f.toolbar), vec![false, true, true]);
}

#[test]
fn attaching_selected_item_in_radio_mode_keeps_one_selection() {
    let mut f = fixture();
    f.toolbar.event(&release_at(35.0, 10.0)).unwrap();
    f.notifications.lock().clear();

    let mut preselected = RecordingItem::new(20.0, 20.0, &f.draws);
    preselected.selected = true;
    let id = preselected.attach(&mut f.toolbar).unwrap();

    assert_eq!(selected(&f.toolbar), vec![false, false, false, true]);
    assert_eq!(f.toolbar.index_of(id).unwrap(), Some(3));
    let notifications = f.notifications.lock();
    assert_eq!(notifications.len(), 3);
    assert!(notifications.iter().all(|change| !change.selected));
}

#[test]
fn switching_to_radio_keeps_existing_selection_until_next_release() {
    let mut f = fixture();
    f.toolbar.set_multi_selection(true).unwrap();
    f.toolbar.event(&release_at(5.0, 10.0)).unwrap();
    f.toolbar.event(&release_at(35.0, 10.0)).unwrap();

    f.toolbar.set_multi_selection(false).unwrap();
    assert_eq!(selected(&f.toolbar), vec![true, true, false]);

    f.toolbar.event(&release_at(80.0, 10.0)).unwrap();
    assert_eq!(selected(&f.toolbar), vec![false, false, true]);
}

#[test]
fn paint_passes_offsets_and_last_flag() {
    let mut f = fixture();
    f.toolbar.set_size(Size::new(120.0, 25.0)).unwrap();

    let mut renderer = RecordingRenderer::new();
    f.toolbar.paint(&mut renderer).unwrap();
    let first: Vec<_> = f.draws.lock().drain(..).collect();

    assert_eq!(
        first,
        vec![(0.0, 25.0, false), (30.0, 25.0, false), (70.0, 25.0, true)]
    );

    let mut again = RecordingRenderer::new();
    f.toolbar.paint(&mut again).unwrap();
    assert_eq!(*f.draws.lock(), first);
    assert_eq!(renderer.commands(), again.commands());
}

#[test]
fn item_bounds_follow_container_height() {
    let mut f = fixture();
    f.toolbar.set_size(Size::new(300.0, 40.0)).unwrap();

    let bounds: Vec<Rect> = f
        .ids
        .iter()
        .map(|&id| f.toolbar.item_ref(id).unwrap().bounds())
        .collect();
    assert_eq!(
        bounds,
        vec![
            Rect::new(0.0, 0.0, 30.0, 40.0),
            Rect::new(30.0, 0.0, 40.0, 40.0),
            Rect::new(70.0, 0.0, 50.0, 40.0),
        ]
    );

    // Space to the right of the last item is not hit-testable.
    assert!(!f.toolbar.event(&release_at(200.0, 10.0)).unwrap());
}

#[test]
fn index_past_end_is_invalid() {
    let f = fixture();
    assert!(f.toolbar.item(2).is_ok());
    assert!(matches!(f.toolbar.item(3), Err(ToolbarError::InvalidArgument(_))));
}

#[test]
fn wrong_thread_access_is_rejected() {
    let f = fixture();
    let surface = f.surface.clone();
    let toolbar = f.toolbar;

    let (count, paint, create) = thread::spawn(move || {
        let mut renderer = RecordingRenderer::new();
        (
            matches!(toolbar.item_count(), Err(ToolbarError::WrongThread(_))),
            matches!(toolbar.paint(&mut renderer), Err(ToolbarError::WrongThread(_))),
            matches!(
                RoundedToolbar::new(&surface, StyleFlags::NONE),
                Err(ToolbarError::WrongThread(_))
            ),
        )
    })
    .join()
    .unwrap();

    assert!(count);
    assert!(paint);
    assert!(create);
}

#[test]
fn disposing_parent_disposes_toolbar() {
    let mut f = fixture();
    f.surface.dispose();

    assert!(f.toolbar.is_disposed());
    assert!(matches!(f.toolbar.item(0), Err(ToolbarError::Disposed)));
    assert!(matches!(
        f.toolbar.event(&release_at(35.0, 10.0)),
        Err(ToolbarError::Disposed)
    ));
    assert!(f.notifications.lock().is_empty());
}

#[test]
fn disposed_item_no_longer_notified() {
    let mut f = fixture();
    let removed = f.toolbar.dispose_item(f.ids[0]).unwrap();
    assert_eq!(removed.width(), 30.0);

    // Index 0 is now the 40px item, starting at x = 0.
    f.toolbar.event(&release_at(10.0, 10.0)).unwrap();

    let notifications = f.notifications.lock();
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|change| change.item != f.ids[0]));
    assert_eq!(selected(&f.toolbar), vec![true, false]);
}

#[test]
fn toolbar_from_toml_config() {
    let config = ToolbarConfig::from_toml_str(
        r#"
        corner_radius = 4
        multi_selection = true
        end_gradient_color = [100, 110, 120]
        "#,
    )
    .unwrap();

    let surface = HostSurface::new();
    let toolbar = RoundedToolbar::with_config(&surface, StyleFlags::NONE, config).unwrap();
    assert_eq!(toolbar.corner_radius().unwrap(), 4);
    assert!(toolbar.is_multi_selection().unwrap());
    assert_eq!(toolbar.end_gradient_color().unwrap().to_rgb8(), [100, 110, 120]);
    assert_eq!(toolbar.start_gradient_color().unwrap().to_rgb8(), [245, 245, 245]);
}

#[test]
fn malformed_config_is_reported() {
    let err = ToolbarConfig::from_toml_str("corner_radius = \"round\"").unwrap_err();
    assert!(matches!(err, ToolbarError::Config(_)));
    assert!(err.to_string().starts_with("invalid toolbar configuration"));
}

#[test]
fn tooltip_tracks_hovered_item() {
    let surface = HostSurface::new();
    let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
    let draws = Arc::new(Mutex::new(Vec::new()));

    let mut named = RecordingItem::new(30.0, 20.0, &draws);
    named.tooltip = Some("Cut".to_owned());
    named.attach(&mut toolbar).unwrap();
    RecordingItem::new(30.0, 20.0, &draws).attach(&mut toolbar).unwrap();

    toolbar.event(&PointerHoverEvent::new((10.0, 10.0)).into()).unwrap();
    assert_eq!(toolbar.tooltip_text().unwrap(), "Cut");

    toolbar.event(&PointerHoverEvent::new((40.0, 10.0)).into()).unwrap();
    assert_eq!(toolbar.tooltip_text().unwrap(), "");
}
