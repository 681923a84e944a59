//! Tests exercising models, hosts, and data sources through the public API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use horizon_modelsource::{
    BindableView, DataSourceDelegate, DecorativeKind, DecorativeSlot, EditOperation, GridView,
    GridViewDataSource, ItemSlot, ListView, ListViewDataSource, ReuseKey, ReuseView, Section,
    SectionedModel, Size, SlotIndex, ViewHost, ViewOrigin,
};

#[derive(Default)]
struct RowCell {
    text: Option<String>,
}

impl BindableView<ListView> for RowCell {
    type Model = String;

    fn origin() -> ViewOrigin {
        ViewOrigin::Code
    }

    fn static_size() -> Option<f32> {
        Some(44.0)
    }

    fn set_model(&mut self, model: String) {
        self.text = Some(model);
    }
}

#[derive(Default)]
struct BadgeCell {
    count: Option<u32>,
}

impl BindableView<ListView> for BadgeCell {
    type Model = u32;

    fn origin() -> ViewOrigin {
        ViewOrigin::Code
    }

    fn set_model(&mut self, model: u32) {
        self.count = Some(model);
    }
}

#[derive(Default)]
struct ListHeader {
    title: Option<String>,
}

impl BindableView<ListView> for ListHeader {
    type Model = String;

    fn origin() -> ViewOrigin {
        ViewOrigin::Code
    }

    fn static_size() -> Option<f32> {
        Some(24.0)
    }

    fn set_model(&mut self, model: String) {
        self.title = Some(model);
    }
}

#[derive(Default)]
struct TileCell {
    label: Option<String>,
}

impl BindableView<GridView> for TileCell {
    type Model = String;

    fn origin() -> ViewOrigin {
        ViewOrigin::Code
    }

    fn static_size() -> Option<Size> {
        Some(Size::new(160.0, 90.0))
    }

    fn set_model(&mut self, model: String) {
        self.label = Some(model);
    }
}

#[derive(Default)]
struct GridBand {
    label: Option<String>,
}

impl BindableView<GridView> for GridBand {
    type Model = String;

    fn origin() -> ViewOrigin {
        ViewOrigin::Code
    }

    fn static_size() -> Option<Size> {
        Some(Size::new(320.0, 32.0))
    }

    fn set_model(&mut self, model: String) {
        self.label = Some(model);
    }
}

#[derive(Default)]
struct ListHost {
    factories: HashMap<ReuseKey, Box<dyn Fn() -> Box<dyn ReuseView>>>,
    registered: Vec<ReuseKey>,
}

impl ListHost {
    fn install<C>(&mut self)
    where
        C: BindableView<ListView> + Default,
    {
        self.factories.insert(
            C::reuse_key(),
            Box::new(|| Box::new(C::default()) as Box<dyn ReuseView>),
        );
    }
}

impl ViewHost<ListView> for ListHost {
    fn register_cell(&mut self, key: &ReuseKey, _origin: &ViewOrigin) {
        if !self.registered.contains(key) {
            self.registered.push(key.clone());
        }
    }

    fn register_decorative(&mut self, _kind: DecorativeKind, key: &ReuseKey, _origin: &ViewOrigin) {
        if !self.registered.contains(key) {
            self.registered.push(key.clone());
        }
    }

    fn dequeue_cell(&mut self, key: &ReuseKey) -> Option<Box<dyn ReuseView>> {
        self.factories.get(key).map(|factory| factory())
    }

    fn dequeue_decorative(
        &mut self,
        _kind: DecorativeKind,
        key: &ReuseKey,
    ) -> Option<Box<dyn ReuseView>> {
        self.factories.get(key).map(|factory| factory())
    }
}

#[derive(Default)]
struct GridHost {
    factories: HashMap<ReuseKey, Box<dyn Fn() -> Box<dyn ReuseView>>>,
}

impl GridHost {
    fn install<C>(&mut self)
    where
        C: BindableView<GridView> + Default,
    {
        self.factories.insert(
            C::reuse_key(),
            Box::new(|| Box::new(C::default()) as Box<dyn ReuseView>),
        );
    }
}

impl ViewHost<GridView> for GridHost {
    fn register_cell(&mut self, _key: &ReuseKey, _origin: &ViewOrigin) {}

    fn register_decorative(
        &mut self,
        _kind: DecorativeKind,
        _key: &ReuseKey,
        _origin: &ViewOrigin,
    ) {
    }

    fn dequeue_cell(&mut self, key: &ReuseKey) -> Option<Box<dyn ReuseView>> {
        self.factories.get(key).map(|factory| factory())
    }

    fn dequeue_decorative(
        &mut self,
        _kind: DecorativeKind,
        key: &ReuseKey,
    ) -> Option<Box<dyn ReuseView>> {
        self.factories.get(key).map(|factory| factory())
    }
}

fn row_slot(text: &str) -> ItemSlot<ListView> {
    ItemSlot::new::<RowCell>(text.to_string())
}

fn row_text(view: &dyn ReuseView) -> Option<&str> {
    view.downcast_ref::<RowCell>()
        .and_then(|cell| cell.text.as_deref())
}

fn list_layout(model: &SectionedModel<ListView>) -> Vec<Vec<String>> {
    model
        .iter()
        .map(|section| {
            section
                .iter()
                .map(|slot| slot.model::<String>().cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

#[test]
fn test_incremental_population_with_headers() {
    let mut source = ListViewDataSource::new();

    // The header append creates section 0; the item appends reuse it.
    let section = source.append_decorative(
        DecorativeSlot::new::<ListHeader>("First".to_string()),
        DecorativeKind::Header,
        None,
    );
    assert_eq!(section, 0);

    let positions =
        source.append_models::<RowCell>(["r0", "r1", "r2"].map(str::to_string), None);
    assert_eq!(
        positions,
        [SlotIndex::new(0, 0), SlotIndex::new(0, 1), SlotIndex::new(0, 2)]
    );

    source.append_section(Section::new());
    let positions = source.append_models::<RowCell>(["s0"].map(str::to_string), None);
    assert_eq!(positions, [SlotIndex::new(1, 0)]);

    let mut host = ListHost::default();
    host.install::<RowCell>();
    host.install::<ListHeader>();
    host.register_view::<RowCell>();
    host.register_decorative_view::<ListHeader>(DecorativeKind::Header);

    let header = source
        .materialize_decorative(&mut host, 0, DecorativeKind::Header)
        .unwrap();
    assert_eq!(
        header
            .downcast_ref::<ListHeader>()
            .and_then(|view| view.title.as_deref()),
        Some("First")
    );

    let cell = source.materialize_cell(&mut host, SlotIndex::new(0, 2));
    assert_eq!(row_text(&*cell), Some("r2"));

    assert_eq!(source.item_size(SlotIndex::new(0, 0)), Some(44.0));
    assert_eq!(source.decorative_size(0, DecorativeKind::Header), Some(24.0));
    assert_eq!(source.decorative_size(0, DecorativeKind::Footer), None);
    assert!(
        source
            .materialize_decorative(&mut host, 1, DecorativeKind::Header)
            .is_none()
    );
}

#[test]
fn test_mixed_view_types_share_a_section() {
    let mut model = SectionedModel::<ListView>::new();
    model.append_item(row_slot("r0"), None);
    model.append_item(ItemSlot::new::<BadgeCell>(7), None);
    model.append_item(row_slot("r1"), None);
    model.append_item(ItemSlot::new::<BadgeCell>(9), None);

    assert_eq!(
        model.find::<BadgeCell>(),
        [SlotIndex::new(0, 1), SlotIndex::new(0, 3)]
    );
    assert_eq!(
        model.find::<RowCell>(),
        [SlotIndex::new(0, 0), SlotIndex::new(0, 2)]
    );

    // Slots answer type probes without giving up their model.
    assert!(model[SlotIndex::new(0, 1)].is_view::<BadgeCell>());
    assert_eq!(model[SlotIndex::new(0, 1)].model::<u32>(), Some(&7));
    assert_eq!(model[SlotIndex::new(0, 1)].model::<String>(), None);

    let removed = model.remove_all_matching::<BadgeCell>();
    assert_eq!(removed, [SlotIndex::new(0, 1), SlotIndex::new(0, 3)]);
    assert_eq!(list_layout(&model), [["r0", "r1"]]);
    assert!(model.find::<BadgeCell>().is_empty());
}

#[test]
fn test_bulk_removal_across_sections() {
    let mut model = SectionedModel::<ListView>::new();
    model.append_section(Section::new().with_items(["a0", "a1", "a2", "a3"].map(row_slot)));
    model.append_section(Section::new().with_items(["b0", "b1"].map(row_slot)));

    let removed = model.remove_items([
        SlotIndex::new(0, 3),
        SlotIndex::new(0, 1),
        SlotIndex::new(1, 0),
    ]);

    assert_eq!(removed.len(), 3);
    assert_eq!(
        list_layout(&model),
        [vec!["a0".to_string(), "a2".to_string()], vec!["b1".to_string()]]
    );
}

#[test]
fn test_range_replacement_inside_a_section() {
    let mut model = SectionedModel::<ListView>::new();
    model.append_models::<RowCell>(
        ["r0", "r1", "r2", "r3"].map(str::to_string),
        None,
    );

    model[0].replace_range(1..3, ["x0", "x1", "x2"].map(row_slot));
    assert_eq!(list_layout(&model), [["r0", "x0", "x1", "x2", "r3"]]);

    model[0].replace_range(2.., std::iter::empty());
    assert_eq!(list_layout(&model), [["r0", "x0"]]);
}

#[test]
fn test_clearing_items_preserves_decoratives() {
    let mut source = ListViewDataSource::new();
    source.append_models::<RowCell>(["r0", "r1"].map(str::to_string), None);
    source.append_decorative(
        DecorativeSlot::new::<ListHeader>("Kept".to_string()),
        DecorativeKind::Header,
        Some(0),
    );

    source.remove_all_items(0, true);

    assert_eq!(source.section_count(), 1);
    assert_eq!(source.item_count(0), 0);
    assert_eq!(
        source
            .decorative(0, DecorativeKind::Header)
            .and_then(|slot| slot.model::<String>())
            .map(String::as_str),
        Some("Kept")
    );
}

#[test]
fn test_grid_sources_size_by_declared_dimensions() {
    let mut source = GridViewDataSource::new();
    source.append_models::<TileCell>(["t0", "t1"].map(str::to_string), None);
    source.append_decorative(
        DecorativeSlot::new::<GridBand>("top".to_string()),
        DecorativeKind::Header,
        Some(0),
    );
    source.append_decorative(
        DecorativeSlot::new::<GridBand>("bottom".to_string()),
        DecorativeKind::Footer,
        Some(0),
    );

    assert_eq!(
        source.item_size(SlotIndex::new(0, 0)),
        Some(Size::new(160.0, 90.0))
    );
    assert_eq!(
        source.decorative_size(0, DecorativeKind::Footer),
        Some(Size::new(320.0, 32.0))
    );
    assert_eq!(source[0].decorative_kinds().count(), 2);

    let mut host = GridHost::default();
    host.install::<TileCell>();
    host.install::<GridBand>();

    let tile = source.materialize_cell(&mut host, SlotIndex::new(0, 1));
    assert_eq!(
        tile.downcast_ref::<TileCell>()
            .and_then(|cell| cell.label.as_deref()),
        Some("t1")
    );

    let footer = source
        .materialize_decorative(&mut host, 0, DecorativeKind::Footer)
        .unwrap();
    assert_eq!(
        footer
            .downcast_ref::<GridBand>()
            .and_then(|band| band.label.as_deref()),
        Some("bottom")
    );
}

#[derive(Default)]
struct EditLog {
    moves: Mutex<Vec<(SlotIndex, SlotIndex)>>,
    edits: Mutex<Vec<(SlotIndex, EditOperation)>>,
}

impl DataSourceDelegate<ListView> for EditLog {
    fn can_move_item(&self, _index: SlotIndex) -> bool {
        true
    }

    fn move_item(&self, from: SlotIndex, to: SlotIndex) {
        self.moves.lock().unwrap().push((from, to));
    }

    fn can_edit_item(&self, index: SlotIndex) -> bool {
        index.item != 0
    }

    fn commit_edit(&self, index: SlotIndex, operation: EditOperation) {
        self.edits.lock().unwrap().push((index, operation));
    }
}

#[test]
fn test_move_and_edit_round_trip() {
    let log = Arc::new(EditLog::default());
    let mut source = ListViewDataSource::new().with_delegate(log.clone());
    source.append_models::<RowCell>(["r0", "r1", "r2"].map(str::to_string), None);

    assert!(!source.can_edit_item(SlotIndex::new(0, 0)));
    assert!(source.can_edit_item(SlotIndex::new(0, 1)));
    assert!(source.can_move_item(SlotIndex::new(0, 2)));

    source.move_item(SlotIndex::new(0, 0), SlotIndex::new(0, 2));
    // The move is forwarded, not applied; the model keeps its order.
    assert_eq!(list_layout(&source), [["r0", "r1", "r2"]]);
    assert_eq!(
        log.moves.lock().unwrap().as_slice(),
        [(SlotIndex::new(0, 0), SlotIndex::new(0, 2))]
    );

    // The application answers the report by reordering the model itself.
    let (from, to) = log.moves.lock().unwrap()[0];
    let slot = source.remove_item(from);
    source.insert_item(slot, to);
    assert_eq!(list_layout(&source), [["r1", "r2", "r0"]]);

    source.commit_edit(SlotIndex::new(0, 1), EditOperation::Delete);
    assert_eq!(
        log.edits.lock().unwrap().as_slice(),
        [(SlotIndex::new(0, 1), EditOperation::Delete)]
    );
}

#[test]
fn test_registration_is_idempotent_per_key() {
    let mut host = ListHost::default();
    host.register_view::<RowCell>();
    host.register_view::<RowCell>();
    host.register_decorative_view::<ListHeader>(DecorativeKind::Header);
    host.register_decorative_view::<ListHeader>(DecorativeKind::Footer);
    assert_eq!(host.registered.len(), 2);
}
