//! Contact List Example
//!
//! Builds a sectioned contact model, binds it to a list data source, and
//! drives an in-memory view host through full layout passes:
//! - Cell and decorative registration by reuse key
//! - On-demand section creation while populating
//! - Materialization with view recycling
//! - Sizing queries and delegate-gated editing
//!
//! Run with: cargo run -p horizon-modelsource --example contact_list

use std::collections::HashMap;
use std::sync::Arc;

use horizon_modelsource::prelude::*;

/// One address book entry.
#[derive(Clone)]
struct Contact {
    name: &'static str,
    phone: &'static str,
}

/// A cell showing one contact line.
#[derive(Default)]
struct ContactCell {
    line: String,
}

impl BindableView<ListView> for ContactCell {
    type Model = Contact;

    fn origin() -> ViewOrigin {
        ViewOrigin::Code
    }

    fn static_size() -> Option<f32> {
        Some(44.0)
    }

    fn set_model(&mut self, model: Contact) {
        self.line = format!("{} ({})", model.name, model.phone);
    }
}

/// A section header showing a letter group.
#[derive(Default)]
struct LetterHeader {
    title: String,
}

impl BindableView<ListView> for LetterHeader {
    type Model = String;

    fn origin() -> ViewOrigin {
        ViewOrigin::Code
    }

    fn static_size() -> Option<f32> {
        Some(28.0)
    }

    fn set_model(&mut self, model: String) {
        self.title = model;
    }
}

/// Allows row deletion and mirrors commits to the console.
struct AddressBookDelegate;

impl DataSourceDelegate<ListView> for AddressBookDelegate {
    fn can_edit_item(&self, _index: SlotIndex) -> bool {
        true
    }

    fn commit_edit(&self, index: SlotIndex, operation: EditOperation) {
        println!("  delegate: commit {:?} at {:?}", operation, index);
    }
}

/// An in-memory host that recycles views through a pool per reuse key.
struct PoolingHost {
    factories: HashMap<ReuseKey, Box<dyn Fn() -> Box<dyn ReuseView>>>,
    pool: HashMap<ReuseKey, Vec<Box<dyn ReuseView>>>,
    built: usize,
    recycled: usize,
}

impl PoolingHost {
    fn new() -> Self {
        Self {
            factories: HashMap::new(),
            pool: HashMap::new(),
            built: 0,
            recycled: 0,
        }
    }

    /// Wires a view type's reuse key to its constructor.
    fn install<C>(&mut self)
    where
        C: BindableView<ListView> + Default,
    {
        self.factories.insert(
            C::reuse_key(),
            Box::new(|| Box::new(C::default()) as Box<dyn ReuseView>),
        );
    }

    /// Returns a view to the pool once the layout is done with it.
    fn recycle(&mut self, key: ReuseKey, view: Box<dyn ReuseView>) {
        self.pool.entry(key).or_default().push(view);
    }

    fn take(&mut self, key: &ReuseKey) -> Option<Box<dyn ReuseView>> {
        if let Some(view) = self.pool.get_mut(key).and_then(Vec::pop) {
            self.recycled += 1;
            return Some(view);
        }
        let factory = self.factories.get(key)?;
        let view = factory();
        self.built += 1;
        Some(view)
    }
}

impl ViewHost<ListView> for PoolingHost {
    fn register_cell(&mut self, key: &ReuseKey, origin: &ViewOrigin) {
        tracing::info!(target: "contact_list", "registered cell `{}` from {:?}", key, origin);
    }

    fn register_decorative(&mut self, kind: DecorativeKind, key: &ReuseKey, origin: &ViewOrigin) {
        tracing::info!(
            target: "contact_list",
            "registered {} `{}` from {:?}",
            kind,
            key,
            origin
        );
    }

    // The pool is keyed by reuse key alone, so cells and decoratives
    // share one recycling path.
    fn dequeue_cell(&mut self, key: &ReuseKey) -> Option<Box<dyn ReuseView>> {
        self.take(key)
    }

    fn dequeue_decorative(
        &mut self,
        _kind: DecorativeKind,
        key: &ReuseKey,
    ) -> Option<Box<dyn ReuseView>> {
        self.take(key)
    }
}

/// Materializes every position once, printing what a layout would place.
fn layout_pass(source: &ListViewDataSource, host: &mut PoolingHost) {
    for section in 0..source.section_count() {
        if let Some(header) = source.materialize_decorative(host, section, DecorativeKind::Header)
        {
            let title = header
                .downcast_ref::<LetterHeader>()
                .map(|view| view.title.clone())
                .unwrap_or_default();
            let height = source
                .decorative_size(section, DecorativeKind::Header)
                .unwrap_or(0.0);
            println!("== {title} ({height:.0} pt)");
            if let Some(slot) = source.decorative(section, DecorativeKind::Header) {
                host.recycle(slot.reuse_key().clone(), header);
            }
        }
        for item in 0..source.item_count(section) {
            let index = SlotIndex::new(section, item);
            let cell = source.materialize_cell(host, index);
            if let Some(view) = cell.downcast_ref::<ContactCell>() {
                let height = source.item_size(index).unwrap_or(0.0);
                let marker = if source.is_last_item(index) { '\u{2514}' } else { '\u{251c}' };
                println!("  {marker} {} ({height:.0} pt)", view.line);
            }
            host.recycle(source[index].reuse_key().clone(), cell);
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut host = PoolingHost::new();
    host.install::<ContactCell>();
    host.install::<LetterHeader>();
    host.register_view::<ContactCell>();
    host.register_decorative_view::<LetterHeader>(DecorativeKind::Header);

    let mut source = ListViewDataSource::new().with_delegate(Arc::new(AddressBookDelegate));

    // The first appends create section 0 on demand.
    source.append_decorative(
        DecorativeSlot::new::<LetterHeader>("A".to_string()),
        DecorativeKind::Header,
        None,
    );
    source.append_models::<ContactCell>(
        [
            Contact {
                name: "Ada Lovelace",
                phone: "+44 20 7946 0958",
            },
            Contact {
                name: "Alan Turing",
                phone: "+44 1223 334400",
            },
        ],
        None,
    );

    // A second letter group; trailing appends now land here.
    source.append_section(Section::new());
    source.append_decorative(
        DecorativeSlot::new::<LetterHeader>("G".to_string()),
        DecorativeKind::Header,
        None,
    );
    source.append_models::<ContactCell>(
        [Contact {
            name: "Grace Hopper",
            phone: "+1 212 555 0187",
        }],
        None,
    );

    println!("-- initial layout --");
    layout_pass(&source, &mut host);

    // An edit gesture: the delegate is consulted, then the application
    // applies the mutation it decided on.
    let target = SlotIndex::new(0, 1);
    if source.can_edit_item(target) {
        source.commit_edit(target, EditOperation::Delete);
        let removed = source.remove_item(target);
        println!(
            "removed {}",
            removed
                .model::<Contact>()
                .map(|contact| contact.name)
                .unwrap_or("<unknown>")
        );
    }

    println!("-- after deletion --");
    layout_pass(&source, &mut host);

    println!(
        "views built: {}, views recycled: {}",
        host.built, host.recycled
    );
}
