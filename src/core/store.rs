//! Dashboard state store - the single source of truth.
//!
//! Every mutation goes through [`DashboardStore`]. Any change is written to
//! the injected [`StateStorage`] immediately, as one full snapshot under
//! [`STORAGE_KEY`]. Operations naming an unknown widget are silent no-ops
//! and report `false`.

use super::document;
use super::error::DashboardError;
use super::storage::{StateStorage, STORAGE_KEY};
use super::transfer::{ConfigFiles, EXPORT_FILE_NAME};
use crate::data::{
    CanvasSize, DashboardState, NewWidget, Position, Size, Theme, Widget, WidgetId, WidgetUpdate,
};
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

/// Mutations available to interaction controllers
pub trait WidgetActions {
    fn move_widget(&mut self, id: &WidgetId, position: Position) -> bool;
    fn resize_widget(&mut self, id: &WidgetId, size: Size) -> bool;
    fn bring_to_front(&mut self, id: &WidgetId) -> bool;
}

/// Hands out `widget-<millis>-<seq>` ids
#[derive(Debug, Default)]
struct IdGenerator {
    sequence: u64,
}

impl IdGenerator {
    fn next(&mut self, state: &DashboardState) -> WidgetId {
        loop {
            self.sequence += 1;
            let candidate = WidgetId::new(format!(
                "widget-{}-{}",
                Utc::now().timestamp_millis(),
                self.sequence
            ));
            // Imported documents may already use this pattern
            if !state.contains(&candidate) {
                return candidate;
            }
        }
    }
}

pub struct DashboardStore {
    state: DashboardState,
    storage: Box<dyn StateStorage>,
    ids: IdGenerator,
}

impl DashboardStore {
    /// Load the stored snapshot, falling back to `defaults` when it is
    /// missing, unreadable or invalid. The resulting state is written back.
    pub fn open(storage: Box<dyn StateStorage>, defaults: DashboardState) -> Self {
        let state = match storage.get(STORAGE_KEY) {
            Ok(Some(text)) => match document::parse(&text) {
                Ok(state) => {
                    tracing::info!("Loaded dashboard with {} widgets", state.widgets.len());
                    state
                }
                Err(e) => {
                    tracing::warn!("Discarding stored dashboard: {}", e);
                    defaults
                }
            },
            Ok(None) => {
                tracing::info!("No stored dashboard, using defaults");
                defaults
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to read stored dashboard");
                defaults
            }
        };

        let mut store = Self {
            state,
            storage,
            ids: IdGenerator::default(),
        };
        store.persist();
        store
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.state.widgets
    }

    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.state.widget(id)
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.state.canvas_size
    }

    pub fn paint_order(&self) -> Vec<&Widget> {
        self.state.paint_order()
    }

    /// Append a widget with a fresh id on top of the stack
    pub fn add_widget(&mut self, new: NewWidget) -> WidgetId {
        let top = self.state.max_z_index().unwrap_or(0).max(0);
        let z_index = self.z_above(top);
        let id = self.ids.next(&self.state);

        tracing::debug!("Adding {} widget '{}' as {}", new.content.kind(), new.title, id);
        self.state.widgets.push(Widget {
            id: id.clone(),
            title: new.title,
            position: new.position,
            size: new.size,
            color: new.color,
            z_index,
            config: None,
            content: new.content,
        });
        self.persist();
        id
    }

    pub fn remove_widget(&mut self, id: &WidgetId) -> bool {
        let before = self.state.widgets.len();
        self.state.widgets.retain(|w| &w.id != id);
        if self.state.widgets.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Shallow merge; refuses content of a different kind
    pub fn update_widget(&mut self, id: &WidgetId, update: WidgetUpdate) -> bool {
        let Some(widget) = self.state.widget_mut(id) else {
            return false;
        };

        if let Some(content) = &update.content {
            if content.kind() != widget.kind() {
                tracing::warn!(
                    "Refusing to change widget {} from {} to {}",
                    id,
                    widget.kind(),
                    content.kind()
                );
                return false;
            }
        }

        if let Some(title) = update.title {
            widget.title = title;
        }
        if let Some(color) = update.color {
            widget.color = color;
        }
        if let Some(content) = update.content {
            widget.content = content;
        }
        self.persist();
        true
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if self.state.theme == theme {
            return false;
        }
        self.state.theme = theme;
        self.persist();
        true
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme.toggled();
        self.set_theme(theme);
        theme
    }

    /// Pretty-printed snapshot of the whole state
    pub fn export_json(&self) -> Result<String, DashboardError> {
        document::to_pretty_json(&self.state)
    }

    /// Write the snapshot as `dashboard-config.json` through `files`
    pub fn export_config(&self, files: &mut dyn ConfigFiles) -> Result<PathBuf> {
        let json = self.export_json()?;
        let path = files.write_export(EXPORT_FILE_NAME, &json)?;
        tracing::info!("Exported dashboard to {}", path.display());
        Ok(path)
    }

    /// Replace the whole state with a parsed document.
    ///
    /// On failure the current state is kept and the error is logged and
    /// returned. Returns the number of imported widgets.
    pub fn import_config(&mut self, text: &str) -> Result<usize, DashboardError> {
        match document::parse(text) {
            Ok(state) => {
                let count = state.widgets.len();
                self.state = state;
                self.persist();
                tracing::info!("Imported dashboard with {} widgets", count);
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Failed to import configuration: {}", e);
                Err(e)
            }
        }
    }

    fn persist(&mut self) {
        let json = match document::to_json(&self.state) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize dashboard: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(STORAGE_KEY, &json) {
            tracing::warn!(error = ?e, "Failed to persist dashboard");
        }
    }

    /// `top + 1`, or when that overflows, renumber the stack to `1..=n`
    /// (keeping paint order) and return `n + 1`
    fn z_above(&mut self, top: i64) -> i64 {
        if let Some(z_index) = top.checked_add(1) {
            return z_index;
        }

        tracing::warn!("zIndex range exhausted, renumbering stacking order");
        let order: Vec<WidgetId> = self.state.paint_order().iter().map(|w| w.id.clone()).collect();
        for (rank, id) in order.iter().enumerate() {
            if let Some(widget) = self.state.widget_mut(id) {
                widget.z_index = rank as i64 + 1;
            }
        }
        order.len() as i64 + 1
    }

    fn with_widget<F>(&mut self, id: &WidgetId, apply: F) -> bool
    where
        F: FnOnce(&mut Widget),
    {
        match self.state.widget_mut(id) {
            Some(widget) => {
                apply(widget);
                self.persist();
                true
            }
            None => false,
        }
    }
}

impl WidgetActions for DashboardStore {
    /// Overwrite position; callers clamp beforehand
    fn move_widget(&mut self, id: &WidgetId, position: Position) -> bool {
        self.with_widget(id, |w| w.position = position)
    }

    fn resize_widget(&mut self, id: &WidgetId, size: Size) -> bool {
        self.with_widget(id, |w| w.size = size)
    }

    fn bring_to_front(&mut self, id: &WidgetId) -> bool {
        if !self.state.contains(id) {
            return false;
        }
        let top = self.state.max_z_index().unwrap_or(0);
        let z_index = self.z_above(top);
        self.with_widget(id, |w| w.z_index = z_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::samples;
    use crate::core::storage::MemoryStorage;
    use crate::core::transfer::FsConfigFiles;
    use crate::data::{ChartPoint, WidgetContent, WidgetKind};
    use std::collections::HashSet;

    fn empty_store() -> (DashboardStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = DashboardStore::open(
            Box::new(storage.clone()),
            DashboardState::new(CanvasSize::default()),
        );
        (store, storage)
    }

    fn seeded_store() -> (DashboardStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = DashboardStore::open(
            Box::new(storage.clone()),
            samples::default_state(CanvasSize::default()),
        );
        (store, storage)
    }

    fn new_widget(title: &str, kind: WidgetKind) -> NewWidget {
        NewWidget {
            title: title.to_string(),
            position: Position::new(100, 100),
            size: kind.default_size(),
            color: kind.default_color().to_string(),
            content: samples::sample_content(kind),
        }
    }

    fn stored_state(storage: &MemoryStorage) -> DashboardState {
        let text = storage.entry(STORAGE_KEY).expect("snapshot written");
        document::parse(&text).expect("snapshot parses")
    }

    #[test]
    fn test_first_add_gets_z_one_and_an_id() {
        let (mut store, _) = empty_store();
        let id = store.add_widget(new_widget("Sales", WidgetKind::LineChart));

        assert_eq!(store.widgets().len(), 1);
        assert!(!id.is_empty());
        let widget = store.widget(&id).unwrap();
        assert_eq!(widget.z_index, 1);
        assert_eq!(widget.title, "Sales");
    }

    #[test]
    fn test_added_ids_are_unique() {
        let (mut store, _) = seeded_store();
        let mut seen: HashSet<WidgetId> = store.widgets().iter().map(|w| w.id.clone()).collect();

        for i in 0..50 {
            let id = store.add_widget(new_widget(&format!("W{}", i), WidgetKind::BarChart));
            assert!(seen.insert(id), "id reused");
        }
        assert_eq!(store.widgets().len(), 54);
    }

    #[test]
    fn test_added_id_skips_ids_taken_by_import() {
        let (mut store, _) = empty_store();
        // Occupy a wide range of generated ids for the current millisecond
        let mut state = store.state().clone();
        let template = samples::default_widgets().remove(0);
        for seq in 1..=3 {
            let mut w = template.clone();
            w.id = WidgetId::new(format!("widget-{}-{}", Utc::now().timestamp_millis(), seq));
            state.widgets.push(w);
        }
        store.import_config(&document::to_json(&state).unwrap()).unwrap();

        let id = store.add_widget(new_widget("Fresh", WidgetKind::Table));
        assert_eq!(store.widgets().iter().filter(|w| w.id == id).count(), 1);
    }

    #[test]
    fn test_add_after_negative_z_starts_at_one() {
        let (mut store, _) = empty_store();
        let first = store.add_widget(new_widget("A", WidgetKind::Table));
        store.state.widget_mut(&first).unwrap().z_index = -10;

        let second = store.add_widget(new_widget("B", WidgetKind::Table));
        assert_eq!(store.widget(&second).unwrap().z_index, 1);
    }

    #[test]
    fn test_bring_to_front_tops_every_other_widget() {
        let (mut store, _) = seeded_store();
        let target = WidgetId::new("1");
        let before: Vec<(WidgetId, i64)> = store
            .widgets()
            .iter()
            .map(|w| (w.id.clone(), w.z_index))
            .collect();

        assert!(store.bring_to_front(&target));

        let z = store.widget(&target).unwrap().z_index;
        for (id, old_z) in before {
            if id != target {
                assert!(z > old_z);
                assert_eq!(store.widget(&id).unwrap().z_index, old_z);
            }
        }
    }

    fn import_with_max_z(store: &mut DashboardStore) {
        let mut state = samples::default_state(CanvasSize::default());
        state.widgets[0].z_index = i64::MAX;
        store.import_config(&document::to_json(&state).unwrap()).unwrap();
    }

    #[test]
    fn test_bring_to_front_survives_max_z_index() {
        let (mut store, _) = empty_store();
        import_with_max_z(&mut store);
        let order_before: Vec<WidgetId> =
            store.paint_order().iter().map(|w| w.id.clone()).collect();
        let target = WidgetId::new("2");

        assert!(store.bring_to_front(&target));

        let z = store.widget(&target).unwrap().z_index;
        for widget in store.widgets() {
            if widget.id != target {
                assert!(z > widget.z_index);
            }
        }
        // The others keep their relative order after renumbering
        let order_after: Vec<WidgetId> = store
            .paint_order()
            .iter()
            .map(|w| w.id.clone())
            .filter(|id| *id != target)
            .collect();
        let expected: Vec<WidgetId> = order_before.into_iter().filter(|id| *id != target).collect();
        assert_eq!(order_after, expected);
        assert_eq!(store.paint_order().last().unwrap().id, target);
    }

    #[test]
    fn test_add_widget_survives_max_z_index() {
        let (mut store, _) = empty_store();
        import_with_max_z(&mut store);

        let id = store.add_widget(new_widget("Late", WidgetKind::Table));

        let z = store.widget(&id).unwrap().z_index;
        assert!(store.widgets().iter().filter(|w| w.id != id).all(|w| w.z_index < z));
        assert_eq!(z, 5);
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let (mut store, _) = seeded_store();
        let id = WidgetId::new("2");

        store.move_widget(&id, Position::new(10, 10));
        store.resize_widget(&id, Size::new(500, 400));
        store.move_widget(&id, Position::new(30, 40));

        let widget = store.widget(&id).unwrap();
        assert_eq!(widget.position, Position::new(30, 40));
        assert_eq!(widget.size, Size::new(500, 400));
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let (mut store, storage) = seeded_store();
        let snapshot = store.state().clone();
        let writes = storage.writes();
        let ghost = WidgetId::new("ghost");

        assert!(!store.move_widget(&ghost, Position::new(1, 1)));
        assert!(!store.resize_widget(&ghost, Size::new(300, 300)));
        assert!(!store.bring_to_front(&ghost));
        assert!(!store.remove_widget(&ghost));
        assert!(!store.update_widget(&ghost, WidgetUpdate::title("x")));

        assert_eq!(store.state(), &snapshot);
        assert_eq!(storage.writes(), writes);
    }

    #[test]
    fn test_every_mutation_writes_full_snapshot() {
        let (mut store, storage) = seeded_store();
        let id = WidgetId::new("3");
        let writes = storage.writes();

        store.move_widget(&id, Position::new(5, 6));
        store.move_widget(&id, Position::new(7, 8));
        store.update_widget(&id, WidgetUpdate::color("#EF4444"));
        store.set_theme(Theme::Dark);

        assert_eq!(storage.writes(), writes + 4);
        assert_eq!(&stored_state(&storage), store.state());
    }

    #[test]
    fn test_update_merges_title_and_color() {
        let (mut store, _) = seeded_store();
        let id = WidgetId::new("1");

        assert!(store.update_widget(&id, WidgetUpdate::title("Revenue 2024")));
        assert!(store.update_widget(&id, WidgetUpdate::color("#10B981")));

        let widget = store.widget(&id).unwrap();
        assert_eq!(widget.title, "Revenue 2024");
        assert_eq!(widget.color, "#10B981");
        assert_eq!(widget.kind(), WidgetKind::LineChart);
    }

    #[test]
    fn test_update_refuses_kind_change() {
        let (mut store, _) = seeded_store();
        let id = WidgetId::new("1");
        let update = WidgetUpdate {
            title: Some("Changed".to_string()),
            content: Some(WidgetContent::Table(vec![ChartPoint::new("x", 1.0)])),
            ..WidgetUpdate::default()
        };

        assert!(!store.update_widget(&id, update));
        assert_eq!(store.widget(&id).unwrap().title, "Revenue Overview");
    }

    #[test]
    fn test_remove_widget() {
        let (mut store, storage) = seeded_store();
        assert!(store.remove_widget(&WidgetId::new("4")));
        assert_eq!(store.widgets().len(), 3);
        assert_eq!(stored_state(&storage).widgets.len(), 3);
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let (mut store, _) = seeded_store();
        store.set_theme(Theme::Dark);
        store.add_widget(new_widget("Regions", WidgetKind::Table));
        let before = store.state().clone();

        let exported = store.export_json().unwrap();
        store.import_config(&exported).unwrap();

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_malformed_import_keeps_state() {
        let (mut store, storage) = seeded_store();
        let before = store.state().clone();
        let writes = storage.writes();

        assert!(store.import_config("{not json").is_err());
        assert_eq!(store.state(), &before);
        assert_eq!(storage.writes(), writes);
    }

    #[test]
    fn test_import_replaces_state_and_persists() {
        let (mut store, storage) = seeded_store();
        let replacement = r#"{"widgets": [], "theme": "dark", "canvasSize": {"width": 900, "height": 600}}"#;

        assert_eq!(store.import_config(replacement).unwrap(), 0);
        assert!(store.widgets().is_empty());
        assert_eq!(store.canvas_size(), CanvasSize::new(900, 600));
        assert_eq!(stored_state(&storage).theme, Theme::Dark);
    }

    #[test]
    fn test_open_restores_stored_snapshot() {
        let stored = r#"{"widgets": [], "theme": "dark", "canvasSize": {"width": 900, "height": 600}}"#;
        let storage = MemoryStorage::with_entry(STORAGE_KEY, stored);
        let store = DashboardStore::open(
            Box::new(storage),
            samples::default_state(CanvasSize::default()),
        );

        assert_eq!(store.theme(), Theme::Dark);
        assert!(store.widgets().is_empty());
    }

    #[test]
    fn test_open_falls_back_on_garbage() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "][");
        let store = DashboardStore::open(
            Box::new(storage.clone()),
            samples::default_state(CanvasSize::default()),
        );

        assert_eq!(store.widgets().len(), 4);
        // Defaults are written back over the unreadable snapshot
        assert_eq!(stored_state(&storage).widgets.len(), 4);
    }

    #[test]
    fn test_export_config_writes_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = FsConfigFiles::new(dir.path());
        let (store, _) = seeded_store();

        let path = store.export_config(&mut files).unwrap();
        assert!(path.ends_with(EXPORT_FILE_NAME));

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(&document::parse(&text).unwrap(), store.state());
    }

    #[test]
    fn test_toggle_theme() {
        let (mut store, _) = seeded_store();
        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(store.toggle_theme(), Theme::Light);
        assert!(!store.set_theme(Theme::Light));
    }
}
