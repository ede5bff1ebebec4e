use crate::domain::board::{default_columns, Column, ColumnId};
use crate::domain::card::{Card, CardId};
use crate::domain::sorting::{self, SortDirection};
use crate::domain::{drag_drop, shuffle};
use crate::storage::Storage;

/// Handle returned by [`BoardStore::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn Fn(&[Column]) + Send>;

/// The single mutable source of truth for the board
///
/// Every operation runs synchronously to completion; observers receive the
/// column state after each effective change. Operations naming a column or
/// card that does not exist are silent no-ops and do not notify.
pub struct BoardStore {
    columns: Vec<Column>,
    dragged_card: Option<Card>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl BoardStore {
    /// Creates a store seeded with the three default columns
    pub fn new() -> Self {
        Self::from_columns(default_columns())
    }

    /// Creates a store from an explicit column snapshot
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self {
            columns,
            dragged_card: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Restores the board from `storage`, falling back to the default
    /// columns when nothing is persisted or the persisted state cannot be
    /// read. Load failures are logged, never propagated.
    pub async fn initialize(storage: &dyn Storage) -> Self {
        match storage.load_columns().await {
            Ok(Some(columns)) => Self::from_columns(columns),
            Ok(None) => Self::new(),
            Err(err) => {
                tracing::warn!("failed to load persisted board state: {err}");
                Self::new()
            }
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn dragged_card(&self) -> Option<&Card> {
        self.dragged_card.as_ref()
    }

    /// True only when every column is individually disabled
    ///
    /// Recomputed on every call rather than cached.
    pub fn global_disabled(&self) -> bool {
        self.columns.iter().all(|column| column.disabled)
    }

    /// Registers a callback invoked with the column state after every
    /// effective mutation
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: Fn(&[Column]) + Send + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(existing, _)| *existing != subscription);
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.columns);
        }
    }

    fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| &column.id == column_id)
    }

    fn card_owner_index(&self, card_id: &CardId) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.find_card(card_id).is_some())
    }

    /// Appends a new enabled, unsorted, empty column; the name defaults to ""
    pub fn add_column(&mut self, name: Option<&str>) {
        self.columns
            .push(Column::new(ColumnId::generate(), name.unwrap_or_default()));
        self.notify();
    }

    pub fn remove_column(&mut self, column_id: &ColumnId) {
        let before = self.columns.len();
        self.columns.retain(|column| &column.id != column_id);
        if self.columns.len() != before {
            self.notify();
        }
    }

    pub fn update_column_name(&mut self, column_id: &ColumnId, name: &str) {
        if let Some(column) = self.column_mut(column_id) {
            column.name = name.to_string();
            column.touch();
            self.notify();
        }
    }

    /// Flips one column's disabled flag; `last_edited` is not refreshed
    pub fn toggle_column_disabled(&mut self, column_id: &ColumnId) {
        if let Some(column) = self.column_mut(column_id) {
            column.disabled = !column.disabled;
            self.notify();
        }
    }

    /// Sets every column's disabled flag to the negation of the current
    /// aggregate, so a mixed board disables fully first
    pub fn toggle_global_disabled(&mut self) {
        let target = !self.global_disabled();
        for column in &mut self.columns {
            column.disabled = target;
        }
        self.notify();
    }

    /// Appends `card` to the column, assigning it a fresh id and the next
    /// order value
    pub fn add_card(&mut self, column_id: &ColumnId, mut card: Card) {
        if let Some(column) = self.column_mut(column_id) {
            card.id = CardId::generate();
            card.order = column.next_order();
            column.cards.push(card);
            column.touch();
            self.notify();
        }
    }

    /// Replaces the card carrying `updated.id` wholesale, keeping its
    /// position in the owning column
    pub fn update_card(&mut self, updated: Card) {
        if let Some(index) = self.card_owner_index(&updated.id) {
            let column = &mut self.columns[index];
            if let Some(slot) = column.cards.iter_mut().find(|card| card.id == updated.id) {
                *slot = updated;
            }
            column.touch();
            self.notify();
        }
    }

    /// Removes the card from its owning column and renumbers that column
    pub fn remove_card(&mut self, card_id: &CardId) {
        if let Some(index) = self.card_owner_index(card_id) {
            let column = &mut self.columns[index];
            column.cards.retain(|card| &card.id != card_id);
            column.renumber_cards();
            column.touch();
            self.notify();
        }
    }

    pub fn remove_all_cards(&mut self, column_id: &ColumnId) {
        if let Some(column) = self.column_mut(column_id) {
            column.cards.clear();
            column.touch();
            self.notify();
        }
    }

    /// Reorders the column's cards by title and records the direction; the
    /// cards' `order` fields are untouched
    pub fn sort_column_cards(&mut self, column_id: &ColumnId, direction: SortDirection) {
        if let Some(column) = self.column_mut(column_id) {
            column.cards = sorting::sort_by_title(&column.cards, direction);
            column.sort = direction;
            column.touch();
            self.notify();
        }
    }

    /// Restores the column's `order`-field sequence and clears the sort
    pub fn clear_column_sort(&mut self, column_id: &ColumnId) {
        if let Some(column) = self.column_mut(column_id) {
            column.cards = sorting::sort_by_order(&column.cards);
            column.sort = SortDirection::None;
            column.touch();
            self.notify();
        }
    }

    /// Randomly permutes the column sequence; card contents are untouched
    pub fn shuffle_columns(&mut self) {
        self.columns = shuffle::shuffle_columns(&self.columns);
        self.notify();
    }

    /// Shuffles each column's cards independently, reassigning orders
    pub fn shuffle_cards(&mut self) {
        self.columns = shuffle::shuffle_cards_per_column(&self.columns);
        for column in &mut self.columns {
            column.touch();
        }
        self.notify();
    }

    /// Commits a drag-and-drop relocation
    pub fn move_card(&mut self, card: &Card, target_column_id: &ColumnId, target_index: usize) {
        self.columns = drag_drop::move_card(&self.columns, card, target_column_id, target_index);
        self.notify();
    }

    /// Records which card is currently being dragged, for UI feedback
    pub fn set_dragged_card(&mut self, card: Option<Card>) {
        self.dragged_card = card;
        self.notify();
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn todo() -> ColumnId {
        ColumnId::new("todo")
    }

    fn done() -> ColumnId {
        ColumnId::new("done")
    }

    fn titles(column: &Column) -> Vec<&str> {
        column.cards.iter().map(|c| c.title.as_str()).collect()
    }

    fn orders(column: &Column) -> Vec<u32> {
        column.cards.iter().map(|c| c.order).collect()
    }

    #[test]
    fn test_new_store_seeds_default_columns() {
        let store = BoardStore::new();

        let names: Vec<&str> = store.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["TODO", "In Progress", "Done"]);
        assert!(store
            .columns()
            .iter()
            .all(|c| c.cards.is_empty() && !c.disabled));
        assert!(store.dragged_card().is_none());
    }

    #[test]
    fn test_add_card_assigns_sequential_orders() {
        let mut store = BoardStore::new();

        store.add_card(&todo(), Card::new("A"));
        store.add_card(&todo(), Card::new("B"));

        let column = &store.columns()[0];
        assert_eq!(titles(column), vec!["A", "B"]);
        assert_eq!(orders(column), vec![1, 2]);
        assert!(column.last_edited.is_some());
    }

    #[test]
    fn test_add_card_regenerates_id() {
        let mut store = BoardStore::new();
        let draft = Card::new("A");
        let draft_id = draft.id.clone();

        store.add_card(&todo(), draft);

        assert_ne!(store.columns()[0].cards[0].id, draft_id);
    }

    #[test]
    fn test_add_card_to_missing_column_is_a_noop() {
        let mut store = BoardStore::new();
        store.add_card(&ColumnId::new("missing"), Card::new("A"));
        assert!(store.columns().iter().all(|c| c.cards.is_empty()));
    }

    #[test]
    fn test_update_card_replaces_in_place() {
        let mut store = BoardStore::new();
        store.add_card(&todo(), Card::new("A"));
        store.add_card(&todo(), Card::new("B"));

        let mut updated = store.columns()[0].cards[0].clone();
        updated.title = "A2".to_string();
        store.update_card(updated);

        let column = &store.columns()[0];
        assert_eq!(titles(column), vec!["A2", "B"]);
        assert_eq!(orders(column), vec![1, 2]);
    }

    #[test]
    fn test_update_card_with_unknown_id_is_a_noop() {
        let mut store = BoardStore::new();
        store.add_card(&todo(), Card::new("A"));

        let mut phantom = Card::new("Phantom");
        phantom.id = CardId::new("phantom");
        store.update_card(phantom);

        assert_eq!(titles(&store.columns()[0]), vec!["A"]);
    }

    #[test]
    fn test_remove_card_renumbers_the_column() {
        let mut store = BoardStore::new();
        store.add_card(&todo(), Card::new("A"));
        store.add_card(&todo(), Card::new("B"));
        store.add_card(&todo(), Card::new("C"));

        let middle = store.columns()[0].cards[1].id.clone();
        store.remove_card(&middle);

        let column = &store.columns()[0];
        assert_eq!(titles(column), vec!["A", "C"]);
        assert_eq!(orders(column), vec![1, 2]);
    }

    #[test]
    fn test_remove_all_cards() {
        let mut store = BoardStore::new();
        store.add_card(&todo(), Card::new("A"));
        store.add_card(&todo(), Card::new("B"));

        store.remove_all_cards(&todo());

        assert!(store.columns()[0].cards.is_empty());
        assert!(store.columns()[0].last_edited.is_some());
    }

    #[test]
    fn test_remove_column_discards_its_cards() {
        let mut store = BoardStore::new();
        store.add_card(&todo(), Card::new("A"));

        store.remove_column(&todo());

        assert_eq!(store.columns().len(), 2);
        assert!(store.columns().iter().all(|c| c.id.as_str() != "todo"));
    }

    #[test]
    fn test_update_column_name_touches_last_edited() {
        let mut store = BoardStore::new();

        store.update_column_name(&todo(), "Backlog");

        let column = &store.columns()[0];
        assert_eq!(column.name, "Backlog");
        assert!(column.last_edited.is_some());
    }

    #[test]
    fn test_toggle_column_disabled_leaves_last_edited() {
        let mut store = BoardStore::new();

        store.toggle_column_disabled(&todo());

        let column = &store.columns()[0];
        assert!(column.disabled);
        assert!(column.last_edited.is_none());

        store.toggle_column_disabled(&todo());
        assert!(!store.columns()[0].disabled);
    }

    #[test]
    fn test_toggle_global_disabled_from_mixed_state() {
        let mut store = BoardStore::new();
        store.toggle_column_disabled(&done());

        // [false, false, true]: aggregate is false, so everything disables
        store.toggle_global_disabled();
        assert!(store.columns().iter().all(|c| c.disabled));
        assert!(store.global_disabled());

        // Second application enables everything
        store.toggle_global_disabled();
        assert!(store.columns().iter().all(|c| !c.disabled));
    }

    #[test]
    fn test_toggle_global_disabled_twice_restores_uniform_state() {
        let mut store = BoardStore::new();

        store.toggle_global_disabled();
        store.toggle_global_disabled();

        assert!(store.columns().iter().all(|c| !c.disabled));
    }

    #[test]
    fn test_global_disabled_is_vacuously_true_without_columns() {
        let store = BoardStore::from_columns(Vec::new());
        assert!(store.global_disabled());
    }

    #[test]
    fn test_sort_desc_then_clear_restores_order_sequence() {
        let mut store = BoardStore::new();
        store.add_card(&todo(), Card::new("Apple"));
        store.add_card(&todo(), Card::new("Banana"));

        store.sort_column_cards(&todo(), SortDirection::Desc);

        let column = &store.columns()[0];
        assert_eq!(titles(column), vec!["Banana", "Apple"]);
        assert_eq!(column.sort, SortDirection::Desc);
        // Order fields travel with their cards
        assert_eq!(orders(column), vec![2, 1]);

        store.clear_column_sort(&todo());

        let column = &store.columns()[0];
        assert_eq!(titles(column), vec!["Apple", "Banana"]);
        assert_eq!(column.sort, SortDirection::None);
        assert_eq!(orders(column), vec![1, 2]);
    }

    #[test]
    fn test_move_card_commits_relocation() {
        let mut store = BoardStore::new();
        store.add_card(&todo(), Card::new("A"));
        let moving = store.columns()[0].cards[0].clone();

        store.move_card(&moving, &done(), 0);

        assert!(store.columns()[0].cards.is_empty());
        let target = &store.columns()[2];
        assert_eq!(target.cards[0].id, moving.id);
        assert_eq!(orders(target), vec![1]);
    }

    #[test]
    fn test_shuffle_cards_renumbers_and_touches() {
        let mut store = BoardStore::new();
        for title in ["A", "B", "C", "D", "E"] {
            store.add_card(&todo(), Card::new(title));
        }

        store.shuffle_cards();

        let column = &store.columns()[0];
        assert_eq!(orders(column), vec![1, 2, 3, 4, 5]);

        let mut shuffled_titles = titles(column);
        shuffled_titles.sort_unstable();
        assert_eq!(shuffled_titles, vec!["A", "B", "C", "D", "E"]);

        assert!(store.columns().iter().all(|c| c.last_edited.is_some()));
    }

    #[test]
    fn test_shuffle_columns_preserves_the_set() {
        let mut store = BoardStore::new();

        store.shuffle_columns();

        let mut ids: Vec<&str> = store.columns().iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["done", "in-progress", "todo"]);
    }

    #[test]
    fn test_set_dragged_card() {
        let mut store = BoardStore::new();
        let card = Card::new("A");

        store.set_dragged_card(Some(card.clone()));
        assert_eq!(store.dragged_card().map(|c| c.id.clone()), Some(card.id));

        store.set_dragged_card(None);
        assert!(store.dragged_card().is_none());
    }

    #[test]
    fn test_subscribe_notifies_only_on_effective_mutations() {
        let mut store = BoardStore::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();

        let subscription = store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.add_column(Some("Later"));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // Not-found no-ops stay silent
        store.remove_column(&ColumnId::new("missing"));
        store.add_card(&ColumnId::new("missing"), Card::new("A"));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        store.unsubscribe(subscription);
        store.add_column(None);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscriber_sees_the_new_state() {
        let mut store = BoardStore::new();
        let lengths = Arc::new(AtomicUsize::new(0));
        let seen = lengths.clone();

        store.subscribe(move |columns| {
            seen.store(columns.len(), Ordering::SeqCst);
        });

        store.add_column(Some("Later"));
        assert_eq!(lengths.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_initialize_restores_saved_columns() {
        let storage = MemoryStorage::new();
        let mut original = BoardStore::new();
        original.add_card(&todo(), Card::new("Persisted"));
        storage.save_columns(original.columns()).await.unwrap();

        let restored = BoardStore::initialize(&storage).await;

        assert_eq!(restored.columns().len(), 3);
        assert_eq!(titles(&restored.columns()[0]), vec!["Persisted"]);
    }

    #[tokio::test]
    async fn test_initialize_falls_back_on_malformed_state() {
        let storage = MemoryStorage::new();
        storage.set_raw("{definitely not json").await;

        let store = BoardStore::initialize(&storage).await;

        let names: Vec<&str> = store.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["TODO", "In Progress", "Done"]);
    }

    #[tokio::test]
    async fn test_initialize_without_persisted_state_seeds_defaults() {
        let storage = MemoryStorage::new();
        let store = BoardStore::initialize(&storage).await;
        assert_eq!(store.columns().len(), 3);
    }
}
