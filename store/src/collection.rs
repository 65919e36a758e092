use shared::Entity;

/// In-memory mirror of one remote collection plus its fetched flag
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<E> {
    items: Vec<E>,
    fetched: bool,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            fetched: false,
        }
    }
}

impl<E: Entity> Collection<E> {
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace everything with a fresh server listing and mark as fetched
    pub fn load(&mut self, items: Vec<E>) {
        self.items = items;
        self.fetched = true;
    }

    pub fn invalidate(&mut self) {
        self.fetched = false;
    }

    pub fn push(&mut self, item: E) {
        self.items.push(item);
    }

    /// Replace the entity with the same id. Returns false when nothing matched.
    pub fn replace(&mut self, item: E) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    /// Replace in place, or append when the id is not cached yet
    pub fn upsert(&mut self, item: E) {
        if let Some(existing) = self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Remove every entity with this id. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before - self.items.len()
    }
}
